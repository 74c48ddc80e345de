pub mod memory;
pub mod seaorm;

pub use memory::InMemoryCustomerDao;
pub use seaorm::SeaOrmCustomerDao;
