//! Customer module: three-layer architecture (domain, repository, service).
//!
//! Storage providers live under `repo`; every provider implements
//! [`repository::CustomerDao`] with identical semantics.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest, NewCustomer};
pub use repository::CustomerDao;
pub use service::CustomerService;
