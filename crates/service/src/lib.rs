//! Service layer providing business-oriented CRUD operations for customers.
//! - Separates business logic from data access behind the `CustomerDao` trait.
//! - Reuses entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod customer;
#[cfg(test)]
pub mod test_support;
