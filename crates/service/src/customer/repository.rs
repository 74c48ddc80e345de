use async_trait::async_trait;

use super::domain::{Customer, NewCustomer};
use crate::errors::ServiceError;

/// Storage provider abstraction for customer records.
///
/// Implementations must agree on semantics: `insert_customer` assigns the id,
/// `delete_customer_by_id` is a no-op for unknown ids, and `update_customer`
/// replaces the record with the same id or fails with `NotFound`.
#[async_trait]
pub trait CustomerDao: Send + Sync {
    async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn select_customer_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError>;
    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer, ServiceError>;
    async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn exists_customer_with_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError>;
    async fn update_customer(&self, customer: Customer) -> Result<Customer, ServiceError>;
}
