use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::customer::domain::{Customer, NewCustomer};
use crate::customer::repository::CustomerDao;
use crate::errors::ServiceError;

/// Process-local customer store.
///
/// Owned by whoever constructs it and shared through an `Arc`; there is no
/// global instance. Ids come from a counter that starts after the highest
/// seeded id and never reuses values, even after deletes.
#[derive(Default)]
pub struct InMemoryCustomerDao {
    customers: DashMap<i32, Customer>,
    last_id: AtomicI32,
}

impl InMemoryCustomerDao {
    pub fn new() -> Self { Self::default() }

    /// Store preloaded with the two demo customers.
    pub fn with_seed_data() -> Self {
        Self::from_customers(vec![
            Customer { id: 1, name: "Avinaash".into(), email: "avinaash@io.com".into(), age: 31 },
            Customer { id: 2, name: "Leevy".into(), email: "leevy@io.com".into(), age: 30 },
        ])
    }

    pub fn from_customers(customers: Vec<Customer>) -> Self {
        let last_id = customers.iter().map(|c| c.id).max().unwrap_or(0);
        let map = customers.into_iter().map(|c| (c.id, c)).collect();
        Self { customers: map, last_id: AtomicI32::new(last_id) }
    }

    pub fn len(&self) -> usize { self.customers.len() }

    pub fn is_empty(&self) -> bool { self.customers.is_empty() }
}

#[async_trait]
impl CustomerDao for InMemoryCustomerDao {
    async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        let mut all: Vec<Customer> = self.customers.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn select_customer_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        Ok(self.customers.get(&id).map(|e| e.value().clone()))
    }

    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer, ServiceError> {
        let prev = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map_err(|last| ServiceError::Db(format!("customer id space exhausted after {}", last)))?;
        let id = prev + 1;
        let stored = customer.with_id(id);
        self.customers.insert(id, stored.clone());
        debug!(id, "in_memory_customer_inserted");
        Ok(stored)
    }

    async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(self.customers.iter().any(|e| e.value().email == email))
    }

    async fn exists_customer_with_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.customers.contains_key(&id))
    }

    async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError> {
        self.customers.remove(&id);
        Ok(())
    }

    async fn update_customer(&self, customer: Customer) -> Result<Customer, ServiceError> {
        let mut slot = self
            .customers
            .get_mut(&customer.id)
            .ok_or_else(|| ServiceError::not_found("customer"))?;
        *slot = customer.clone();
        Ok(customer)
    }
}
