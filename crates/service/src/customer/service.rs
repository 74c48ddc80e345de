use std::sync::Arc;

use common::metrics::{CUSTOMERS_CREATED_TOTAL, CUSTOMERS_DELETED_TOTAL, CUSTOMERS_UPDATED_TOTAL};
use tracing::{debug, info, instrument};

use super::domain::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest, NewCustomer};
use super::repository::CustomerDao;
use crate::errors::ServiceError;

/// Customer business service independent of web framework and storage.
///
/// Holds exactly one storage provider. `R` may be a concrete provider or
/// `dyn CustomerDao` when the provider is chosen at runtime.
pub struct CustomerService<R: CustomerDao + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerDao + ?Sized> Clone for CustomerService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CustomerDao + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.select_all_customers().await
    }

    #[instrument(skip(self))]
    pub async fn get_customer_by_id(&self, id: i32) -> Result<Customer, ServiceError> {
        self.repo
            .select_customer_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("customer with id [{}] not found", id)))
    }

    /// Register a new customer; the email must not belong to anyone yet.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::customer::{CustomerService, CustomerRegistrationRequest, repo::InMemoryCustomerDao};
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerDao::new()));
    /// let req = CustomerRegistrationRequest { name: "A".into(), email: "a@x.com".into(), age: 31 };
    /// let created = tokio_test::block_on(svc.add_customer(req.clone())).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert!(tokio_test::block_on(svc.add_customer(req)).is_err());
    /// ```
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn add_customer(&self, request: CustomerRegistrationRequest) -> Result<Customer, ServiceError> {
        if self.repo.exists_customer_with_email(&request.email).await? {
            debug!("email already registered");
            return Err(ServiceError::Conflict(format!("customer with email {} already exists", request.email)));
        }

        let created = self
            .repo
            .insert_customer(NewCustomer { name: request.name, email: request.email, age: request.age })
            .await?;
        CUSTOMERS_CREATED_TOTAL.inc();
        info!(customer_id = created.id, "customer_registered");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.exists_customer_with_id(id).await? {
            return Err(ServiceError::NotFound(format!("customer with id [{}] not found", id)));
        }
        self.repo.delete_customer_by_id(id).await?;
        CUSTOMERS_DELETED_TOTAL.inc();
        info!(customer_id = id, "customer_deleted");
        Ok(())
    }

    /// Apply the fields of `request` that differ from the stored record.
    ///
    /// Fails with `Validation` when nothing would change.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::customer::{CustomerService, CustomerRegistrationRequest, CustomerUpdateRequest, repo::InMemoryCustomerDao};
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerDao::new()));
    /// let c = tokio_test::block_on(svc.add_customer(CustomerRegistrationRequest { name: "A".into(), email: "a@x.com".into(), age: 31 })).unwrap();
    /// let req = CustomerUpdateRequest { age: Some(32), ..Default::default() };
    /// let updated = tokio_test::block_on(svc.update_customer(c.id, req)).unwrap();
    /// assert_eq!((updated.name.as_str(), updated.email.as_str(), updated.age), ("A", "a@x.com", 32));
    /// ```
    #[instrument(skip(self, request))]
    pub async fn update_customer(&self, id: i32, request: CustomerUpdateRequest) -> Result<Customer, ServiceError> {
        let mut customer = self.get_customer_by_id(id).await?;
        let mut changes = false;

        if let Some(name) = request.name.filter(|n| *n != customer.name) {
            customer.name = name;
            changes = true;
        }

        if let Some(email) = request.email.filter(|e| *e != customer.email) {
            if self.repo.exists_customer_with_email(&email).await? {
                return Err(ServiceError::Conflict(format!("email {} already exists", email)));
            }
            customer.email = email;
            changes = true;
        }

        if let Some(age) = request.age.filter(|a| *a != customer.age) {
            customer.age = age;
            changes = true;
        }

        if !changes {
            return Err(ServiceError::Validation("no data changes found".into()));
        }

        let updated = self.repo.update_customer(customer).await?;
        CUSTOMERS_UPDATED_TOTAL.inc();
        info!(customer_id = id, "customer_updated");
        Ok(updated)
    }
}
