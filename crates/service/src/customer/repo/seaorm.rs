use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::customer::domain::{Customer, NewCustomer};
use crate::customer::repository::CustomerDao;
use crate::errors::ServiceError;
use models::customer;

/// Relational storage provider backed by the `customer` table.
pub struct SeaOrmCustomerDao {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerDao {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CustomerDao for SeaOrmCustomerDao {
    async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn select_customer_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        let row = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(row.map(Customer::from))
    }

    async fn insert_customer(&self, new: NewCustomer) -> Result<Customer, ServiceError> {
        let created = customer::create(&self.db, &new.name, &new.email, new.age).await?;
        Ok(created.into())
    }

    async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError> {
        let n = customer::Entity::find()
            .filter(customer::Column::Email.eq(email.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(n > 0)
    }

    async fn exists_customer_with_id(&self, id: i32) -> Result<bool, ServiceError> {
        let n = customer::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(n > 0)
    }

    async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError> {
        customer::hard_delete(&self.db, id).await?;
        Ok(())
    }

    async fn update_customer(&self, c: Customer) -> Result<Customer, ServiceError> {
        let updated = customer::replace(&self.db, c.id, &c.name, &c.email, c.age)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer"))?;
        Ok(updated.into())
    }
}
