#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect;

use crate::customer::{Customer, CustomerDao, NewCustomer};
use crate::errors::ServiceError;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connection for database-backed tests; `None` skips them.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return None; }

    // Run migrations exactly once, with a throwaway connection
    let migrated = MIGRATED
        .get_or_init(|| async {
            match connect().await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => { eprintln!("skip: migrate up failed: {}", e); false }
                },
                Err(e) => { eprintln!("skip: cannot connect to db: {}", e); false }
            }
        })
        .await;
    if !*migrated { return None; }

    // Return a fresh connection for the current test's runtime
    connect().await.ok()
}

pub fn new_customer(name: &str, email: &str, age: i32) -> NewCustomer {
    NewCustomer { name: name.to_string(), email: email.to_string(), age }
}

/// Behaviour every storage provider must share. Works on non-empty stores.
pub async fn assert_dao_contract<R: CustomerDao + ?Sized>(dao: &R) -> Result<(), anyhow::Error> {
    let email = format!("contract_{}@example.com", uuid::Uuid::new_v4());
    assert!(!dao.exists_customer_with_email(&email).await?);

    // insert assigns an id and makes the record visible
    let stored = dao.insert_customer(new_customer("Contract", &email, 29)).await?;
    assert!(dao.exists_customer_with_email(&email).await?);
    assert!(dao.exists_customer_with_id(stored.id).await?);
    assert!(dao.select_all_customers().await?.iter().any(|c| c.email == email));

    let fetched = dao.select_customer_by_id(stored.id).await?.expect("inserted customer");
    assert_eq!(fetched, stored);

    // update replaces in place
    let changed = Customer { age: 49, name: "Renamed".into(), ..stored.clone() };
    dao.update_customer(changed.clone()).await?;
    assert_eq!(dao.select_customer_by_id(stored.id).await?, Some(changed));
    let copies = dao.select_all_customers().await?.into_iter().filter(|c| c.id == stored.id).count();
    assert_eq!(copies, 1);

    // delete removes, second delete is a no-op
    dao.delete_customer_by_id(stored.id).await?;
    assert!(dao.select_customer_by_id(stored.id).await?.is_none());
    assert!(!dao.exists_customer_with_id(stored.id).await?);
    dao.delete_customer_by_id(stored.id).await?;

    // updating a removed record is NotFound
    let res = dao.update_customer(stored).await;
    assert!(matches!(res, Err(ServiceError::NotFound(_))));

    assert!(dao.select_customer_by_id(-1).await?.is_none());
    assert!(!dao.exists_customer_with_id(-1).await?);
    Ok(())
}
