//! Integration tests for Products domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The migration creates the schema the entity expects
//! - Ids come from the database sequence
//! - Ordering and deletes behave as queried
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = CreateProduct {
        name: builder.name("product", "main"),
        price: builder.price(),
    };

    let created = repo.create(input.clone()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert!(created.availability);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");
    assert_eq!(retrieved.id, created.id);
    assert_price_eq(retrieved.price, input.price, "stored price");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_orders_by_id_descending() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_order");

    for suffix in ["a", "b", "c"] {
        repo.create(CreateProduct {
            name: builder.name("product", suffix),
            price: builder.price(),
        })
        .await
        .unwrap();
    }

    let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids.len(), 3);
    assert_eq!(ids, sorted);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_toggle_through_service() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let created = service
        .create_product(CreateProduct {
            name: "Monitor".to_string(),
            price: 300.0,
        })
        .await
        .unwrap();

    let updated = service
        .update_product(
            created.id,
            UpdateProduct {
                name: "Monitor 27\"".to_string(),
                price: 349.99,
                availability: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Monitor 27\"");

    let toggled = service.toggle_availability(created.id).await.unwrap();
    assert!(!toggled.availability);

    let stored = service.get_product(created.id).await.unwrap();
    assert!(!stored.availability);
    assert_price_eq(stored.price, 349.99, "updated price");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_then_get_is_not_found() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let created = service
        .create_product(CreateProduct {
            name: "Desk".to_string(),
            price: 120.0,
        })
        .await
        .unwrap();

    service.delete_product(created.id).await.unwrap();

    assert!(matches!(
        service.get_product(created.id).await,
        Err(ProductError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_product(created.id).await,
        Err(ProductError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_row_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let result = repo
        .update(Product {
            id: 4242,
            name: "Ghost".to_string(),
            price: 1.0,
            availability: true,
        })
        .await;

    assert!(matches!(result, Err(ProductError::NotFound(4242))));
}
