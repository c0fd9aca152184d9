//! Product service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;
use rust_decimal::Decimal;

use common::AppError;
use domain::Product;
use product_service_lib::repository::{MockProductRepository, ProductDraft};
use product_service_lib::service::{ProductManager, ProductService};

fn test_draft() -> ProductDraft {
    ProductDraft {
        name: "Mechanical Keyboard".to_string(),
        description: Some("Tenkeyless".to_string()),
        price: Decimal::new(2999, 2),
        stock_quantity: 25,
        category: Some("peripherals".to_string()),
        image_url: None,
    }
}

fn product_from_draft(id: i64, draft: ProductDraft) -> Product {
    Product {
        id,
        name: draft.name,
        description: draft.description,
        price: draft.price,
        stock_quantity: draft.stock_quantity,
        category: draft.category,
        image_url: draft.image_url,
    }
}

#[tokio::test]
async fn create_product_returns_stored_product() {
    let mut repo = MockProductRepository::new();
    repo.expect_create()
        .returning(|draft| Ok(product_from_draft(7, draft)));

    let service = ProductManager::new(Arc::new(repo));
    let product = service.create_product(test_draft()).await.unwrap();

    assert_eq!(product.id, 7);
    assert_eq!(product.stock_quantity, 25);
}

#[tokio::test]
async fn get_product_not_found() {
    let mut repo = MockProductRepository::new();
    repo.expect_find_by_id().with(eq(99)).returning(|_| Ok(None));

    let service = ProductManager::new(Arc::new(repo));
    let result = service.get_product(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn search_passes_fragment_through() {
    let mut repo = MockProductRepository::new();
    repo.expect_find_by_name_containing()
        .withf(|fragment| fragment == "keyboard")
        .returning(|_| Ok(vec![]));

    let service = ProductManager::new(Arc::new(repo));
    let products = service.search_products("keyboard").await.unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn adjust_stock_applies_negative_delta() {
    let mut repo = MockProductRepository::new();
    repo.expect_update_stock()
        .with(eq(7), eq(-3))
        .returning(|id, delta| {
            let mut product = product_from_draft(id, test_draft());
            product.stock_quantity += delta;
            Ok(product)
        });

    let service = ProductManager::new(Arc::new(repo));
    let product = service.adjust_stock(7, -3).await.unwrap();

    assert_eq!(product.stock_quantity, 22);
}

#[tokio::test]
async fn update_missing_product_is_not_found() {
    let mut repo = MockProductRepository::new();
    repo.expect_update()
        .returning(|_, _| Err(AppError::NotFound));

    let service = ProductManager::new(Arc::new(repo));
    let result = service.update_product(99, test_draft()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn delete_missing_product_is_not_found() {
    let mut repo = MockProductRepository::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let service = ProductManager::new(Arc::new(repo));
    let result = service.delete_product(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
