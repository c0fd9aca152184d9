//! Product service - catalog CRUD and stock adjustment.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::Product;

use crate::repository::{ProductDraft, ProductRepository};

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Get product by ID
    async fn get_product(&self, id: i64) -> AppResult<Product>;

    /// Get all products in a category
    async fn get_products_by_category(&self, category: &str) -> AppResult<Vec<Product>>;

    /// Search products by name fragment
    async fn search_products(&self, fragment: &str) -> AppResult<Vec<Product>>;

    /// List all products
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Create a new product
    async fn create_product(&self, draft: ProductDraft) -> AppResult<Product>;

    /// Overwrite every mutable field of a product
    async fn update_product(&self, id: i64, draft: ProductDraft) -> AppResult<Product>;

    /// Add a delta (possibly negative) to a product's stock
    async fn adjust_stock(&self, id: i64, delta: i32) -> AppResult<Product>;

    /// Delete product by ID
    async fn delete_product(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn get_product(&self, id: i64) -> AppResult<Product> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn get_products_by_category(&self, category: &str) -> AppResult<Vec<Product>> {
        self.repo.find_by_category(category).await
    }

    async fn search_products(&self, fragment: &str) -> AppResult<Vec<Product>> {
        self.repo.find_by_name_containing(fragment).await
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.repo.list().await
    }

    async fn create_product(&self, draft: ProductDraft) -> AppResult<Product> {
        self.repo.create(draft).await
    }

    async fn update_product(&self, id: i64, draft: ProductDraft) -> AppResult<Product> {
        self.repo.update(id, draft).await
    }

    async fn adjust_stock(&self, id: i64, delta: i32) -> AppResult<Product> {
        self.repo.update_stock(id, delta).await
    }

    async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
