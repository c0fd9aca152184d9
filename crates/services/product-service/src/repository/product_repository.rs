//! Product repository implementation.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use common::{AppError, AppResult};
use domain::Product;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Mutable fields of a product; used for both create and full update.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// Find all products in a category
    async fn find_by_category(&self, category: &str) -> AppResult<Vec<Product>>;

    /// Find products whose name contains the given fragment
    async fn find_by_name_containing(&self, fragment: &str) -> AppResult<Vec<Product>>;

    /// List all products
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Persist a new product
    async fn create(&self, draft: ProductDraft) -> AppResult<Product>;

    /// Overwrite every mutable field of an existing product
    async fn update(&self, id: i64, draft: ProductDraft) -> AppResult<Product>;

    /// Add a delta (possibly negative) to a product's stock.
    ///
    /// Read-modify-write without locking; concurrent adjustments can
    /// lose updates.
    async fn update_stock(&self, id: i64, delta: i32) -> AppResult<Product>;

    /// Delete product by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ProductRepository backed by SeaORM.
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn find_by_category(&self, category: &str) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .filter(product::Column::Category.eq(category))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .filter(product::Column::Name.contains(fragment))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn create(&self, draft: ProductDraft) -> AppResult<Product> {
        let active_model = ActiveModel {
            name: Set(draft.name),
            description: Set(draft.description),
            price: Set(draft.price),
            stock_quantity: Set(draft.stock_quantity),
            category: Set(draft.category),
            image_url: Set(draft.image_url),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> AppResult<Product> {
        let model = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = model.into();
        active.name = Set(draft.name);
        active.description = Set(draft.description);
        active.price = Set(draft.price);
        active.stock_quantity = Set(draft.stock_quantity);
        active.category = Set(draft.category);
        active.image_url = Set(draft.image_url);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn update_stock(&self, id: i64, delta: i32) -> AppResult<Product> {
        let model = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let new_quantity = model.stock_quantity + delta;

        let mut active: ActiveModel = model.into();
        active.stock_quantity = Set(new_quantity);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
