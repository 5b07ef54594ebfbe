use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::products::dtos::{
    CreateProductDto, ProductQueryParams, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::models::Product;
use crate::features::products::services::listing;
use crate::modules::storage::MinIOClient;
use crate::shared::constants::PRODUCT_IMAGE_PREFIX;

const SELECT_JOINED: &str = r#"
    SELECT p.id, p.name, p.description, p.price, p.link,
           p.category_id, c.name AS category_name,
           p.subcategory_id, s.name AS subcategory_name,
           p.brand_id, b.name AS brand_name,
           p.image_url, p.isedited, p.isdeleted,
           p.row_version, p.created_at, p.updated_at
    FROM products p
    JOIN categories c ON c.id = p.category_id
    JOIN subcategories s ON s.id = p.subcategory_id
    LEFT JOIN brand b ON b.id = p.brand_id
"#;

/// Service for product operations
pub struct ProductService {
    pool: PgPool,
    minio_client: Arc<MinIOClient>,
}

impl ProductService {
    pub fn new(pool: PgPool, minio_client: Arc<MinIOClient>) -> Self {
        Self { pool, minio_client }
    }

    /// One page of the product table view, with the filtered view's total.
    ///
    /// The whole joined catalog is fetched and the view (deleted/modified
    /// filter, search, sort, page) is derived in memory.
    pub async fn list(
        &self,
        params: &ProductQueryParams,
    ) -> Result<(Vec<ProductResponseDto>, i64)> {
        let products = self.fetch_all().await?;

        let (rows, total) = listing::apply(
            products,
            params.search.as_deref(),
            params.modified.unwrap_or(false),
            params.page,
            params.limit(),
        );

        Ok((rows.into_iter().map(|p| p.into()).collect(), total))
    }

    /// Create a product and read it back with its joined names
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        self.ensure_name_available(&dto.name).await?;
        self.ensure_subcategory_in_category(dto.subcategory_id, dto.category_id)
            .await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, description, price, link, category_id, subcategory_id, brand_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(&dto.link)
        .bind(dto.category_id)
        .bind(dto.subcategory_id)
        .bind(dto.brand_id)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(id, "Product created");

        let product = self.fetch_by_id(id).await?;
        Ok(product.into())
    }

    /// Update a product; the update must carry the version it was based on
    pub async fn update(&self, id: i64, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        self.ensure_subcategory_in_category(dto.subcategory_id, dto.category_id)
            .await?;

        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE products
            SET name = $1, description = $2, price = $3, link = $4,
                category_id = $5, subcategory_id = $6, brand_id = $7, isedited = $8,
                row_version = row_version + 1, updated_at = now()
            WHERE id = $9 AND row_version = $10
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(&dto.link)
        .bind(dto.category_id)
        .bind(dto.subcategory_id)
        .bind(dto.brand_id)
        .bind(dto.isedited)
        .bind(id)
        .bind(dto.row_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?;

        match updated {
            Some(id) => {
                let product = self.fetch_by_id(id).await?;
                Ok(product.into())
            }
            None => Err(self.stale_or_missing(id).await),
        }
    }

    /// Flip the soft-delete flag; backs both the trash and restore endpoints
    pub async fn set_deleted(
        &self,
        id: i64,
        row_version: i64,
        deleted: bool,
    ) -> Result<ProductResponseDto> {
        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE products
            SET isdeleted = $1, row_version = row_version + 1, updated_at = now()
            WHERE id = $2 AND row_version = $3
            RETURNING id
            "#,
        )
        .bind(deleted)
        .bind(id)
        .bind(row_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        match updated {
            Some(id) => {
                tracing::info!(id, isdeleted = deleted, "Product soft-delete flag set");
                let product = self.fetch_by_id(id).await?;
                Ok(product.into())
            }
            None => Err(self.stale_or_missing(id).await),
        }
    }

    /// Attach or replace the product image.
    ///
    /// Upload happens before the previous image is removed and before the
    /// row write; a failure after the upload leaves the new object behind.
    pub async fn attach_image(
        &self,
        id: i64,
        row_version: i64,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<ProductResponseDto> {
        let product = self.fetch_by_id(id).await?;

        let key = self
            .minio_client
            .content_key(PRODUCT_IMAGE_PREFIX, &data, content_type)?;

        // Identical bytes are already stored under the same key
        if !self.minio_client.exists(&key).await? {
            self.minio_client.upload(&key, data, content_type).await?;
        }

        if let Some(old_url) = &product.image_url {
            if let Some(old_key) = self.minio_client.extract_key_from_url(old_url) {
                if old_key != key {
                    self.minio_client.delete(&old_key).await?;
                }
            }
        }

        let url = self.minio_client.get_public_url(&key);

        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE products
            SET image_url = $1, row_version = row_version + 1, updated_at = now()
            WHERE id = $2 AND row_version = $3
            RETURNING id
            "#,
        )
        .bind(&url)
        .bind(id)
        .bind(row_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        match updated {
            Some(id) => {
                tracing::info!(id, key = %key, "Product image attached");
                let product = self.fetch_by_id(id).await?;
                Ok(product.into())
            }
            None => Err(self.stale_or_missing(id).await),
        }
    }

    /// Remove a product for good: stored image first, then the row.
    ///
    /// This is the only hard delete on products; day-to-day removal goes
    /// through the trash flag instead.
    pub async fn purge(&self, id: i64) -> Result<()> {
        let product = self.fetch_by_id(id).await?;

        if let Some(image_url) = &product.image_url {
            if let Some(key) = self.minio_client.extract_key_from_url(image_url) {
                self.minio_client.delete(&key).await?;
            }
        }

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Product with id {} not found",
                id
            )));
        }

        tracing::info!(id, "Product purged");

        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<Product>> {
        sqlx::query_as(SELECT_JOINED)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Product> {
        let query = format!("{} WHERE p.id = $1", SELECT_JOINED);
        sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))
    }

    /// Names are checked against every row, soft-deleted ones included
    async fn ensure_name_available(&self, name: &str) -> Result<()> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM products WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if exists {
            return Err(AppError::Conflict(format!(
                "Product \"{}\" already exists",
                name
            )));
        }

        Ok(())
    }

    /// The chosen subcategory must exist and hang off the chosen category
    async fn ensure_subcategory_in_category(
        &self,
        subcategory_id: i64,
        category_id: i64,
    ) -> Result<()> {
        let parent: Option<i64> =
            sqlx::query_scalar("SELECT category_id FROM subcategories WHERE id = $1")
                .bind(subcategory_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        match parent {
            None => Err(AppError::BadRequest(format!(
                "Subcategory with id {} does not exist",
                subcategory_id
            ))),
            Some(parent_id) if parent_id != category_id => Err(AppError::BadRequest(
                "Subcategory does not belong to the selected category".to_string(),
            )),
            Some(_) => Ok(()),
        }
    }

    /// A zero-row update means the id vanished or the caller's version is stale
    async fn stale_or_missing(&self, id: i64) -> AppError {
        match sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
        {
            Ok(true) => AppError::Conflict(format!(
                "Product {} was changed by another request; reload it and retry",
                id
            )),
            Ok(false) => AppError::NotFound(format!("Product with id {} not found", id)),
            Err(e) => AppError::Database(e),
        }
    }
}
