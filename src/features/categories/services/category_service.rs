use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::shared::types::PaginationQuery;

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List categories ordered by name, with total count
    pub async fn list(&self, params: &PaginationQuery) -> Result<(Vec<CategoryResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let categories: Vec<Category> = sqlx::query_as(
            r#"
            SELECT id, name, row_version, created_at, updated_at
            FROM categories
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok((categories.into_iter().map(|c| c.into()).collect(), total))
    }

    /// Create a new category
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        self.ensure_name_available(&dto.name).await?;

        let category: Category = sqlx::query_as(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name, row_version, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(id = category.id, "Category created");

        Ok(category.into())
    }

    /// Rename a category; the update must carry the version it was based on
    pub async fn update(&self, id: i64, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let updated: Option<Category> = sqlx::query_as(
            r#"
            UPDATE categories
            SET name = $1, row_version = row_version + 1, updated_at = now()
            WHERE id = $2 AND row_version = $3
            RETURNING id, name, row_version, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(id)
        .bind(dto.row_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?;

        match updated {
            Some(category) => Ok(category.into()),
            None => Err(self.stale_or_missing(id).await),
        }
    }

    /// Delete a category. Refused while subcategories or products reference it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }

        tracing::info!(id, "Category deleted");

        Ok(())
    }

    /// Name uniqueness is enforced here (case-insensitive), not by the schema
    async fn ensure_name_available(&self, name: &str) -> Result<()> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if taken {
            return Err(AppError::Conflict(format!(
                "Category \"{}\" already exists",
                name
            )));
        }

        Ok(())
    }

    /// A zero-row update means the id vanished or the caller's version is stale
    async fn stale_or_missing(&self, id: i64) -> AppError {
        match sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
        {
            Ok(true) => AppError::Conflict(format!(
                "Category {} was changed by another request; reload it and retry",
                id
            )),
            Ok(false) => AppError::NotFound(format!("Category with id {} not found", id)),
            Err(e) => AppError::Database(e),
        }
    }
}
