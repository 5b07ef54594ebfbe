use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::subcategories::dtos::{
    CreateSubcategoryDto, SubcategoryResponseDto, UpdateSubcategoryDto,
};
use crate::features::subcategories::models::Subcategory;
use crate::shared::types::PaginationQuery;

const SELECT_JOINED: &str = r#"
    SELECT s.id, s.name, s.category_id, c.name AS category_name,
           s.row_version, s.created_at, s.updated_at
    FROM subcategories s
    JOIN categories c ON c.id = s.category_id
"#;

/// Service for subcategory operations
pub struct SubcategoryService {
    pool: PgPool,
}

impl SubcategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List subcategories with their category names, ordered by name
    pub async fn list(
        &self,
        params: &PaginationQuery,
    ) -> Result<(Vec<SubcategoryResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subcategories")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let query = format!("{} ORDER BY s.name LIMIT $1 OFFSET $2", SELECT_JOINED);
        let subcategories: Vec<Subcategory> = sqlx::query_as(&query)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok((
            subcategories.into_iter().map(|s| s.into()).collect(),
            total,
        ))
    }

    /// Create a subcategory under an existing category
    pub async fn create(&self, dto: CreateSubcategoryDto) -> Result<SubcategoryResponseDto> {
        self.ensure_name_available(&dto.name).await?;

        // FK rejects a missing category (surfaced as a bad request)
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO subcategories (name, category_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(dto.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(id, category_id = dto.category_id, "Subcategory created");

        self.fetch_by_id(id).await
    }

    /// Update name and/or category; the update must carry the version it was based on
    pub async fn update(&self, id: i64, dto: UpdateSubcategoryDto) -> Result<SubcategoryResponseDto> {
        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE subcategories
            SET name = $1, category_id = $2, row_version = row_version + 1, updated_at = now()
            WHERE id = $3 AND row_version = $4
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(dto.category_id)
        .bind(id)
        .bind(dto.row_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?;

        match updated {
            Some(id) => self.fetch_by_id(id).await,
            None => Err(self.stale_or_missing(id).await),
        }
    }

    /// Delete a subcategory. Refused while products reference it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM subcategories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Subcategory with id {} not found",
                id
            )));
        }

        tracing::info!(id, "Subcategory deleted");

        Ok(())
    }

    /// Fresh joined read of one subcategory
    async fn fetch_by_id(&self, id: i64) -> Result<SubcategoryResponseDto> {
        let query = format!("{} WHERE s.id = $1", SELECT_JOINED);
        let subcategory: Subcategory = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Subcategory with id {} not found", id)))?;

        Ok(subcategory.into())
    }

    /// Name uniqueness is enforced here (case-insensitive), not by the schema
    async fn ensure_name_available(&self, name: &str) -> Result<()> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM subcategories WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if taken {
            return Err(AppError::Conflict(format!(
                "Subcategory \"{}\" already exists",
                name
            )));
        }

        Ok(())
    }

    /// A zero-row update means the id vanished or the caller's version is stale
    async fn stale_or_missing(&self, id: i64) -> AppError {
        match sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM subcategories WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        {
            Ok(true) => AppError::Conflict(format!(
                "Subcategory {} was changed by another request; reload it and retry",
                id
            )),
            Ok(false) => AppError::NotFound(format!("Subcategory with id {} not found", id)),
            Err(e) => AppError::Database(e),
        }
    }
}
