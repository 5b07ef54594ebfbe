use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::brands::dtos::{BrandResponseDto, CreateBrandDto, UpdateBrandDto};
use crate::features::brands::models::Brand;
use crate::shared::types::PaginationQuery;

/// Service for brand operations
pub struct BrandService {
    pool: PgPool,
}

impl BrandService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List brands ordered by name, with total count
    pub async fn list(&self, params: &PaginationQuery) -> Result<(Vec<BrandResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM brand")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let brands: Vec<Brand> = sqlx::query_as(
            r#"
            SELECT id, name, row_version, created_at, updated_at
            FROM brand
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok((brands.into_iter().map(|b| b.into()).collect(), total))
    }

    /// Create a new brand
    pub async fn create(&self, dto: CreateBrandDto) -> Result<BrandResponseDto> {
        self.ensure_name_available(&dto.name).await?;

        let brand: Brand = sqlx::query_as(
            r#"
            INSERT INTO brand (name)
            VALUES ($1)
            RETURNING id, name, row_version, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(id = brand.id, "Brand created");

        Ok(brand.into())
    }

    /// Rename a brand; the update must carry the version it was based on
    pub async fn update(&self, id: i64, dto: UpdateBrandDto) -> Result<BrandResponseDto> {
        let updated: Option<Brand> = sqlx::query_as(
            r#"
            UPDATE brand
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
            Some(brand) => Ok(brand.into()),
            None => Err(self.stale_or_missing(id).await),
        }
    }

    /// Delete a brand. Refused while products reference it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM brand WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Brand with id {} not found", id)));
        }

        tracing::info!(id, "Brand deleted");

        Ok(())
    }

    /// Name uniqueness is enforced here (case-insensitive), not by the schema
    async fn ensure_name_available(&self, name: &str) -> Result<()> {
        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM brand WHERE LOWER(name) = LOWER($1))")
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        if taken {
            return Err(AppError::Conflict(format!(
                "Brand \"{}\" already exists",
                name
            )));
        }

        Ok(())
    }

    /// A zero-row update means the id vanished or the caller's version is stale
    async fn stale_or_missing(&self, id: i64) -> AppError {
        match sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM brand WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
        {
            Ok(true) => AppError::Conflict(format!(
                "Brand {} was changed by another request; reload it and retry",
                id
            )),
            Ok(false) => AppError::NotFound(format!("Brand with id {} not found", id)),
            Err(e) => AppError::Database(e),
        }
    }
}
