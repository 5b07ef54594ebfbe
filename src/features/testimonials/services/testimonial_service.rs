use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::testimonials::dtos::{
    CreateTestimonialDto, TestimonialResponseDto, UpdateTestimonialDto,
};
use crate::features::testimonials::models::Testimonial;
use crate::shared::types::PaginationQuery;

/// Service for testimonial operations
pub struct TestimonialService {
    pool: PgPool,
}

impl TestimonialService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List testimonials newest first, with total count
    pub async fn list(
        &self,
        params: &PaginationQuery,
    ) -> Result<(Vec<TestimonialResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let testimonials: Vec<Testimonial> = sqlx::query_as(
            r#"
            SELECT id, name, review, rating_number, row_version, created_at
            FROM testimonials
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok((
            testimonials.into_iter().map(|t| t.into()).collect(),
            total,
        ))
    }

    /// Create a new testimonial
    pub async fn create(&self, dto: CreateTestimonialDto) -> Result<TestimonialResponseDto> {
        let testimonial: Testimonial = sqlx::query_as(
            r#"
            INSERT INTO testimonials (name, review, rating_number)
            VALUES ($1, $2, $3)
            RETURNING id, name, review, rating_number, row_version, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.review)
        .bind(dto.rating_number)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(id = testimonial.id, "Testimonial created");

        Ok(testimonial.into())
    }

    /// Update a testimonial; the update must carry the version it was based on
    pub async fn update(
        &self,
        id: i64,
        dto: UpdateTestimonialDto,
    ) -> Result<TestimonialResponseDto> {
        let updated: Option<Testimonial> = sqlx::query_as(
            r#"
            UPDATE testimonials
            SET name = $1, review = $2, rating_number = $3, row_version = row_version + 1
            WHERE id = $4 AND row_version = $5
            RETURNING id, name, review, rating_number, row_version, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.review)
        .bind(dto.rating_number)
        .bind(id)
        .bind(dto.row_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?;

        match updated {
            Some(testimonial) => Ok(testimonial.into()),
            None => Err(self.stale_or_missing(id).await),
        }
    }

    /// Delete a testimonial
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Testimonial with id {} not found",
                id
            )));
        }

        tracing::info!(id, "Testimonial deleted");

        Ok(())
    }

    /// A zero-row update means the id vanished or the caller's version is stale
    async fn stale_or_missing(&self, id: i64) -> AppError {
        match sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM testimonials WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        {
            Ok(true) => AppError::Conflict(format!(
                "Testimonial {} was changed by another request; reload it and retry",
                id
            )),
            Ok(false) => AppError::NotFound(format!("Testimonial with id {} not found", id)),
            Err(e) => AppError::Database(e),
        }
    }
}
