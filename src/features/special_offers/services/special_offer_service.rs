use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::special_offers::dtos::{
    CreateSpecialOfferDto, SpecialOfferResponseDto, UpdateSpecialOfferDto,
};
use crate::features::special_offers::models::SpecialOffer;
use crate::modules::storage::MinIOClient;
use crate::shared::constants::OFFER_IMAGE_PREFIX;
use crate::shared::types::PaginationQuery;

const RETURNING: &str = "id, name, description, price, expiry_date, image_url, is_active, row_version, created_at, updated_at";

/// Service for special offer operations
pub struct SpecialOfferService {
    pool: PgPool,
    minio_client: Arc<MinIOClient>,
}

impl SpecialOfferService {
    pub fn new(pool: PgPool, minio_client: Arc<MinIOClient>) -> Self {
        Self { pool, minio_client }
    }

    /// List special offers ordered by name, with total count
    pub async fn list(
        &self,
        params: &PaginationQuery,
    ) -> Result<(Vec<SpecialOfferResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM special_offers")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let query = format!(
            "SELECT {} FROM special_offers ORDER BY name LIMIT $1 OFFSET $2",
            RETURNING
        );
        let offers: Vec<SpecialOffer> = sqlx::query_as(&query)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok((offers.into_iter().map(|o| o.into()).collect(), total))
    }

    /// Create a special offer; an active one is refused while another is active
    pub async fn create(&self, dto: CreateSpecialOfferDto) -> Result<SpecialOfferResponseDto> {
        if dto.is_active {
            self.ensure_no_other_active(None).await?;
        }

        let query = format!(
            r#"
            INSERT INTO special_offers (name, description, price, expiry_date, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            RETURNING
        );
        let offer: SpecialOffer = sqlx::query_as(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(dto.expiry_date)
            .bind(dto.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)?;

        tracing::info!(id = offer.id, is_active = offer.is_active, "Special offer created");

        Ok(offer.into())
    }

    /// Update a special offer; the update must carry the version it was based on
    pub async fn update(
        &self,
        id: i64,
        dto: UpdateSpecialOfferDto,
    ) -> Result<SpecialOfferResponseDto> {
        if dto.is_active {
            // The offer being edited may itself stay active
            self.ensure_no_other_active(Some(id)).await?;
        }

        let query = format!(
            r#"
            UPDATE special_offers
            SET name = $1, description = $2, price = $3, expiry_date = $4, is_active = $5,
                row_version = row_version + 1, updated_at = now()
            WHERE id = $6 AND row_version = $7
            RETURNING {}
            "#,
            RETURNING
        );
        let updated: Option<SpecialOffer> = sqlx::query_as(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(dto.expiry_date)
            .bind(dto.is_active)
            .bind(id)
            .bind(dto.row_version)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)?;

        match updated {
            Some(offer) => Ok(offer.into()),
            None => Err(self.stale_or_missing(id).await),
        }
    }

    /// Attach or replace the offer image.
    ///
    /// Upload happens before the previous image is removed and before the
    /// row write; a failure after the upload leaves the new object behind.
    pub async fn attach_image(
        &self,
        id: i64,
        row_version: i64,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<SpecialOfferResponseDto> {
        let offer = self.fetch_by_id(id).await?;

        let key = self
            .minio_client
            .content_key(OFFER_IMAGE_PREFIX, &data, content_type)?;

        // Identical bytes are already stored under the same key
        if !self.minio_client.exists(&key).await? {
            self.minio_client.upload(&key, data, content_type).await?;
        }

        if let Some(old_url) = &offer.image_url {
            if let Some(old_key) = self.minio_client.extract_key_from_url(old_url) {
                if old_key != key {
                    self.minio_client.delete(&old_key).await?;
                }
            }
        }

        let url = self.minio_client.get_public_url(&key);

        let query = format!(
            r#"
            UPDATE special_offers
            SET image_url = $1, row_version = row_version + 1, updated_at = now()
            WHERE id = $2 AND row_version = $3
            RETURNING {}
            "#,
            RETURNING
        );
        let updated: Option<SpecialOffer> = sqlx::query_as(&query)
            .bind(&url)
            .bind(id)
            .bind(row_version)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match updated {
            Some(offer) => {
                tracing::info!(id, key = %key, "Special offer image attached");
                Ok(offer.into())
            }
            None => Err(self.stale_or_missing(id).await),
        }
    }

    /// Delete a special offer: stored image first, then the row
    pub async fn delete(&self, id: i64) -> Result<()> {
        let offer = self.fetch_by_id(id).await?;

        if let Some(image_url) = &offer.image_url {
            if let Some(key) = self.minio_client.extract_key_from_url(image_url) {
                self.minio_client.delete(&key).await?;
            }
        }

        let result = sqlx::query("DELETE FROM special_offers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Special offer with id {} not found",
                id
            )));
        }

        tracing::info!(id, "Special offer deleted");

        Ok(())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<SpecialOffer> {
        let query = format!("SELECT {} FROM special_offers WHERE id = $1", RETURNING);
        sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Special offer with id {} not found", id)))
    }

    /// At most one offer may be active; checked before the write, not by the schema
    async fn ensure_no_other_active(&self, exclude_id: Option<i64>) -> Result<()> {
        let other_active: bool = match exclude_id {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT EXISTS (SELECT 1 FROM special_offers WHERE is_active = TRUE AND id <> $1)",
                )
                .bind(id)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM special_offers WHERE is_active = TRUE)")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(AppError::Database)?;

        if other_active {
            return Err(AppError::Conflict(
                "Another special offer is already active".to_string(),
            ));
        }

        Ok(())
    }

    /// A zero-row update means the id vanished or the caller's version is stale
    async fn stale_or_missing(&self, id: i64) -> AppError {
        match sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM special_offers WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        {
            Ok(true) => AppError::Conflict(format!(
                "Special offer {} was changed by another request; reload it and retry",
                id
            )),
            Ok(false) => AppError::NotFound(format!("Special offer with id {} not found", id)),
            Err(e) => AppError::Database(e),
        }
    }
}
