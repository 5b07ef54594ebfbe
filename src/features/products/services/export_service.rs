use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};

/// The slice of a product the exports care about
#[derive(Debug, sqlx::FromRow)]
struct ExportRow {
    name: String,
    price: Decimal,
    link: String,
    isedited: bool,
    isdeleted: bool,
}

/// Service for the product export downloads.
///
/// Both exports are all-or-nothing: while any live product is missing its
/// link or carries pending edits, nothing is exported.
pub struct ExportService {
    pool: PgPool,
}

impl ExportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newline-joined links of every live product
    pub async fn export_links(&self) -> Result<String> {
        let rows = self.snapshot().await?;
        Self::ensure_complete(&rows)?;

        tracing::info!(rows = rows.len(), "Product links exported");

        Ok(Self::join_links(&rows))
    }

    /// CSV of name and price for every live product
    pub async fn export_spreadsheet(&self) -> Result<Vec<u8>> {
        let rows = self.snapshot().await?;
        Self::ensure_complete(&rows)?;

        tracing::info!(rows = rows.len(), "Product spreadsheet exported");

        Self::write_csv(&rows)
    }

    async fn snapshot(&self) -> Result<Vec<ExportRow>> {
        sqlx::query_as("SELECT name, price, link, isedited, isdeleted FROM products ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Soft-deleted rows never block an export; every other row must be done
    fn ensure_complete(rows: &[ExportRow]) -> Result<()> {
        let pending = rows
            .iter()
            .filter(|r| !r.isdeleted && (r.link.is_empty() || r.isedited))
            .count();

        if pending > 0 {
            return Err(AppError::Conflict(format!(
                "{} product(s) still need a link or carry pending edits; finish them before exporting",
                pending
            )));
        }

        Ok(())
    }

    fn join_links(rows: &[ExportRow]) -> String {
        rows.iter()
            .filter(|r| !r.isdeleted)
            .map(|r| r.link.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn write_csv(rows: &[ExportRow]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(["name", "price"])
            .map_err(|e| AppError::Internal(format!("Failed to write CSV header: {}", e)))?;

        for row in rows.iter().filter(|r| !r.isdeleted) {
            let price = row.price.to_string();
            writer
                .write_record([row.name.as_str(), price.as_str()])
                .map_err(|e| AppError::Internal(format!("Failed to write CSV row: {}", e)))?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("Failed to finish CSV: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, link: &str, isedited: bool, isdeleted: bool) -> ExportRow {
        ExportRow {
            name: name.to_string(),
            price: Decimal::new(1999, 2),
            link: link.to_string(),
            isedited,
            isdeleted,
        }
    }

    #[test]
    fn missing_link_blocks_the_export() {
        let rows = vec![row("A", "http://x", false, false), row("B", "", false, false)];
        assert!(matches!(
            ExportService::ensure_complete(&rows),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn pending_edit_blocks_the_export() {
        let rows = vec![row("A", "http://x", true, false)];
        assert!(matches!(
            ExportService::ensure_complete(&rows),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn trashed_rows_never_block_the_export() {
        let rows = vec![row("A", "http://x", false, false), row("B", "", true, true)];
        assert!(ExportService::ensure_complete(&rows).is_ok());
    }

    #[test]
    fn links_skip_trashed_rows() {
        let rows = vec![
            row("A", "http://a", false, false),
            row("B", "http://b", false, true),
            row("C", "http://c", false, false),
        ];
        assert_eq!(ExportService::join_links(&rows), "http://a\nhttp://c");
    }

    #[test]
    fn spreadsheet_holds_name_and_price_of_live_rows() {
        let rows = vec![
            row("Taladro", "http://a", false, false),
            row("Sierra", "http://b", false, true),
        ];

        let bytes = ExportService::write_csv(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "name,price\nTaladro,19.99\n");
    }
}
