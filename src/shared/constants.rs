/// Default page size for pagination (the admin tables show 4 rows per page)
pub const DEFAULT_PAGE_SIZE: i64 = 4;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// IMAGE UPLOADS
// =============================================================================

/// Maximum accepted image upload size in bytes
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Content types accepted for catalog images
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Storage key prefix for product images (under the public prefix)
pub const PRODUCT_IMAGE_PREFIX: &str = "products";

/// Storage key prefix for special offer images (under the public prefix)
pub const OFFER_IMAGE_PREFIX: &str = "special_offers";

// =============================================================================
// EXPORTS
// =============================================================================

/// Download filename for the product spreadsheet export
pub const SPREADSHEET_EXPORT_FILENAME: &str = "productos.csv";
