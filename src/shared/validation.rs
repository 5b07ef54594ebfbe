use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating external product links
    /// Must be an absolute http(s) URL without whitespace
    /// - Valid: "https://example.com/item", "http://a.b/c?d=1"
    /// - Invalid: "ftp://x", "example.com", "http://a b"
    pub static ref HTTP_URL_REGEX: Regex = Regex::new(r"^https?://[^\s]+$").unwrap();
}

/// Catalog names are free text but must contain something visible.
pub fn validate_name_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(())
}

/// Product links are optional: an empty string means "no link yet" and is
/// what the modified filter and the export gate look for.
pub fn validate_link_or_empty(link: &str) -> Result<(), ValidationError> {
    if link.is_empty() || HTTP_URL_REGEX.is_match(link) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_link"))
}

pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_regex_valid() {
        assert!(HTTP_URL_REGEX.is_match("https://example.com/item"));
        assert!(HTTP_URL_REGEX.is_match("http://a.b/c?d=1"));
        assert!(HTTP_URL_REGEX.is_match("https://tienda.mx/p/123"));
    }

    #[test]
    fn test_url_regex_invalid() {
        assert!(!HTTP_URL_REGEX.is_match("ftp://x")); // wrong scheme
        assert!(!HTTP_URL_REGEX.is_match("example.com")); // no scheme
        assert!(!HTTP_URL_REGEX.is_match("http://a b")); // whitespace
        assert!(!HTTP_URL_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_link_or_empty() {
        assert!(validate_link_or_empty("").is_ok());
        assert!(validate_link_or_empty("https://example.com").is_ok());
        assert!(validate_link_or_empty("not a url").is_err());
    }

    #[test]
    fn test_name_not_blank() {
        assert!(validate_name_not_blank("Categoría 1").is_ok());
        assert!(validate_name_not_blank("   ").is_err());
        assert!(validate_name_not_blank("").is_err());
    }

    #[test]
    fn test_price_sign() {
        assert!(validate_price(&Decimal::new(1999, 2)).is_ok());
        assert!(validate_price(&Decimal::ZERO).is_ok());
        assert!(validate_price(&Decimal::new(-1, 0)).is_err());
    }
}
