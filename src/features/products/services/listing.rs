//! In-memory derivation of the product table view.
//!
//! The catalog is small, so every request re-filters the fully fetched,
//! joined product set: no filter state is kept anywhere.

use crate::features::products::models::Product;

/// A row "needs attention" when it has no link, was soft-deleted, or still
/// carries pending edits.
fn is_modified(product: &Product) -> bool {
    product.link.is_empty() || product.isdeleted || product.isedited
}

/// Case-insensitive match across the searchable fields. The price joins in
/// through its canonical decimal rendering. `needle` must be lowercase.
fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.price.to_string().contains(needle)
        || product.link.to_lowercase().contains(needle)
        || product.category_name.to_lowercase().contains(needle)
        || product.subcategory_name.to_lowercase().contains(needle)
}

/// Derive one page of the table view.
///
/// Soft-deleted rows are hidden from the normal view and surface only under
/// the modified filter. Returns the page and the filtered view's row count.
pub fn apply(
    products: Vec<Product>,
    search: Option<&str>,
    modified_only: bool,
    page: i64,
    page_size: i64,
) -> (Vec<Product>, i64) {
    let mut view: Vec<Product> = products
        .into_iter()
        .filter(|p| {
            if modified_only {
                is_modified(p)
            } else {
                !p.isdeleted
            }
        })
        .collect();

    if let Some(needle) = search {
        let needle = needle.to_lowercase();
        if !needle.is_empty() {
            view.retain(|p| matches_search(p, &needle));
        }
    }

    view.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    let total = view.len() as i64;
    let start = ((page.max(1) - 1) * page_size.max(1)) as usize;
    let rows: Vec<Product> = view
        .into_iter()
        .skip(start)
        .take(page_size.max(1) as usize)
        .collect();

    (rows, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn product(name: &str, link: &str, isedited: bool, isdeleted: bool) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            description: "Herramienta de taller".to_string(),
            price: Decimal::new(1999, 2),
            link: link.to_string(),
            category_id: 1,
            category_name: "Herramientas".to_string(),
            subcategory_id: 1,
            subcategory_name: "Eléctricas".to_string(),
            brand_id: None,
            brand_name: None,
            image_url: None,
            isedited,
            isdeleted,
            row_version: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn modified_filter_keeps_only_rows_needing_attention() {
        let products = vec![
            product("A", "http://x", false, false),
            product("B", "", false, false),
        ];

        let (modified, total) = apply(products.clone(), None, true, 1, 10);
        assert_eq!(total, 1);
        assert_eq!(modified[0].name, "B");

        let (all, total) = apply(products, None, false, 1, 10);
        assert_eq!(total, 2);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn soft_deleted_rows_surface_only_under_the_modified_filter() {
        let products = vec![
            product("Sierra", "http://x", false, true),
            product("Taladro", "http://y", false, false),
        ];

        let (normal, _) = apply(products.clone(), None, false, 1, 10);
        assert_eq!(normal.len(), 1);
        assert_eq!(normal[0].name, "Taladro");

        let (modified, _) = apply(products, None, true, 1, 10);
        assert_eq!(modified.len(), 1);
        assert_eq!(modified[0].name, "Sierra");
    }

    #[test]
    fn edited_rows_count_as_modified() {
        let products = vec![product("Lijadora", "http://x", true, false)];

        let (modified, total) = apply(products, None, true, 1, 10);
        assert_eq!(total, 1);
        assert_eq!(modified[0].name, "Lijadora");
    }

    #[test]
    fn search_spans_joined_names_and_price() {
        let products = vec![
            product("Taladro", "http://x", false, false),
            product("Martillo", "http://y", false, false),
        ];

        let (by_category, _) = apply(products.clone(), Some("herram"), false, 1, 10);
        assert_eq!(by_category.len(), 2);

        let (by_name, _) = apply(products.clone(), Some("TALADRO"), false, 1, 10);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Taladro");

        let (by_price, _) = apply(products.clone(), Some("19.99"), false, 1, 10);
        assert_eq!(by_price.len(), 2);

        let (none, total) = apply(products, Some("inexistente"), false, 1, 10);
        assert!(none.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn view_is_name_sorted_and_paginated() {
        let products = vec![
            product("cepillo", "http://a", false, false),
            product("Alicate", "http://b", false, false),
            product("Brocha", "http://c", false, false),
        ];

        let (page_one, total) = apply(products.clone(), None, false, 1, 2);
        assert_eq!(total, 3);
        assert_eq!(page_one[0].name, "Alicate");
        assert_eq!(page_one[1].name, "Brocha");

        let (page_two, _) = apply(products, None, false, 2, 2);
        assert_eq!(page_two.len(), 1);
        assert_eq!(page_two[0].name, "cepillo");
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let products = vec![product("Taladro", "http://x", false, false)];

        let (rows, total) = apply(products, None, false, 5, 4);
        assert!(rows.is_empty());
        assert_eq!(total, 1);
    }
}
