pub mod auth;
pub mod brands;
pub mod categories;
pub mod products;
pub mod special_offers;
pub mod subcategories;
pub mod testimonials;
