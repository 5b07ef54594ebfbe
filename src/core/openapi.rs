use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::brands::{dtos as brands_dtos, handlers as brands_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::special_offers::{
    dtos as special_offers_dtos, handlers as special_offers_handlers,
};
use crate::features::subcategories::{
    dtos as subcategories_dtos, handlers as subcategories_handlers,
};
use crate::features::testimonials::{
    dtos as testimonials_dtos, handlers as testimonials_handlers,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::get_me,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Subcategories
        subcategories_handlers::list_subcategories,
        subcategories_handlers::create_subcategory,
        subcategories_handlers::update_subcategory,
        subcategories_handlers::delete_subcategory,
        // Brands
        brands_handlers::list_brands,
        brands_handlers::create_brand,
        brands_handlers::update_brand,
        brands_handlers::delete_brand,
        // Products
        products_handlers::get_products,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::trash_product,
        products_handlers::restore_product,
        products_handlers::upload_product_image,
        products_handlers::delete_product,
        products_handlers::export_links,
        products_handlers::export_spreadsheet,
        // Special offers
        special_offers_handlers::list_special_offers,
        special_offers_handlers::create_special_offer,
        special_offers_handlers::update_special_offer,
        special_offers_handlers::upload_special_offer_image,
        special_offers_handlers::delete_special_offer,
        // Testimonials
        testimonials_handlers::list_testimonials,
        testimonials_handlers::create_testimonial,
        testimonials_handlers::update_testimonial,
        testimonials_handlers::delete_testimonial,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            auth_dtos::MeResponseDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_dtos::MeResponseDto>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Subcategories
            subcategories_dtos::CreateSubcategoryDto,
            subcategories_dtos::UpdateSubcategoryDto,
            subcategories_dtos::SubcategoryResponseDto,
            ApiResponse<Vec<subcategories_dtos::SubcategoryResponseDto>>,
            ApiResponse<subcategories_dtos::SubcategoryResponseDto>,
            // Brands
            brands_dtos::CreateBrandDto,
            brands_dtos::UpdateBrandDto,
            brands_dtos::BrandResponseDto,
            ApiResponse<Vec<brands_dtos::BrandResponseDto>>,
            ApiResponse<brands_dtos::BrandResponseDto>,
            // Products
            products_dtos::ProductQueryParams,
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::RowVersionDto,
            products_dtos::ProductImageUploadDto,
            products_dtos::ProductResponseDto,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            ApiResponse<products_dtos::ProductResponseDto>,
            // Special offers
            special_offers_dtos::CreateSpecialOfferDto,
            special_offers_dtos::UpdateSpecialOfferDto,
            special_offers_dtos::OfferImageUploadDto,
            special_offers_dtos::SpecialOfferResponseDto,
            ApiResponse<Vec<special_offers_dtos::SpecialOfferResponseDto>>,
            ApiResponse<special_offers_dtos::SpecialOfferResponseDto>,
            // Testimonials
            testimonials_dtos::CreateTestimonialDto,
            testimonials_dtos::UpdateTestimonialDto,
            testimonials_dtos::TestimonialResponseDto,
            ApiResponse<Vec<testimonials_dtos::TestimonialResponseDto>>,
            ApiResponse<testimonials_dtos::TestimonialResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Operator authentication"),
        (name = "categories", description = "Product categories"),
        (name = "subcategories", description = "Subcategories nested under categories"),
        (name = "brands", description = "Product brands"),
        (name = "products", description = "Product catalog, trash and exports"),
        (name = "special-offers", description = "Promotional offers (at most one active)"),
        (name = "testimonials", description = "Customer testimonials"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Tienda API",
        version = "0.1.0",
        description = "API documentation for the Tienda catalog back office",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
