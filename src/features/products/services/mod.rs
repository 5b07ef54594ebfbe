mod export_service;
pub mod listing;
mod product_service;

pub use export_service::ExportService;
pub use product_service::ProductService;
