pub mod export_handler;
pub mod product_handler;

pub use export_handler::{__path_export_links, __path_export_spreadsheet};
pub use export_handler::{export_links, export_spreadsheet};
pub use product_handler::{
    __path_create_product, __path_delete_product, __path_get_products, __path_restore_product,
    __path_trash_product, __path_update_product, __path_upload_product_image,
};
pub use product_handler::{
    create_product, delete_product, get_products, restore_product, trash_product, update_product,
    upload_product_image,
};
