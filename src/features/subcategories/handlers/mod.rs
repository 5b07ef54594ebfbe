pub mod subcategory_handler;

pub use subcategory_handler::{
    __path_create_subcategory, __path_delete_subcategory, __path_list_subcategories,
    __path_update_subcategory, create_subcategory, delete_subcategory, list_subcategories,
    update_subcategory,
};
