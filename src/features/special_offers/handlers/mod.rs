pub mod special_offer_handler;

pub use special_offer_handler::{
    __path_create_special_offer, __path_delete_special_offer, __path_list_special_offers,
    __path_update_special_offer, __path_upload_special_offer_image, create_special_offer,
    delete_special_offer, list_special_offers, update_special_offer, upload_special_offer_image,
};
