mod special_offer_service;

pub use special_offer_service::SpecialOfferService;
