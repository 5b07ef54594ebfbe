mod special_offer;

pub use special_offer::SpecialOffer;
