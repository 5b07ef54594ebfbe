mod special_offer_dto;

pub use special_offer_dto::{
    CreateSpecialOfferDto, OfferImageUploadDto, SpecialOfferResponseDto, UpdateSpecialOfferDto,
};
