mod product_dto;

pub use product_dto::{
    CreateProductDto, ProductImageUploadDto, ProductQueryParams, ProductResponseDto,
    RowVersionDto, UpdateProductDto,
};
