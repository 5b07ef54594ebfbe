mod subcategory_dto;

pub use subcategory_dto::{CreateSubcategoryDto, SubcategoryResponseDto, UpdateSubcategoryDto};
