mod testimonial_dto;

pub use testimonial_dto::{CreateTestimonialDto, TestimonialResponseDto, UpdateTestimonialDto};
