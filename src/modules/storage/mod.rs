//! Storage module for catalog images
//!
//! Provides the MinIO/S3-compatible client used for image uploads and
//! public URL handling.

mod minio_client;

pub use minio_client::{extension_for, hashed_object_name, MinIOClient};
