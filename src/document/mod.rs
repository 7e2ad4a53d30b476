// src/document/mod.rs
pub mod models;
pub mod pdf;

pub use models::Document;
pub use pdf::{PdfTextExtractor, TextExtractor};
