// src/extractors/mod.rs
pub mod fields;

// Re-export key extraction types for convenience
pub use fields::{
    extract_contact_info,
    extract_intro_line,
    extract_professional_summary,
    extract_work_experience,
};
