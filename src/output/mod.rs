//! Result serialization and plain-text rendering.

pub mod json;
pub mod text;
