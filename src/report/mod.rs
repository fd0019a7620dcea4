//! Plan document rendering.

pub mod document;
pub mod renderer;
pub mod types;

pub use document::{Document, DocumentBuilder, Page};
pub use renderer::{available_path, plan_filename, write_document, PlanRenderer};
pub use types::RenderError;
