//! Export and import of progress documents.

pub mod export;
pub mod import;

pub use export::{default_export_file_name, ExportDocument, ExportedCourse};
pub use import::parse_import;
