//! Serialization module: JSON export/import and one-way CSV export.
//!
//! Import is deliberately two-phase. [`parse_import`] validates a full file
//! content without touching the store; the returned [`ImportPreview`] is
//! what the presentation adapter shows in its confirmation prompt, and only
//! [`ImportPreview::apply`] replaces the collections. A document that fails
//! parsing therefore can never leave the store partially updated.

pub mod csv;
pub mod json;
pub mod name;

pub use csv::export_csv;
pub use json::{export_json, parse_import, ExportDocument, ImportPreview};
pub use name::{export_file_name, ExportFormat};
