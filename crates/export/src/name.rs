use chrono::{DateTime, Utc};

/// Export file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Suggested download name: `inventory_<ISO-date>.<ext>`.
pub fn export_file_name(format: ExportFormat, date: DateTime<Utc>) -> String {
    format!("inventory_{}.{}", date.format("%Y-%m-%d"), format.extension())
}
