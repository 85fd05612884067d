use bookbits_core::error::Result;
use bookbits_core::export::ExportFormat;

/// Parse an export format name, falling back to `default` when absent.
///
/// Runs before any store is opened so a bad name fails fast.
pub fn parse_export_format(value: Option<&str>, default: ExportFormat) -> Result<ExportFormat> {
    match value {
        Some(name) => name.parse(),
        None => Ok(default),
    }
}
