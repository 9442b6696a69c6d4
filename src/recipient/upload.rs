use crate::recipient::Result;
use crate::recipient::error::ImportError::{FileTooLarge, UnsupportedFileType};
use crate::recipient::parser::parse_recipients;
use derive_getters::Getters;
use dto::recipient::Recipient;
use encoding::all::WINDOWS_1252;
use encoding::{DecoderTrap, Encoding};
use log::{info, warn};

pub const ALLOWED_CONTENT_TYPES: [&str; 2] = ["text/csv", "application/vnd.ms-excel"];
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Constraints applied to recipients files before they are parsed.
#[derive(Debug, Getters, Clone, PartialEq)]
pub struct UploadConfig {
    allowed_content_types: Vec<String>,
    max_size: u64,
}

impl UploadConfig {
    pub fn new(max_size: u64) -> Self {
        Self {
            allowed_content_types: ALLOWED_CONTENT_TYPES
                .iter()
                .map(|content_type| content_type.to_string())
                .collect(),
            max_size,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_SIZE)
    }
}

/// Check the declared content type & the size of an uploaded file.
/// Content type parameters (such as `charset`) are ignored.
pub fn validate_upload(config: &UploadConfig, content_type: &str, size: u64) -> Result<()> {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    if !config
        .allowed_content_types()
        .iter()
        .any(|allowed| *allowed == media_type)
    {
        warn!("Refusing file with content type `{content_type}`");
        return Err(UnsupportedFileType(content_type.to_owned()));
    }

    if size > *config.max_size() {
        warn!("Refusing file of {size} bytes");
        return Err(FileTooLarge {
            size,
            max_size: *config.max_size(),
        });
    }

    Ok(())
}

/// Turn the raw bytes of a file into text.
/// Spreadsheet exports are not always UTF-8: when the content isn't, it is read as Windows-1252.
pub fn decode_upload(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(content) => content.to_owned(),
        Err(_) => WINDOWS_1252
            .decode(bytes, DecoderTrap::Replace)
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Validate an uploaded file, then parse its content into recipients.
pub fn import_upload(
    config: &UploadConfig,
    content_type: &str,
    bytes: &[u8],
) -> Result<Vec<Recipient>> {
    validate_upload(config, content_type, bytes.len() as u64)?;
    let recipients = parse_recipients(&decode_upload(bytes));
    info!("{} recipient(s) imported", recipients.len());
    Ok(recipients)
}
