//! OpenDocument spreadsheet reader.
//!
//! An `.ods` file is a zip archive. Cell data lives in `content.xml`; named
//! styles may also live in `styles.xml`. Reading produces a [`Workbook`] of raw
//! (still run-length encoded) rows plus the style side table.

mod content;

use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::sheet::Workbook;

pub use content::{parse_content, parse_styles};

const CONTENT_PART: &str = "content.xml";
const STYLES_PART: &str = "styles.xml";

/// Errors raised while reading a document.
#[derive(Debug, thiserror::Error)]
pub enum OdsError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a valid ODS archive: {0}")]
    Zip(#[from] ZipError),

    #[error("content.xml not found in .ods (is this a valid LibreOffice Calc file?)")]
    MissingContent,

    #[error("{part} is not valid UTF-8: {source}")]
    Utf8 {
        part: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to parse {part}: {source}")]
    Xml {
        part: String,
        #[source]
        source: roxmltree::Error,
    },
}

/// Read a document from disk.
pub fn read_workbook(path: impl AsRef<Path>) -> Result<Workbook, OdsError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => OdsError::NotFound(path.to_path_buf()),
        _ => OdsError::Io(e),
    })?;
    debug!(path = %path.display(), "reading document");
    read_workbook_from(file)
}

/// Read a document from any seekable byte source.
pub fn read_workbook_from<R: Read + Seek>(reader: R) -> Result<Workbook, OdsError> {
    let mut archive = ZipArchive::new(reader)?;

    let content = match read_part(&mut archive, CONTENT_PART)? {
        Some(bytes) => bytes,
        None => return Err(OdsError::MissingContent),
    };
    let mut workbook = parse_content(as_utf8(CONTENT_PART, &content)?)?;

    if let Some(bytes) = read_part(&mut archive, STYLES_PART)? {
        let styles = parse_styles(STYLES_PART, as_utf8(STYLES_PART, &bytes)?)?;
        workbook.styles.merge(styles);
    }

    debug!(sheets = workbook.sheets.len(), "read document");
    Ok(workbook)
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<Vec<u8>>, OdsError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(Some(buf))
}

fn as_utf8<'b>(part: &str, bytes: &'b [u8]) -> Result<&'b str, OdsError> {
    std::str::from_utf8(bytes).map_err(|source| OdsError::Utf8 {
        part: part.to_string(),
        source,
    })
}
