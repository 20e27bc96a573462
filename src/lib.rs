mod error;
mod fonts;
pub mod latin1;
mod model;
mod pdf;
mod text;

pub use error::Error;
pub use model::{BuiltinFont, Document, Metadata, PageLayout, TextStyle};
pub use pdf::{Writer, render};

use std::path::Path;

/// Input converted when no path is given.
pub const DEFAULT_INPUT: &str = "DOCUMENTATION.md";
/// Output written when no path is given.
pub const DEFAULT_OUTPUT: &str = "PROJECT_DOCUMENTATION.pdf";

#[derive(Clone, Debug, Default)]
pub struct Options {
    pub layout: PageLayout,
    pub style: TextStyle,
    pub metadata: Metadata,
}

pub fn create_pdf(input: &Path, output: &Path) -> Result<(), Error> {
    create_pdf_with(input, output, &Options::default())
}

/// Convert `input` to a PDF at `output`.
///
/// The output file is only written once the whole document has rendered, so
/// a failed run never leaves a partial PDF behind.
pub fn create_pdf_with(input: &Path, output: &Path, options: &Options) -> Result<(), Error> {
    let raw = text::load(input)?;

    let replaced = latin1::count_unencodable(&raw);
    if replaced > 0 {
        log::warn!(
            "{replaced} character(s) in {} have no Latin-1 form and were replaced with '{}'",
            input.display(),
            latin1::PLACEHOLDER
        );
    }

    let doc = Document {
        text: latin1::sanitize(&raw),
        layout: options.layout,
        style: options.style,
        metadata: options.metadata.clone(),
    };
    let bytes = pdf::render(&doc)?;
    log::debug!("Writing {} bytes to {}", bytes.len(), output.display());
    std::fs::write(output, bytes).map_err(Error::Io)
}
