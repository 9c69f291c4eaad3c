//! Source format dispatch
//!
//! Every input resolves once to a [`SourceFormat`] variant, and each variant
//! maps to a fixed decoder producing the canonical plane-first [`ImageStack`].

mod jp2_decoder;
mod tiff_decoder;

use std::path::Path;

pub use jp2_decoder::Jp2Decoder;
pub use tiff_decoder::TiffDecoder;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::dax::DaxReader;
use crate::image_pipeline::stack::ImageStack;

pub trait StackDecoder: Sync {
    fn read_stack(&self, path: &Path) -> Result<ImageStack>;
}

/// The recognized input formats, resolved from a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Tiff,
    Jpeg2000,
    RawStack,
}

impl SourceFormat {
    /// Recognized extensions, in the order the batch scanner processes them.
    pub const RECOGNIZED_EXTENSIONS: [&'static str; 4] = ["tif", "tiff", "jp2", "dax"];

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "tif" | "tiff" => Some(SourceFormat::Tiff),
            "jp2" => Some(SourceFormat::Jpeg2000),
            "dax" => Some(SourceFormat::RawStack),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self::from_extension(&extension).ok_or(ConversionError::UnsupportedFormat(extension))
    }

    pub fn decoder(self) -> &'static dyn StackDecoder {
        match self {
            SourceFormat::Tiff => &TiffDecoder,
            SourceFormat::Jpeg2000 => &Jp2Decoder,
            SourceFormat::RawStack => &DaxReader,
        }
    }
}
