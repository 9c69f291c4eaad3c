//! Raw DAX stack reader.
//!
//! The binary file carries no header at all; the frame count comes from the
//! sidecar and the frame dimensions are fixed by the format, never detected.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::dax::sidecar::SidecarInfo;
use crate::image_pipeline::decode::StackDecoder;
use crate::image_pipeline::stack::{ImageStack, SampleBuffer};

/// Fixed frame width of the DAX format.
pub const DAX_FRAME_WIDTH: usize = 2048;
/// Fixed frame height of the DAX format.
pub const DAX_FRAME_HEIGHT: usize = 2048;

const SIDECAR_EXTENSION: &str = "inf";
const BYTES_PER_SAMPLE: usize = 2;

pub struct DaxReader;

impl DaxReader {
    fn read_sidecar(path: &Path) -> Result<SidecarInfo> {
        let sidecar_path = path.with_extension(SIDECAR_EXTENSION);
        let text = fs::read_to_string(&sidecar_path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", sidecar_path.display(), e))
        })?;
        SidecarInfo::parse(&text)
    }
}

impl StackDecoder for DaxReader {
    fn read_stack(&self, path: &Path) -> Result<ImageStack> {
        let info = Self::read_sidecar(path)?;
        let frames = info.frame_count()?;

        debug!(frames, "Reading DAX stack {}", path.display());

        let bytes = fs::read(path)
            .map_err(|e| ConversionError::InputReadError(format!("{}: {}", path.display(), e)))?;

        // Sidecars are untrusted input: a bogus frame count must surface as a
        // size mismatch, not an arithmetic overflow.
        let expected = (frames as u64)
            .checked_mul((DAX_FRAME_WIDTH * DAX_FRAME_HEIGHT * BYTES_PER_SAMPLE) as u64)
            .ok_or(ConversionError::TruncatedStackError {
                expected: u64::MAX,
                actual: bytes.len() as u64,
            })?;
        if bytes.len() as u64 != expected {
            return Err(ConversionError::TruncatedStackError {
                expected,
                actual: bytes.len() as u64,
            });
        }

        let mut samples: Vec<u16> = bytes
            .chunks_exact(BYTES_PER_SAMPLE)
            .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
            .collect();

        // Samples are stored big-endian on disk: swap the byte order of every
        // element in place, keeping the declared u16 type.
        for sample in &mut samples {
            *sample = sample.swap_bytes();
        }

        ImageStack::new(
            frames,
            DAX_FRAME_HEIGHT,
            DAX_FRAME_WIDTH,
            SampleBuffer::U16(samples),
        )
    }
}
