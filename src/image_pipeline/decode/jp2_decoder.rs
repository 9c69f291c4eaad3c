//! JPEG 2000 decoder built on the `jpeg2k` crate (openjpeg).
//!
//! openjpeg hands back planar components, so the channel-last layout of the
//! on-disk format arrives channel-first for free; each component becomes one
//! plane of the stack.

use std::fs;
use std::path::Path;

use jpeg2k::Image;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::StackDecoder;
use crate::image_pipeline::stack::{ImageStack, SampleBuffer};

pub struct Jp2Decoder;

impl StackDecoder for Jp2Decoder {
    fn read_stack(&self, path: &Path) -> Result<ImageStack> {
        let bytes = fs::read(path)
            .map_err(|e| ConversionError::InputReadError(format!("{}: {}", path.display(), e)))?;
        let image = Image::from_bytes(&bytes)
            .map_err(|e| ConversionError::DecodeError(format!("{}: {}", path.display(), e)))?;

        let width = image.width() as usize;
        let height = image.height() as usize;
        let components = image.components();
        if components.is_empty() {
            return Err(ConversionError::DecodeError(
                "JPEG 2000 file has no components".to_string(),
            ));
        }

        let precision = components.iter().map(|c| c.precision()).max().unwrap_or(8);
        let plane_len = width * height;

        for (index, component) in components.iter().enumerate() {
            if component.width() as usize != width || component.height() as usize != height {
                return Err(ConversionError::DecodeError(format!(
                    "component {} is {}x{}, expected {}x{}",
                    index,
                    component.width(),
                    component.height(),
                    width,
                    height
                )));
            }
            if component.data().len() != plane_len {
                return Err(ConversionError::DecodeError(format!(
                    "component {} has {} samples, expected {}",
                    index,
                    component.data().len(),
                    plane_len
                )));
            }
        }

        debug!(
            components = components.len(),
            width, height, precision, "Decoded JPEG 2000 {}", path.display()
        );

        let samples = if precision > 8 {
            let mut planes = Vec::with_capacity(components.len() * plane_len);
            for component in components {
                planes.extend(component.data().iter().map(|&v| v as u16));
            }
            SampleBuffer::U16(planes)
        } else {
            let mut planes = Vec::with_capacity(components.len() * plane_len);
            for component in components {
                planes.extend(component.data().iter().map(|&v| v as u8));
            }
            SampleBuffer::U8(planes)
        };

        ImageStack::new(components.len(), height, width, samples)
    }
}
