//! TIFF stack decoder built on the `tiff` crate.
//!
//! Each page of a multi-page file becomes one plane; RGB pages are
//! de-interleaved into three planes so the output stays planar. All pages
//! must agree on dimensions and bit depth.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::StackDecoder;
use crate::image_pipeline::stack::{ImageStack, SampleBuffer};

pub struct TiffDecoder;

enum PlaneBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>),
}

fn channels_for(color: ColorType) -> Result<usize> {
    match color {
        ColorType::Gray(_) => Ok(1),
        ColorType::RGB(_) => Ok(3),
        other => Err(ConversionError::DecodeError(format!(
            "unsupported TIFF color type {other:?}"
        ))),
    }
}

/// Splits an interleaved page buffer into per-channel planes.
fn deinterleave<T: Copy>(planes: &mut Vec<T>, page: &[T], channels: usize) {
    if channels == 1 {
        planes.extend_from_slice(page);
        return;
    }
    for channel in 0..channels {
        planes.extend(page.iter().skip(channel).step_by(channels));
    }
}

impl StackDecoder for TiffDecoder {
    fn read_stack(&self, path: &Path) -> Result<ImageStack> {
        let file = File::open(path)
            .map_err(|e| ConversionError::InputReadError(format!("{}: {}", path.display(), e)))?;
        let mut decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        let mut planes: Option<PlaneBuffer> = None;
        let mut plane_count = 0usize;

        loop {
            let (page_width, page_height) = decoder
                .dimensions()
                .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
            if (page_width, page_height) != (width, height) {
                return Err(ConversionError::DecodeError(format!(
                    "page {} is {}x{}, expected {}x{}",
                    plane_count, page_width, page_height, width, height
                )));
            }

            let color = decoder
                .colortype()
                .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
            let channels = channels_for(color)?;

            let page = decoder
                .read_image()
                .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
            match page {
                DecodingResult::U8(data) => {
                    match planes.get_or_insert_with(|| PlaneBuffer::U8(Vec::new())) {
                        PlaneBuffer::U8(buffer) => deinterleave(buffer, &data, channels),
                        PlaneBuffer::U16(_) => {
                            return Err(ConversionError::DecodeError(
                                "mixed bit depths across TIFF pages".to_string(),
                            ));
                        }
                    }
                }
                DecodingResult::U16(data) => {
                    match planes.get_or_insert_with(|| PlaneBuffer::U16(Vec::new())) {
                        PlaneBuffer::U16(buffer) => deinterleave(buffer, &data, channels),
                        PlaneBuffer::U8(_) => {
                            return Err(ConversionError::DecodeError(
                                "mixed bit depths across TIFF pages".to_string(),
                            ));
                        }
                    }
                }
                _ => {
                    return Err(ConversionError::DecodeError(
                        "unsupported TIFF sample format".to_string(),
                    ));
                }
            }
            plane_count += channels;

            if !decoder.more_images() {
                break;
            }
            decoder
                .next_image()
                .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
        }

        debug!(
            planes = plane_count,
            width, height, "Decoded TIFF {}", path.display()
        );

        let samples = match planes {
            Some(PlaneBuffer::U8(buffer)) => SampleBuffer::U8(buffer),
            Some(PlaneBuffer::U16(buffer)) => SampleBuffer::U16(buffer),
            None => {
                return Err(ConversionError::DecodeError(
                    "TIFF file contains no pages".to_string(),
                ));
            }
        };

        ImageStack::new(plane_count, height as usize, width as usize, samples)
    }
}
