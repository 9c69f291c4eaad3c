//! Canonical in-memory image representation

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Sample storage for a decoded stack, at the source's native bit depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>),
}

impl SampleBuffer {
    pub fn len(&self) -> usize {
        match self {
            SampleBuffer::U8(samples) => samples.len(),
            SampleBuffer::U16(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared bit depth of the samples (8 or 16).
    pub fn bit_depth(&self) -> u32 {
        match self {
            SampleBuffer::U8(_) => 8,
            SampleBuffer::U16(_) => 16,
        }
    }
}

/// A decoded image stack in plane-first order.
///
/// The plane axis is the frame axis for image sequences and the channel axis
/// for multi-channel stills; a multi-page color input folds both into one
/// axis (`pages * channels` planes).
#[derive(Debug, Clone)]
pub struct ImageStack {
    planes: usize,
    height: usize,
    width: usize,
    samples: SampleBuffer,
}

impl ImageStack {
    /// Builds a stack, enforcing that the sample count exactly fills the
    /// declared `planes x height x width` shape.
    pub fn new(planes: usize, height: usize, width: usize, samples: SampleBuffer) -> Result<Self> {
        let expected = planes
            .checked_mul(height)
            .and_then(|n| n.checked_mul(width));
        if expected != Some(samples.len()) {
            return Err(ConversionError::ShapeMismatch {
                count: samples.len(),
                planes,
                height,
                width,
            });
        }

        Ok(Self {
            planes,
            height,
            width,
            samples,
        })
    }

    pub fn planes(&self) -> usize {
        self.planes
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    pub fn bit_depth(&self) -> u32 {
        self.samples.bit_depth()
    }
}
