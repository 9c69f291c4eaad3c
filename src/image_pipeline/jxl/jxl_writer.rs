//! JPEG XL writer built on `jpegxl-rs` (libjxl).
//!
//! The codestream holds a single grayscale image: the stack's planes are
//! concatenated along the vertical axis, so a `(planes, h, w)` stack becomes
//! a `(planes * h, w)` image with every sample preserved. The planar data is
//! already contiguous in that order, so no copy is involved.

use std::io::Write;

use jpegxl_rs::encode::{ColorEncoding, EncoderFrame, EncoderSpeed};
use jpegxl_rs::encoder_builder;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::jxl::types::{EncodeConfig, JxlEffort};
use crate::image_pipeline::jxl::writer::StackWriter;
use crate::image_pipeline::stack::{ImageStack, SampleBuffer};

pub struct JxlStackWriter;

impl From<JxlEffort> for EncoderSpeed {
    fn from(effort: JxlEffort) -> Self {
        match effort {
            JxlEffort::Lightning => EncoderSpeed::Lightning,
            JxlEffort::Thunder => EncoderSpeed::Thunder,
            JxlEffort::Falcon => EncoderSpeed::Falcon,
            JxlEffort::Cheetah => EncoderSpeed::Cheetah,
            JxlEffort::Hare => EncoderSpeed::Hare,
            JxlEffort::Wombat => EncoderSpeed::Wombat,
            JxlEffort::Squirrel => EncoderSpeed::Squirrel,
            JxlEffort::Kitten => EncoderSpeed::Kitten,
            JxlEffort::Tortoise => EncoderSpeed::Tortoise,
        }
    }
}

impl StackWriter for JxlStackWriter {
    fn write_stack(
        &self,
        stack: &ImageStack,
        output: &mut dyn Write,
        config: &EncodeConfig,
    ) -> Result<()> {
        debug!(
            planes = stack.planes(),
            width = stack.width(),
            height = stack.height(),
            bit_depth = stack.bit_depth(),
            quality = config.quality,
            "Encoding JPEG XL image"
        );

        let speed: EncoderSpeed = config.effort.into();
        let built = if config.is_lossless() {
            encoder_builder()
                .speed(speed)
                .color_encoding(ColorEncoding::SrgbLuma)
                .has_alpha(false)
                .lossless(true)
                .uses_original_profile(true)
                .build()
        } else {
            encoder_builder()
                .speed(speed)
                .color_encoding(ColorEncoding::SrgbLuma)
                .has_alpha(false)
                .lossless(false)
                .quality(config.distance())
                .build()
        };
        let mut encoder = built.map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        let width = stack.width() as u32;
        let height = (stack.planes() * stack.height()) as u32;

        let encoded = match stack.samples() {
            SampleBuffer::U8(samples) => encoder
                .encode_frame::<u8, u8>(
                    &EncoderFrame::new(samples.as_slice()).num_channels(1),
                    width,
                    height,
                )
                .map(|result| result.data),
            SampleBuffer::U16(samples) => encoder
                .encode_frame::<u16, u16>(
                    &EncoderFrame::new(samples.as_slice()).num_channels(1),
                    width,
                    height,
                )
                .map(|result| result.data),
        }
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&encoded)?;

        debug!(bytes = encoded.len(), "JPEG XL encoding complete");
        Ok(())
    }
}
