use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    decode::SourceFormat,
    jxl::{EncodeConfig, JxlStackWriter, StackWriter},
    stack::ImageStack,
};

const OUTPUT_EXTENSION: &str = "jxl";

pub struct StackToJxlPipeline<W: StackWriter> {
    writer: W,
    config: EncodeConfig,
}

impl StackToJxlPipeline<JxlStackWriter> {
    pub fn new(config: EncodeConfig) -> Self {
        Self {
            writer: JxlStackWriter,
            config,
        }
    }
}

impl<W: StackWriter> StackToJxlPipeline<W> {
    pub fn with_custom(writer: W, config: EncodeConfig) -> Self {
        Self { writer, config }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, stack, output), fields(planes = stack.planes()))]
    pub fn convert(&self, stack: &ImageStack, output: &mut dyn Write) -> Result<()> {
        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = stack.width(),
                height = stack.height()
            )
            .entered();
            self.validate_dimensions(stack.width(), stack.height())?;
        }

        {
            let _span = tracing::info_span!("encode_jxl").entered();
            self.writer.write_stack(stack, output, &self.config)?;
        }

        Ok(())
    }

    /// Converts one file to a sibling `.jxl`, overwriting any existing output.
    ///
    /// The encoded bytes are buffered in memory and only written out once the
    /// encode fully succeeded, so a codec failure never leaves a partial or
    /// clobbered output file. Returns the output path.
    #[instrument(skip(self, input_path))]
    pub fn convert_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        let input_path = input_path.as_ref();
        let output_path = input_path.with_extension(OUTPUT_EXTENSION);

        // Per-file progress lines belong to the caller; keep these at debug
        // so they stay quiet while a progress bar owns the terminal.
        debug!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let stack = {
            let _span = tracing::info_span!("decode").entered();
            let format = SourceFormat::from_path(input_path)?;
            format.decoder().read_stack(input_path)?
        };

        let mut encoded = Vec::new();
        self.convert(&stack, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            fs::write(&output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        debug!(
            planes = stack.planes(),
            width = stack.width(),
            height = stack.height(),
            bytes = encoded.len(),
            "Conversion complete"
        );
        Ok(output_path)
    }

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EncodeConfig) {
        self.config = config;
    }
}
