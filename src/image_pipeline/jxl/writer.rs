use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::jxl::types::EncodeConfig;
use crate::image_pipeline::stack::ImageStack;

pub trait StackWriter {
    fn write_stack(
        &self,
        stack: &ImageStack,
        output: &mut dyn Write,
        config: &EncodeConfig,
    ) -> Result<()>;
}
