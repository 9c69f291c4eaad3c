//! Image processing pipeline module
//!
//! This module provides a structured approach to stack conversion, with
//! separate modules for raw DAX reading, format dispatch, JPEG XL writing,
//! and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod dax;
pub mod decode;
pub mod jxl;
pub mod stack;

pub use common::{
    ConversionError,
    Result,
};

pub use stack::{
    ImageStack,
    SampleBuffer,
};

pub use dax::{
    DaxReader,
    SidecarInfo,
};

pub use decode::{
    Jp2Decoder,
    SourceFormat,
    StackDecoder,
    TiffDecoder,
};

pub use jxl::{
    EncodeConfig,
    EncodeConfigBuilder,
    JxlEffort,
    JxlStackWriter,
    StackWriter,
};

pub use conversions::{
    StackToJxlPipeline,
};
