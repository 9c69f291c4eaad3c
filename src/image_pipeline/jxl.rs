//! JPEG XL encoding module

mod jxl_writer;
mod types;
mod writer;

pub use jxl_writer::JxlStackWriter;
pub use types::{EncodeConfig, EncodeConfigBuilder, JxlEffort};
pub use writer::StackWriter;
