//! Pipeline conversions module
//!
//! This module contains orchestration logic for stack to JPEG XL conversion.

mod stack_to_jxl;


pub use stack_to_jxl::StackToJxlPipeline;
