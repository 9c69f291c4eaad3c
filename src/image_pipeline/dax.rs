//! DAX raw stack reading module
//!
//! DAX files are headerless sequences of 2048x2048 unsigned 16-bit frames,
//! paired with a plain-text `.inf` sidecar describing the acquisition.

mod reader;
mod sidecar;

pub use reader::{DAX_FRAME_HEIGHT, DAX_FRAME_WIDTH, DaxReader};
pub use sidecar::SidecarInfo;
