pub mod batch;
pub mod image_pipeline;
pub mod logger;
