use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unsupported file type {0:?}")]
    UnsupportedFormat(String),

    #[error("Malformed sidecar line {0:?}")]
    SidecarParseError(String),

    #[error("Sidecar key {0:?} is missing")]
    MissingKeyError(&'static str),

    #[error("Sidecar key {key:?} has invalid value {value:?}")]
    InvalidValueError { key: &'static str, value: String },

    #[error("Raw stack size mismatch: expected {expected} bytes, found {actual}")]
    TruncatedStackError { expected: u64, actual: u64 },

    #[error("Sample count {count} does not fill a {planes}x{height}x{width} stack")]
    ShapeMismatch {
        count: usize,
        planes: usize,
        height: usize,
        width: usize,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode JPEG XL image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
