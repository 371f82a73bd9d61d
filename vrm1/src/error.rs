use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse {extension} extension JSON: {message}")]
    InvalidJson { extension: String, message: String },

    #[error("invalid {extension} extension data: {message}")]
    InvalidData { extension: String, message: String },

    #[error("{context}: node index {index} out of range ({count} nodes in document)")]
    NodeIndexOutOfRange {
        context: &'static str,
        index: usize,
        count: usize,
    },

    #[error("{context}: material index {index} out of range ({count} materials in document)")]
    MaterialIndexOutOfRange {
        context: &'static str,
        index: usize,
        count: usize,
    },

    #[error("{context}: image index {index} out of range ({count} images in document)")]
    ImageIndexOutOfRange {
        context: &'static str,
        index: usize,
        count: usize,
    },
}
