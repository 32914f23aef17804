use thiserror::Error;

/// Errors that can occur while converting settings blocks to and from CSV.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("hex decoding error: {0}")]
    HexError(#[from] hex::FromHexError),

    #[error("invalid block: {0}")]
    InvalidBlock(#[from] settings_block::Error),

    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid image size {0}: expected a block of 44 bytes or a sector of 512 bytes")]
    InvalidImageSize(usize),
}
