use thiserror::Error;

#[derive(Debug, Error)]
pub enum FcodeError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error("Can't skip over attr {name}: declared {declared} bytes, skipped {skipped}")]
    TruncatedAttr {
        name: String,
        declared: u16,
        skipped: u16,
    },
    #[error("Invalid name index: {0}")]
    InvalidNameIndex(u16),
    #[error("Invalid symbol index: {0}")]
    InvalidSymbolIndex(u16),
}
