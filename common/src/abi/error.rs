use thiserror::Error;

use crate::serializer::ReaderError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("Empty application call")]
    EmptyCall,
    #[error("Invalid method selector size: {0}")]
    InvalidSelectorSize(usize),
    #[error("Unknown method selector 0x{}", hex::encode(_0))]
    UnknownSelector([u8; 4]),
    #[error("Method '{method}' expects {expected} arguments, got {got}")]
    InvalidArgumentCount {
        method: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Invalid argument {index}: {source}")]
    InvalidArgument { index: usize, source: ReaderError },
    #[error("Unexpected trailing bytes in argument {0}")]
    TrailingBytes(usize),
    #[error("Value of {0} bytes does not fit an ARC4 string")]
    ValueTooLarge(usize),
    #[error("Return log is missing the ABI return prefix")]
    MissingReturnPrefix,
    #[error("Empty call group")]
    EmptyGroup,
    #[error("Call group of {0} exceeds the maximum size")]
    GroupTooLarge(usize),
    #[error("Call {index} in group: {source}")]
    InGroup {
        index: usize,
        source: Box<AbiError>,
    },
    #[error(transparent)]
    Reader(#[from] ReaderError),
}
