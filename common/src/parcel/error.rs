// Parcel Error Codes
//
// Error Code Ranges:
// - 0: Success
// - 1000-1099: Ownership errors

use thiserror::Error;

/// Parcel operation result type
pub type ParcelResult<T> = Result<T, ParcelError>;

/// Business rule violations, reported to the caller without touching state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum ParcelError {
    #[error("Parcel must be verified before ownership transfer")]
    NotVerified = 1001,
}

impl ParcelError {
    /// Numeric code exposed to hosts
    pub fn code(&self) -> u64 {
        *self as u64
    }
}
