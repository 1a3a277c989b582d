// Land Parcel State Machine
// This module holds the single land record tracked by a registry.
//
// Verification gates ownership transfer:
// - `register` always lands in Unverified
// - `verify` moves to Verified
// - a successful `transfer` consumes the verification and lands in Unverified
// - `certify` and `report` never change the verification state
//
// Module Structure:
// - error: business rule errors with numeric codes
// - types: Parcel record, verification status, transition events
// - operations: state transitions
// - locale: rendering of events, errors and the report

mod error;
mod locale;
mod operations;
mod types;

pub use error::*;
pub use locale::*;
pub use types::*;
