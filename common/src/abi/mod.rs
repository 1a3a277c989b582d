// Contract ABI
// Application calls reach the registry through ARC4 encoded arguments:
// - args[0]: 4-byte method selector, SHA-512/256 of the method signature
// - args[1..]: one ARC4 string per parameter (u16 length + UTF-8 bytes)
//
// The return value is logged as ABI_RETURN_PREFIX followed by an ARC4 string.
// A rejected transfer is a regular return carrying the error text.
//
// Module Structure:
// - error: decoding and encoding errors
// - method: method table and selectors
// - codec: ARC4 string and return log encoding
// - call: decoded calls and their execution
// - dispatch: single calls and atomic groups against a registry

mod call;
mod codec;
mod dispatch;
mod error;
mod method;

pub use call::*;
pub use codec::*;
pub use dispatch::*;
pub use error::*;
pub use method::*;
