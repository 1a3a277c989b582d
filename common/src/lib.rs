// LandChain Common Library
// Parcel state machine, registry handle and contract ABI shared by the daemon

pub mod abi;
pub mod config;
pub mod parcel;
pub mod registry;
pub mod serializer;
pub mod state;
