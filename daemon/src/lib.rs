// LandChain Daemon Library
// Exposes the HTTP service and state file for the binary and tests

extern crate log;

pub mod config;
pub mod rpc;
pub mod storage;
