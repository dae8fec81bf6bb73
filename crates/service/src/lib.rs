// crates/service/src/lib.rs
//! HTTP upload front end: accepts one source file, strips its comments with
//! a hardcoded language and serves the cleaned copy back by filename.

pub mod error;
pub mod server;
pub mod store;
