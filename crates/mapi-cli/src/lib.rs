//! Library side of the `mapi-tags` binary.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod sources;
pub mod summary;
pub mod types;
