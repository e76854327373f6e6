//! Masterfile builder library: logging setup and the build pipeline used by
//! the `masterfile` binary.

pub mod logging;
pub mod pipeline;
