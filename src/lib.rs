#![warn(clippy::all)]
pub mod core;
pub mod util;

// Conditional modules
#[cfg(any(test, feature = "enable-test-utils"))]
pub mod testutil;
