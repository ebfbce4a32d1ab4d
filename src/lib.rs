//! Tube library exports for the binary and for tests.

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
