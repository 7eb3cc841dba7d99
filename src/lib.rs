//! Shorty library exports for testing

pub mod backend;
pub mod capability;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
