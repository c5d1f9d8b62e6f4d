//! Common test utilities for aria2-tasks integration tests

#[allow(dead_code)]
pub mod fixtures;

pub use client::*;
#[allow(unused_imports)]
pub use fixtures::*;
