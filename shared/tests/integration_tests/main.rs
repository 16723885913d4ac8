//! Integration tests for Lumen.
//!
//! These tests drive the public capability surface through the production
//! adapter and the recording double, and inspect what reaches the channel.

mod adapter_tests;
mod common;
mod equivalence_tests;
mod recording_tests;
