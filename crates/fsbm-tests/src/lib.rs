//! Integration test crate for FSBM Trace.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every fsbm crate to verify they work together.

#[cfg(test)]
mod support;

#[cfg(test)]
mod pipeline;

#[cfg(test)]
mod trace;
