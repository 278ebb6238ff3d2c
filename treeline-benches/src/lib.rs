//! Benchmark support library for treeline.
//!
//! Hosts the synthetic graph sources shared by the criterion benchmarks so
//! bench files stay focused on measurement.

pub mod source;
