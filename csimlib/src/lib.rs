//! # CsimLib
//!
//! Csimlib is a library for set-associative cache simulation over Valgrind
//! memory traces
//!
//! It provides a parametrized cache model with Most-Recently-Used eviction, a
//! structured trace-line parser, and a simulator which replays a trace buffer
//! and aggregates hit/miss/eviction statistics
//!
//! The replacement policy really is MRU, not LRU. That is the policy this
//! simulator is specified against and the fixture outputs depend on it

/// Contains the cache model, its lines and sets, and the address decoder
pub mod cache;

/// Contains the cache configuration and its validation
pub mod config;

/// Contains the structured tokenizer for Valgrind trace lines
pub mod trace;

/// Contains the simulator which replays a trace against the cache model
pub mod simulator;

/// Contains the trace file reader
pub mod io;

/// Contains the summary printer and the results-file writer
pub mod summary;


/// Contains utilities for running tests and benchmarks.
pub mod util;
