use crate::cache::{AccessOutcome, AddressDecoder, Cache};
use crate::config::CacheConfig;
use crate::trace::{parse_line, AccessKind, AccessRecord, TraceLine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// The aggregate result of a simulation run
///
/// All three counters are monotonically non-decreasing over a run. Every
/// simulated access contributes exactly one hit or one miss, and an eviction
/// only ever accompanies a miss, so `hits + misses` equals the number of
/// simulated accesses and `evictions <= misses`
#[derive(Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct Statistics {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl Statistics {
    fn record(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
            AccessOutcome::MissEviction => {
                self.misses += 1;
                self.evictions += 1;
            }
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits:{} misses:{} evictions:{}",
            self.hits, self.misses, self.evictions
        )
    }
}

/// The simulator drives the cache model from a trace buffer and collects
/// results
///
/// It supports calling simulate multiple times against the same cache state,
/// and will update the time taken to simulate and the results accordingly.
/// For independent runs construct a fresh simulator, the recency clock and
/// the counters would otherwise carry over
pub struct Simulator {
    decoder: AddressDecoder,
    cache: Cache,
    stats: Statistics,
    verbose: bool,
    simulation_time: Duration,
}

impl Simulator {
    /// Creates a new simulator for a given configuration
    ///
    /// # Arguments
    ///
    /// * `config`: A validated cache configuration
    ///
    /// returns: Simulator
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            decoder: AddressDecoder::new(config),
            cache: Cache::new(config),
            stats: Statistics::default(),
            verbose: false,
            simulation_time: Duration::new(0, 0),
        }
    }

    /// Enables per-access outcome logging to stdout, one line per trace
    /// record in the original simulator's format, e.g. `M 20,1 miss hit`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replays a trace buffer against the cache, folding every access into
    /// the running statistics
    ///
    /// Lines are processed strictly in buffer order. Loads and Stores are one
    /// access each; a Modify is a read followed by a write of the same
    /// location and is simulated as two consecutive accesses to the same
    /// (set, tag), so its second half hits whenever the first half installed
    /// the line. Instruction fetches and malformed lines are skipped without
    /// being counted
    ///
    /// Note that reads of the buffer are *guaranteed to be sequential*. This
    /// means that when using something like mmap, one can advise the
    /// operating system that sequential reads will be used, which can
    /// increase read performance
    ///
    /// # Arguments
    ///
    /// * `bytes`: The raw trace file contents
    ///
    /// returns: &Statistics, borrowed from the simulator
    pub fn simulate(&mut self, bytes: &[u8]) -> &Statistics {
        let start = Instant::now();
        for raw_line in bytes.split(|byte| *byte == b'\n') {
            // Non-UTF-8 bytes make the line malformed, not the run
            let line = match std::str::from_utf8(raw_line) {
                Ok(line) => line,
                Err(_) => continue,
            };
            match parse_line(line) {
                TraceLine::Access(record) => self.replay_access(record),
                TraceLine::Instruction | TraceLine::Malformed => {}
            }
        }
        self.simulation_time += start.elapsed();
        &self.stats
    }

    /// Simulates one trace record: one cache access, or two for a Modify
    fn replay_access(&mut self, record: AccessRecord) {
        let decoded = self.decoder.decode(record.address);
        let first = self.cache.access(decoded.set_index, decoded.tag);
        self.stats.record(first);
        let second = if record.kind == AccessKind::Modify {
            let second = self.cache.access(decoded.set_index, decoded.tag);
            self.stats.record(second);
            Some(second)
        } else {
            None
        };
        if self.verbose {
            let mut outcomes = outcome_label(first).to_string();
            if let Some(second) = second {
                outcomes = format!("{outcomes} {}", outcome_label(second));
            }
            println!("{} {:x},{} {outcomes}", record.kind, record.address, record.length);
        }
    }

    /// The statistics accumulated so far
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Gets the wall-clock execution time for processing
    pub fn get_execution_time(&self) -> &Duration {
        &self.simulation_time
    }

    /// Gets the number of cache lines never filled. Useful for analysing
    /// cache utilisation or debugging
    pub fn invalid_line_count(&self) -> usize {
        self.cache.invalid_line_count()
    }
}

fn outcome_label(outcome: AccessOutcome) -> &'static str {
    match outcome {
        AccessOutcome::Hit => "hit",
        AccessOutcome::Miss => "miss",
        AccessOutcome::MissEviction => "miss eviction",
    }
}
