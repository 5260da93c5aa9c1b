use crate::config::CacheConfig;

/// The outcome of a single cache access
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AccessOutcome {
    Hit,
    Miss,
    MissEviction,
}

/// One cache line. `recency` holds the value of the cache's recency clock at
/// the line's last touch and is only ever compared, never interpreted
#[derive(Debug, Copy, Clone)]
struct CacheLine {
    valid: bool,
    tag: u64,
    recency: u64,
}

impl CacheLine {
    fn empty() -> Self {
        Self {
            valid: false,
            tag: 0,
            recency: 0,
        }
    }
}

/// Splits a 64-bit address into its block offset, set index, and tag
///
/// The selection masks are precomputed from the configuration so decoding is
/// two shifts and two masks per access
#[derive(Debug, Copy, Clone)]
pub struct AddressDecoder {
    set_bits: u32,
    block_bits: u32,
    set_index_mask: u64,
    block_offset_mask: u64,
}

/// The decomposed form of one memory address
///
/// The block offset plays no part in hit/miss decisions, it only defines the
/// byte-block partitioning, but it is decoded anyway as callers may want it
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecodedAddress {
    pub block_offset: u64,
    pub set_index: u64,
    pub tag: u64,
}

impl AddressDecoder {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            set_bits: config.set_bits,
            block_bits: config.block_bits,
            set_index_mask: config.num_sets() - 1,
            block_offset_mask: config.block_size() - 1,
        }
    }

    /// Decodes an address. Pure, no error conditions
    ///
    /// When s + b is the full 64-bit width there are no tag bits left and the
    /// tag is 0; `checked_shr` avoids the overflowing shift
    ///
    /// # Arguments
    ///
    /// * `address`: The 64-bit memory address of the access
    ///
    /// returns: DecodedAddress
    pub fn decode(&self, address: u64) -> DecodedAddress {
        DecodedAddress {
            block_offset: address & self.block_offset_mask,
            set_index: (address >> self.block_bits) & self.set_index_mask,
            tag: address
                .checked_shr(self.block_bits + self.set_bits)
                .unwrap_or(0),
        }
    }
}

/// The cache model: `num_sets` sets of exactly `associativity` lines each,
/// allocated once at construction and mutated in place for the cache's
/// lifetime
///
/// Eviction is **Most-Recently-Used**: on a miss into a full set the line
/// with the *maximum* recency is replaced. This is deliberate and must not be
/// "corrected" to LRU; the simulator is specified against this policy and
/// every fixture output depends on it
pub struct Cache {
    sets: Vec<Vec<CacheLine>>,
    // Incremented once per simulated access, ties in replacement ordering are
    // broken by scan order instead
    recency_clock: u64,
}

impl Cache {
    /// Creates a cache with all lines invalid and the recency clock at zero
    ///
    /// The configuration has already been validated by `CacheConfig::new`, so
    /// construction itself cannot fail
    pub fn new(config: &CacheConfig) -> Self {
        let sets = (0..config.num_sets())
            .map(|_| vec![CacheLine::empty(); config.associativity as usize])
            .collect();
        Self {
            sets,
            recency_clock: 0,
        }
    }

    /// Performs one access against the cache, updating line state and the
    /// recency clock
    ///
    /// The set's lines are scanned in storage order. A valid line with a
    /// matching tag is a hit. Otherwise the first invalid line is filled and
    /// the access is a miss. If the set is full, the MRU victim is
    /// overwritten and the access is a miss with an eviction
    ///
    /// Valid lines always form a prefix of the set (fills take the first
    /// invalid line), so the two scans below are equivalent to the single
    /// scan described by the model
    ///
    /// # Arguments
    ///
    /// * `set_index`: The set the access maps to, from the address decoder
    /// * `tag`: The tag of the accessed block
    ///
    /// returns: AccessOutcome
    pub fn access(&mut self, set_index: u64, tag: u64) -> AccessOutcome {
        self.recency_clock += 1;
        let clock = self.recency_clock;
        let set = &mut self.sets[set_index as usize];
        for line in set.iter_mut() {
            if line.valid && line.tag == tag {
                line.recency = clock;
                return AccessOutcome::Hit;
            }
        }
        for line in set.iter_mut() {
            if !line.valid {
                line.valid = true;
                line.tag = tag;
                line.recency = clock;
                return AccessOutcome::Miss;
            }
        }
        let victim = Self::mru_victim(set);
        let line = &mut set[victim];
        line.tag = tag;
        line.recency = clock;
        AccessOutcome::MissEviction
    }

    /// Selects the Most-Recently-Used line of a full set
    ///
    /// Only a strictly greater recency displaces the current candidate, so
    /// when several lines share the maximum the lowest-index one wins
    fn mru_victim(set: &[CacheLine]) -> usize {
        let mut victim = 0;
        let mut max_recency = set[0].recency;
        for (index, line) in set.iter().enumerate().skip(1) {
            if line.recency > max_recency {
                max_recency = line.recency;
                victim = index;
            }
        }
        victim
    }

    /// Re-initializes every line to invalid and rewinds the recency clock,
    /// making the cache indistinguishable from a freshly constructed one
    pub fn reset(&mut self) {
        for set in &mut self.sets {
            for line in set.iter_mut() {
                *line = CacheLine::empty();
            }
        }
        self.recency_clock = 0;
    }

    /// The number of lines never filled since construction or the last
    /// reset. Useful for analysing cache utilisation or debugging
    pub fn invalid_line_count(&self) -> usize {
        self.sets
            .iter()
            .flat_map(|set| set.iter())
            .filter(|line| !line.valid)
            .count()
    }
}
