/// The configuration for a simulated cache, fixed at startup
///
/// `set_bits` (s) and `block_bits` (b) are bit widths taken out of the 64-bit
/// address; `associativity` (E) is the number of lines per set
#[derive(Debug, Copy, Clone)]
pub struct CacheConfig {
    pub set_bits: u32,
    pub associativity: u32,
    pub block_bits: u32,
}

impl CacheConfig {
    /// Validates and creates a cache configuration
    ///
    /// All three parameters must be positive, and the set and block fields
    /// together must fit in a 64-bit address
    ///
    /// # Arguments
    ///
    /// * `set_bits`: Number of set index bits (s)
    /// * `associativity`: Number of lines per set (E)
    /// * `block_bits`: Number of block offset bits (b)
    ///
    /// returns: Result<CacheConfig, String>
    pub fn new(set_bits: u32, associativity: u32, block_bits: u32) -> Result<Self, String> {
        if set_bits == 0 || associativity == 0 || block_bits == 0 {
            return Err(format!(
                "Invalid cache configuration: s ({set_bits}), E ({associativity}), and b ({block_bits}) must all be positive"
            ));
        }
        if set_bits as u64 + block_bits as u64 > 64 {
            return Err(format!(
                "Invalid cache configuration: s ({set_bits}) + b ({block_bits}) exceeds the 64-bit address width"
            ));
        }
        Ok(Self {
            set_bits,
            associativity,
            block_bits,
        })
    }

    /// The number of sets, 2^s
    pub fn num_sets(&self) -> u64 {
        1 << self.set_bits
    }

    /// The block size in bytes, 2^b
    pub fn block_size(&self) -> u64 {
        1 << self.block_bits
    }
}
