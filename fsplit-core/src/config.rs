//! Transfer configuration shared by split and merge

/// Default configuration constants
pub mod defaults {
    /// Default number of bytes moved per read/write call
    pub const BLOCK_SIZE: usize = 64_000;
}

/// Configuration passed explicitly into every split or merge call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    block_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_size: defaults::BLOCK_SIZE,
        }
    }
}

impl Config {
    /// Create a configuration with the default block size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with the given block size.
    ///
    /// A non-positive value leaves the default in place.
    pub fn with_block_size(value: i64) -> Self {
        let mut config = Self::default();
        config.set_block_size(value);
        config
    }

    /// Set the block size in bytes.
    ///
    /// Non-positive values are ignored and the previous value is kept.
    /// Returns whether the value was applied.
    pub fn set_block_size(&mut self, value: i64) -> bool {
        match usize::try_from(value) {
            Ok(size) if size > 0 => {
                self.block_size = size;
                true
            }
            _ => {
                log::warn!(
                    "Ignoring block size {value}; keeping {} bytes",
                    self.block_size
                );
                false
            }
        }
    }

    /// Number of bytes moved per read/write call
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}
