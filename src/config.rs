//! Library configuration and protocol parameters.

/// Default upper bound for the random prime search, and thus the largest
/// plaintext block value the demo exchange is sized for.
pub const RSA_MESSAGE_MAX: u64 = 255;

/// Maximum attempts for drawing a random prime below the bound.
pub const RSA_PRIME_GEN_MAX_ATTEMPTS: usize = 10_000;

/// Maximum attempts for drawing a second prime distinct from the first.
pub const RSA_DISTINCT_PRIME_MAX_ATTEMPTS: usize = 128;
