#[derive(Debug)]
pub enum RsaExchangeError {
    InvalidInput(String),
    UnexpectedCondition(String),
    DataLoss { value: u64, modulus: u64 },
    PrimeSearchExhausted { bound: u64, attempts: usize },
    ModularInverseNotFound,
    RandomGenerationFailed,
}

impl std::error::Error for RsaExchangeError {}

impl core::fmt::Display for RsaExchangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RsaExchangeError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            RsaExchangeError::UnexpectedCondition(msg) => {
                write!(f, "unexpected condition: {}", msg)
            }
            RsaExchangeError::DataLoss { value, modulus } => {
                write!(f, "data loss: {} exceeds modulus {}", value, modulus)
            }
            RsaExchangeError::PrimeSearchExhausted { bound, attempts } => {
                write!(
                    f,
                    "prime search exhausted (bound={}, attempts={})",
                    bound, attempts
                )
            }
            RsaExchangeError::ModularInverseNotFound => write!(f, "modular inverse not found"),
            RsaExchangeError::RandomGenerationFailed => write!(f, "random generation failed"),
        }
    }
}
