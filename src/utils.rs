use getrandom::getrandom;

use crate::config::RSA_PRIME_GEN_MAX_ATTEMPTS;
use crate::error::RsaExchangeError;

/// Binary (square-and-multiply) modular exponentiation:
/// `base^exponent mod modulus`.
///
/// Intermediate products are widened to `u128` before reduction, so no
/// `u64` modulus can overflow the accumulator. A zero modulus has no
/// meaningful residue and is rejected up front.
pub fn mod_exp(base: u64, exponent: u64, modulus: u64) -> Result<u64, RsaExchangeError> {
    if modulus == 0 {
        return Err(RsaExchangeError::InvalidInput(
            "modulus must be non-zero".to_string(),
        ));
    }

    let modulus = u128::from(modulus);
    let mut result = 1 % modulus;
    let mut base = u128::from(base) % modulus;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent % 2 == 1 {
            result = result * base % modulus;
        }
        exponent /= 2;
        base = base * base % modulus;
    }

    Ok(result as u64)
}

/// Greatest common divisor by the Euclidean algorithm; `gcd(a, 0) == a`.
pub fn gcd(a: u64, b: u64) -> u64 {
    let mut x = a;
    let mut y = b;
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Trial-division primality test; `n <= 1` is not prime.
///
/// Linear in `sqrt(n)`, acceptable only for the small bounds this crate
/// operates on.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Draw a uniformly random prime in `[1, bound]`.
///
/// The search is bounded: a range with no primes, or persistent bad luck,
/// yields `PrimeSearchExhausted` instead of spinning forever.
pub fn generate_random_prime(bound: u64) -> Result<u64, RsaExchangeError> {
    if bound < 2 {
        return Err(RsaExchangeError::InvalidInput(format!(
            "no primes exist at or below {}",
            bound
        )));
    }

    for _ in 0..RSA_PRIME_GEN_MAX_ATTEMPTS {
        let candidate = random_u64_below(bound)? + 1;
        if is_prime(candidate) {
            return Ok(candidate);
        }
    }

    Err(RsaExchangeError::PrimeSearchExhausted {
        bound,
        attempts: RSA_PRIME_GEN_MAX_ATTEMPTS,
    })
}

/// Rejection-sample a uniform value in `[0, upper)`.
///
/// Masking each draw down to `upper`'s bit length before rejecting avoids
/// modulo bias.
fn random_u64_below(upper: u64) -> Result<u64, RsaExchangeError> {
    if upper == 0 {
        return Ok(0);
    }

    let bits = 64 - upper.leading_zeros();

    loop {
        let mut buf = [0u8; 8];
        getrandom(&mut buf).map_err(|_| RsaExchangeError::RandomGenerationFailed)?;

        let candidate = u64::from_be_bytes(buf) >> (64 - bits);
        if candidate < upper {
            return Ok(candidate);
        }
    }
}
