//! RSA-style keypairs and the single-block encrypt/decrypt primitives.
//!
//! Keys are derived from two small distinct primes. The modulus must exceed
//! every plaintext block value encrypted under it; that contract belongs to
//! the caller and is surfaced at encryption time as a data-loss error, not
//! prevented at generation time.

use crate::config::RSA_DISTINCT_PRIME_MAX_ATTEMPTS;
use crate::error::RsaExchangeError;
use crate::utils::{gcd, generate_random_prime, is_prime, mod_exp};

/// The shareable half of a keypair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub n: u64,
    pub exponent: u64,
}

/// One party's keypair.
///
/// `public_exponent` is the smallest odd integer >= 3 coprime with
/// `(p-1)(q-1)`; `private_exponent` is its modular inverse in
/// `[1, (p-1)(q-1))`. Only the [`PublicKey`] half ever crosses to a peer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub p: u64,
    pub q: u64,
    pub n: u64,
    pub public_exponent: u64,
    pub private_exponent: u64,
}

impl KeyPair {
    /// Generate a keypair from two distinct random primes drawn in
    /// `[1, message_max]`.
    ///
    /// `message_max` must admit at least two distinct primes. Whether the
    /// resulting `n` covers the caller's plaintext alphabet is not checked
    /// here; an undersized modulus shows up later as per-block data loss.
    pub fn generate(message_max: u64) -> Result<Self, RsaExchangeError> {
        let p = generate_random_prime(message_max)?;

        for _ in 0..RSA_DISTINCT_PRIME_MAX_ATTEMPTS {
            let q = generate_random_prime(message_max)?;
            if q != p {
                return Self::from_primes(p, q);
            }
        }

        Err(RsaExchangeError::PrimeSearchExhausted {
            bound: message_max,
            attempts: RSA_DISTINCT_PRIME_MAX_ATTEMPTS,
        })
    }

    /// Derive a keypair from two explicit primes.
    pub fn from_primes(p: u64, q: u64) -> Result<Self, RsaExchangeError> {
        if !is_prime(p) || !is_prime(q) {
            return Err(RsaExchangeError::InvalidInput(format!(
                "{} and {} must both be prime",
                p, q
            )));
        }
        if p == q {
            return Err(RsaExchangeError::InvalidInput(
                "primes must be distinct".to_string(),
            ));
        }

        let n = p.checked_mul(q).ok_or_else(|| {
            RsaExchangeError::UnexpectedCondition("modulus overflows u64".to_string())
        })?;
        let totient = (p - 1).checked_mul(q - 1).ok_or_else(|| {
            RsaExchangeError::UnexpectedCondition("totient overflows u64".to_string())
        })?;

        let public_exponent = derive_public_exponent(totient);
        let private_exponent = derive_private_exponent(totient, public_exponent)?;

        Ok(Self {
            p,
            q,
            n,
            public_exponent,
            private_exponent,
        })
    }

    /// The half of the pair that may be handed to a peer.
    pub fn public(&self) -> PublicKey {
        PublicKey {
            n: self.n,
            exponent: self.public_exponent,
        }
    }
}

/// Smallest odd `k_e >= 3` coprime with the totient.
fn derive_public_exponent(totient: u64) -> u64 {
    let mut k_e = 3;
    while gcd(k_e, totient) != 1 {
        k_e += 2; // stays odd
    }
    k_e
}

/// Linear search for `k_d` with `(k_e * k_d) mod totient == 1`.
///
/// The range cannot come up empty for exponents produced by
/// `derive_public_exponent`; a miss is an internal invariant violation.
fn derive_private_exponent(totient: u64, k_e: u64) -> Result<u64, RsaExchangeError> {
    for k_d in 1..totient {
        if u128::from(k_e) * u128::from(k_d) % u128::from(totient) == 1 {
            return Ok(k_d);
        }
    }

    Err(RsaExchangeError::ModularInverseNotFound)
}

/// Encrypt one plaintext block under a public key.
///
/// A block larger than the modulus cannot round-trip and is refused rather
/// than silently wrapped.
pub fn encrypt(plaintext: u64, key: &PublicKey) -> Result<u64, RsaExchangeError> {
    if plaintext > key.n {
        return Err(RsaExchangeError::DataLoss {
            value: plaintext,
            modulus: key.n,
        });
    }

    mod_exp(plaintext, key.exponent, key.n)
}

/// Decrypt one ciphertext block under a modulus and private exponent.
///
/// The modulus and exponent are taken separately because the exchange
/// protocol deliberately mixes one party's modulus with another's exponent.
pub fn decrypt(ciphertext: u64, n: u64, private_exponent: u64) -> Result<u64, RsaExchangeError> {
    if ciphertext > n {
        return Err(RsaExchangeError::DataLoss {
            value: ciphertext,
            modulus: n,
        });
    }

    mod_exp(ciphertext, private_exponent, n)
}
