//! Toy RSA-style cryptosystem with a two-party encrypted exchange.
//!
//! This crate contains a small, self-contained RSA-style cryptosystem built
//! from first principles (prime generation, keypair derivation, and
//! single-block modular-exponentiation encryption), plus a two-thread
//! exchange protocol in which an initiator transmits an encrypted "session
//! key" and a per-character encrypted message to a waiting responder.
//!
//! Not a production cryptosystem: the moduli are tiny and the arithmetic is
//! not constant-time. One `u64` block carries one character.

pub mod config;
pub mod error;
pub mod exchange;
pub mod keypair;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use crate::error::RsaExchangeError;
pub use crate::exchange::{ExchangeSession, InitiatorSummary, ResponderSummary};
pub use crate::keypair::{decrypt, encrypt, KeyPair, PublicKey};
pub use crate::utils::{gcd, generate_random_prime, is_prime, mod_exp};
