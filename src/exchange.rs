//! Two-party exchange session.
//!
//! One initiator encrypts a "session key" block and a character-by-character
//! message; one responder waits for the initiator's signal, then decrypts
//! both. All shared state lives inside an [`ExchangeSession`] behind a single
//! mutex, and the completion flag signalled through the session's condition
//! variable is the only thing the responder's thread parks on.
//!
//! There is no timeout or cancellation: a responder whose initiator never
//! signals waits forever. That liveness gap is part of the protocol being
//! demonstrated and is left visible rather than papered over.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::keypair::{decrypt, encrypt, KeyPair, PublicKey};

/// State shared by the two roles for the lifetime of one exchange.
#[derive(Debug, Default)]
struct ExchangeState {
    session_key: Option<u64>,
    ciphertext: Vec<u64>,
    complete: bool,
}

/// A single client/server exchange, from key transmission through final
/// decryption.
///
/// Construct one session, share it with both role threads, then run
/// [`initiate`](Self::initiate) on one and [`respond`](Self::respond) on the
/// other. A session is single-use: the completion flag never resets.
#[derive(Debug, Default)]
pub struct ExchangeSession {
    shared: Mutex<ExchangeState>,
    done: Condvar,
}

/// What the initiator produced.
#[derive(Clone, Debug)]
pub struct InitiatorSummary {
    pub session_key: Option<u64>,
    pub ciphertext: Vec<u64>,
    pub skipped: usize,
}

/// What the responder observed and recovered.
#[derive(Clone, Debug)]
pub struct ResponderSummary {
    pub session_key: Option<u64>,
    pub ciphertext: Vec<u64>,
    pub message: String,
    pub skipped: usize,
}

impl ExchangeSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_shared(&self) -> MutexGuard<'_, ExchangeState> {
        // A poisoned guard still holds usable state for this demonstration.
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run the initiator's turn: publish the session key block, then the
    /// encrypted message, then signal completion.
    ///
    /// The lock is held for the whole turn. Blocks that cannot be encrypted
    /// are reported on stderr and omitted, so the published message may be
    /// shorter than the input; the turn always runs to the signal.
    pub fn initiate(&self, own: &KeyPair, peer: &PublicKey, message: &str) -> InitiatorSummary {
        let mut shared = self.lock_shared();

        let mut summary = InitiatorSummary {
            session_key: None,
            ciphertext: Vec::new(),
            skipped: 0,
        };

        // The "key exchange": the initiator's own private exponent, sent
        // under the responder's public key. Illustrative only.
        match encrypt(own.private_exponent, peer) {
            Ok(block) => {
                shared.session_key = Some(block);
                summary.session_key = Some(block);
            }
            Err(err) => {
                eprintln!("initiator: session key not transmitted: {}", err);
                summary.skipped += 1;
            }
        }

        let own_public = own.public();
        for ch in message.chars() {
            match encrypt(u64::from(u32::from(ch)), &own_public) {
                Ok(block) => shared.ciphertext.push(block),
                Err(err) => {
                    eprintln!("initiator: dropping {:?}: {}", ch, err);
                    summary.skipped += 1;
                }
            }
        }
        summary.ciphertext = shared.ciphertext.clone();

        shared.complete = true;
        self.done.notify_one();

        summary
        // lock released at end of scope
    }

    /// Run the responder's turn: park until the initiator signals, then
    /// recover the session key block and the message.
    ///
    /// Waiting releases the lock and reacquires it on wake, so the signal
    /// cannot be missed no matter which thread reaches the session first.
    pub fn respond(&self, initiator: &KeyPair, own: &KeyPair) -> ResponderSummary {
        let mut shared = self.lock_shared();
        while !shared.complete {
            shared = self
                .done
                .wait(shared)
                .unwrap_or_else(PoisonError::into_inner);
        }

        let mut skipped = 0;

        let mut session_key = None;
        if let Some(block) = shared.session_key {
            match decrypt(block, initiator.n, own.private_exponent) {
                Ok(value) => session_key = Some(value),
                Err(err) => {
                    eprintln!("responder: session key unreadable: {}", err);
                    skipped += 1;
                }
            }
        }

        let mut message = String::new();
        for &block in &shared.ciphertext {
            // Message blocks are opened with the initiator's private
            // exponent, not the responder's: both roles use the initiator's
            // keypair as the message channel, so the message leg is
            // effectively symmetric.
            match decrypt(block, initiator.n, initiator.private_exponent) {
                Ok(code) => match u32::try_from(code).ok().and_then(char::from_u32) {
                    Some(ch) => message.push(ch),
                    None => {
                        eprintln!("responder: block {} is not a character code", block);
                        skipped += 1;
                    }
                },
                Err(err) => {
                    eprintln!("responder: dropping block {}: {}", block, err);
                    skipped += 1;
                }
            }
        }

        ResponderSummary {
            session_key,
            ciphertext: shared.ciphertext.clone(),
            message,
            skipped,
        }
    }
}
