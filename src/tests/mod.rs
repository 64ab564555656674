use crate::keypair::KeyPair;

fn initiator_keys() -> KeyPair {
    KeyPair::from_primes(11, 13).expect("keypair from (11, 13)")
}

fn responder_keys() -> KeyPair {
    KeyPair::from_primes(17, 19).expect("keypair from (17, 19)")
}

pub mod concurrency_tests;


pub mod property_tests;
