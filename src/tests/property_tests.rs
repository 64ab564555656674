use super::{initiator_keys, responder_keys};
use crate::config::RSA_MESSAGE_MAX;
use crate::keypair::{decrypt, encrypt, KeyPair};
use crate::utils::{gcd, is_prime};

#[test]
fn test_round_trip_every_block_below_modulus() {
    for keys in [initiator_keys(), responder_keys()] {
        let public = keys.public();
        for m in 0..keys.n {
            let c = encrypt(m, &public).unwrap();
            assert!(c < keys.n);
            assert_eq!(
                decrypt(c, keys.n, keys.private_exponent).unwrap(),
                m,
                "round trip failed at {} under n={}",
                m,
                keys.n
            );
        }
    }
}

#[test]
fn test_generated_keypair_invariants() {
    for _ in 0..20 {
        let keys = KeyPair::generate(RSA_MESSAGE_MAX).unwrap();
        assert_ne!(keys.p, keys.q);
        assert!(is_prime(keys.p));
        assert!(is_prime(keys.q));
        assert_eq!(keys.n, keys.p * keys.q);
        assert!(keys.public_exponent >= 3);
        assert_eq!(keys.public_exponent % 2, 1);

        let totient = (keys.p - 1) * (keys.q - 1);
        assert_eq!(gcd(keys.public_exponent, totient), 1);
        assert!(keys.private_exponent >= 1);
        assert!(keys.private_exponent < totient);
        assert_eq!(
            u128::from(keys.public_exponent) * u128::from(keys.private_exponent)
                % u128::from(totient),
            1
        );
    }
}

#[test]
fn test_generated_keypair_round_trip_sample() {
    let keys = KeyPair::generate(RSA_MESSAGE_MAX).unwrap();
    let public = keys.public();
    for m in (0..keys.n).step_by(7) {
        let c = encrypt(m, &public).unwrap();
        assert_eq!(decrypt(c, keys.n, keys.private_exponent).unwrap(), m);
    }
}

#[test]
fn test_oversized_blocks_always_rejected() {
    let keys = initiator_keys();
    let public = keys.public();
    for m in keys.n + 1..keys.n + 50 {
        assert!(encrypt(m, &public).is_err());
        assert!(decrypt(m, keys.n, keys.private_exponent).is_err());
    }
}
