use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::{initiator_keys, responder_keys};
use crate::exchange::ExchangeSession;

const MESSAGE: &str = "The quick brown fox";

#[test]
fn test_responder_never_observes_partial_output() {
    let initiator = initiator_keys();
    let responder = responder_keys();

    for round in 0..100u64 {
        let session = Arc::new(ExchangeSession::new());

        // Alternate which side gets delayed to vary the interleaving.
        let initiator_delay = Duration::from_micros(round % 3 * 50);
        let responder_delay = Duration::from_micros((round + 1) % 3 * 50);

        let producer = {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                thread::sleep(initiator_delay);
                session.initiate(&initiator, &responder.public(), MESSAGE)
            })
        };
        let consumer = {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                thread::sleep(responder_delay);
                session.respond(&initiator, &responder)
            })
        };

        let sent = producer.join().expect("initiator thread");
        let received = consumer.join().expect("responder thread");

        assert_eq!(sent.ciphertext.len(), MESSAGE.chars().count());
        assert_eq!(
            received.ciphertext, sent.ciphertext,
            "partial read on round {}",
            round
        );
        assert_eq!(received.message, MESSAGE, "corrupted message on round {}", round);
    }
}

#[test]
fn test_responder_blocks_until_signal() {
    let initiator = initiator_keys();
    let responder = responder_keys();
    let session = Arc::new(ExchangeSession::new());
    let finished = Arc::new(AtomicBool::new(false));

    let consumer = {
        let session = Arc::clone(&session);
        let finished = Arc::clone(&finished);
        thread::spawn(move || {
            let summary = session.respond(&initiator, &responder);
            finished.store(true, Ordering::SeqCst);
            summary
        })
    };

    thread::sleep(Duration::from_millis(50));
    assert!(
        !finished.load(Ordering::SeqCst),
        "responder proceeded without a signal"
    );

    session.initiate(&initiator, &responder.public(), "Hi");
    let received = consumer.join().expect("responder thread");
    assert!(finished.load(Ordering::SeqCst));
    assert_eq!(received.message, "Hi");
}
