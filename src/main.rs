use std::thread;

use rsa_exchange::config::RSA_MESSAGE_MAX;
use rsa_exchange::{ExchangeSession, KeyPair};

const DEMO_MESSAGE: &str = "Hello from the initiator";

fn separator() {
    println!("{}", "=".repeat(60));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let initiator_keys = KeyPair::generate(RSA_MESSAGE_MAX)?;
    let responder_keys = KeyPair::generate(RSA_MESSAGE_MAX)?;

    separator();
    println!(
        "initiator keys: n={} k_e={}",
        initiator_keys.n, initiator_keys.public_exponent
    );
    println!(
        "responder keys: n={} k_e={}",
        responder_keys.n, responder_keys.public_exponent
    );

    let session = ExchangeSession::new();

    let (sent, received) = thread::scope(|scope| {
        let initiator = scope.spawn(|| {
            println!("initiator :: starting");
            session.initiate(&initiator_keys, &responder_keys.public(), DEMO_MESSAGE)
        });
        let responder = scope.spawn(|| {
            println!("responder :: starting");
            session.respond(&initiator_keys, &responder_keys)
        });
        (initiator.join(), responder.join())
    });
    let sent = sent.map_err(|_| "initiator thread panicked")?;
    let received = received.map_err(|_| "responder thread panicked")?;

    separator();
    match sent.session_key {
        Some(block) => println!("transmitted key block: {}", block),
        None => println!("transmitted key block: (not sent)"),
    }
    let outgoing: String = sent.ciphertext.iter().map(u64::to_string).collect();
    println!("outgoing ciphertext: {}", outgoing);

    separator();
    match received.session_key {
        Some(value) => println!("recovered key value: {}", value),
        None => println!("recovered key value: (none)"),
    }
    let incoming: String = received.ciphertext.iter().map(u64::to_string).collect();
    println!("incoming ciphertext: {}", incoming);
    println!("recovered message: {}", received.message);
    separator();

    Ok(())
}
