use threefish256::encrypt_hex;

fn main() {
    // The classic demonstration input: all-zero key, tweak and plaintext.
    // Round 0 stays at [0, 0, 0, 0] (mixing zeros yields zeros); the key
    // schedule parity constant pulls the state off zero from round 4 on.
    let key = "0".repeat(64);
    let tweak = "0".repeat(32);
    let plaintext = "0".repeat(64);

    let (ciphertext, trace) = encrypt_hex(&key, &tweak, &plaintext).expect("inputs are well-formed");

    println!("Key:        {}", key);
    println!("Tweak:      {}", tweak);
    println!("Plaintext:  {}", plaintext);
    println!("Ciphertext: {}", ciphertext);
    println!("Steps:      {}", trace.len());
}
