use threefish256::{codec, encrypt_block};

fn main() {
    let key = [0x0123456789abcdef, 0x1122334455667788, 0x99aabbccddeeff00, 0x0f1e2d3c4b5a6978];
    let tweak = [0x00000000000000ff, 0xff00000000000000];
    let plaintext = [0xfedcba9876543210, 0, 42, u64::MAX];

    let result = encrypt_block(&key, &tweak, &plaintext);

    // Print the first two rounds plus the final whitening step, the same
    // progressive view a visualization front-end would render.
    for step in result.trace.iter().filter(|s| s.round < 2) {
        println!(
            "round {:>2}  {:<40} {}",
            step.round,
            step.description,
            codec::format_state(&step.state)
        );
    }
    let last = result.trace.last().unwrap();
    println!(
        "round {:>2}  {:<40} {}",
        last.round,
        last.description,
        codec::format_state(&last.state)
    );

    println!("\nciphertext: {}", codec::encode_words(&result.block));
}
