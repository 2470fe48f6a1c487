use std::fmt::Write as _;
use strjoin_rs::{join, with_joiner, with_step, Joiner, JoinerOptions};

fn main() {
    println!("=== Joiner Examples ===\n");

    // Example 1: Bracketed list
    println!("1. Bracketed list:");
    let mut joiner = Joiner::new([with_joiner("[", ", ", "]")]);
    joiner.write_str("alpha");
    joiner.write_str("beta");
    joiner.write_str("gamma");
    println!("{} (len {}, cap {})\n", joiner, joiner.len(), joiner.cap());

    // Example 2: Mixed write kinds
    println!("2. Chars, bytes and strings:");
    let mut joiner = Joiner::new([with_step("-")]);
    joiner.write_char('→');
    joiner.write_bytes(b"bytes");
    joiner.write_byte(b'!');
    println!("{}\n", joiner);

    // Example 3: Formatted parts, one per write!
    println!("3. Formatted parts:");
    let mut joiner = Joiner::new([with_joiner("{", ", ", "}")]);
    for (key, value) in [("id", 1), ("count", 42)] {
        let _ = write!(joiner, "{}: {}", key, value);
    }
    println!("{}\n", joiner);

    // Example 4: Reuse after reset
    println!("4. Reset:");
    joiner.reset();
    joiner.write_str("fresh");
    println!("{}\n", joiner);

    // Example 5: Options from JSON, one-shot join
    println!("5. JSON options:");
    match JoinerOptions::from_json(r#"{"prefix": "<", "step": " | ", "suffix": ">"}"#) {
        Ok(options) => println!("{}", join(["one", "two", "three"], &options)),
        Err(e) => eprintln!("{}", e),
    }
}
