use std::error::Error;
use std::io::{self, Write};

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use textbook_rsa::rsa::{generate_key_pair, PrimePair};

/// Primes behind the demo key. Tiny on purpose, so that every derivation
/// step, including the linear exponent searches, finishes instantly.
const DEMO_PRIMES: (u32, u32) = (7919, 1009);

fn main() -> Result<(), Box<dyn Error>> {
    println!("\nRSA Encryption-Decryption");

    let (p, q) = DEMO_PRIMES;
    let primes = PrimePair::new(p, q)?;
    let (public, private) = generate_key_pair(&primes)?;
    println!("Public Key: {}", public);
    println!("Private Key: {}", private);

    println!("\nExample: Integer Encryption");
    let num: BigUint = prompt("Enter a number: ")?.parse()?;
    println!("Original Number: {}", num);
    let encrypted = public.encrypt(&num)?;
    println!("Encrypted Data: {}", encrypted);
    println!("Decrypted Number: {}", private.decrypt(&encrypted)?);

    println!("\nExample: Character Encryption");
    let line = prompt("Enter a character: ")?;
    let ch = line.chars().next().ok_or("no character entered")?;
    println!("Original Character: {}", ch);
    let code = BigUint::from(ch as u32);
    println!("Numeric Equivalent: {}", code);
    let encrypted = public.encrypt(&code)?;
    println!("Encrypted Data: {}", encrypted);
    let decrypted = private.decrypt(&encrypted)?;
    println!("Decrypted Numeric: {}", decrypted);
    let decoded = decrypted
        .to_u32()
        .and_then(char::from_u32)
        .ok_or("decrypted value is not a character")?;
    println!("Decrypted Character: {}", decoded);

    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
