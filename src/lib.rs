/// Module dedicated to the modular arithmetic the crate is built on:
/// exponentiation, gcd and modular inverses
pub mod algo;

/// Module dedicated to the rsa keys, their generation and the raw cipher
pub mod rsa;
