use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

use crate::algo;

#[derive(Debug, Error)]
pub enum RsaError {
    #[error("message is not smaller than the modulus")]
    MsgOutOfRange,

    #[error(transparent)]
    Algo(#[from] algo::AlgoError),
}

#[derive(Debug, Error)]
pub enum KeyGenError {
    #[error("primes must be at least 2")]
    PrimeTooSmall,

    #[error("primes must be distinct")]
    EqualPrimes,

    #[error("no exponent below the totient is coprime with it")]
    NoPublicExponent,

    #[error("the public exponent has no inverse below the totient")]
    NoInverse,
}

/// The pair of primes a key is derived from.
///
/// Only structural checks are performed: both values must be at least 2 and
/// distinct. Primality itself is the caller's obligation; feeding in
/// composites breaks the decrypt-of-encrypt identity without any warning.
#[derive(Debug, Clone)]
pub struct PrimePair {
    p: BigUint,
    q: BigUint,
}

impl PrimePair {
    pub fn new(p: impl Into<BigUint>, q: impl Into<BigUint>) -> Result<Self, KeyGenError> {
        let (p, q) = (p.into(), q.into());
        let two = BigUint::from(2u32);
        if p < two || q < two {
            return Err(KeyGenError::PrimeTooSmall);
        }
        if p == q {
            return Err(KeyGenError::EqualPrimes);
        }
        Ok(Self { p, q })
    }
}

/// Rsa public key
pub struct RsaPublic {
    e: BigUint,
    n: BigUint,
}

/// Rsa private key
pub struct RsaPrivate {
    d: BigUint,
    n: BigUint,
}

impl RsaPublic {
    /// Encrypting plaintext that will be decrypted using private key
    pub fn encrypt(&self, msg: &BigUint) -> Result<BigUint, RsaError> {
        if msg >= &self.n {
            return Err(RsaError::MsgOutOfRange);
        }
        Ok(algo::mod_exp(msg, &self.e, &self.n)?)
    }

    /// Get a reference to the rsa public's e.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Get a reference to the rsa public's n.
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl RsaPrivate {
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint, RsaError> {
        if ciphertext >= &self.n {
            return Err(RsaError::MsgOutOfRange);
        }
        Ok(algo::mod_exp(ciphertext, &self.d, &self.n)?)
    }

    /// Get a reference to the rsa private's d.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Get a reference to the rsa private's n.
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl fmt::Display for RsaPublic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

impl fmt::Display for RsaPrivate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d, self.n)
    }
}

/// Derives the key pair belonging to a pair of primes.
///
/// The public exponent is the smallest integer from 2 upward coprime with
/// the totient. The private exponent is found by scanning every candidate
/// below the totient for `(e * d) mod totient == 1`, which costs O(totient)
/// multiplications where the extended Euclidean algorithm ([`algo::invmod`])
/// costs O(log totient); the scan is the method this crate demonstrates and
/// stays affordable only because the keys it deals in are tiny.
pub fn generate_key_pair(primes: &PrimePair) -> Result<(RsaPublic, RsaPrivate), KeyGenError> {
    let n = &primes.p * &primes.q;
    let one = BigUint::one();
    let totient = (&primes.p - &one) * (&primes.q - &one);

    let e = smallest_coprime(&totient).ok_or(KeyGenError::NoPublicExponent)?;
    let d = brute_force_inverse(&e, &totient).ok_or(KeyGenError::NoInverse)?;

    let public = RsaPublic { e, n: n.clone() };
    let private = RsaPrivate { d, n };
    Ok((public, private))
}

/// Smallest integer from 2 upward that is coprime with `totient`.
///
/// `None` only when the scan reaches the totient first, which needs
/// `totient <= 2`: for anything larger, `totient - 1` is coprime with it.
fn smallest_coprime(totient: &BigUint) -> Option<BigUint> {
    let mut e = BigUint::from(2u32);
    while &e < totient {
        if algo::gcd(&e, totient).is_one() {
            return Some(e);
        }
        e += 1u32;
    }
    None
}

/// Linear search for the inverse of `e` modulo `totient`, from 2 upward.
fn brute_force_inverse(e: &BigUint, totient: &BigUint) -> Option<BigUint> {
    let mut d = BigUint::from(2u32);
    while &d < totient {
        if (e * &d % totient).is_one() {
            return Some(d);
        }
        d += 1u32;
    }
    None
}
