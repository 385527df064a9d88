use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlgoError {
    #[error("modulus must not be zero")]
    ZeroModulus,
}

/// Computes `base^exponent mod modulus` by iterative square-and-multiply.
///
/// The exponent is consumed bit by bit from the low end: the base is squared
/// at every step and multiplied into the accumulator whenever the current
/// bit is set.
pub fn mod_exp(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, AlgoError> {
    if modulus.is_zero() {
        return Err(AlgoError::ZeroModulus);
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }
    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();
    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = result * &base % modulus;
        }
        base = &base * &base % modulus;
        exponent >>= 1;
    }
    Ok(result)
}

/// Greatest common divisor, computed with the Euclidean remainder loop.
/// Two values are coprime iff this returns 1.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm. Returns `(g, s, t)` such that
/// `a*s + b*t == g` where `g = gcd(a, b)`.
pub fn egcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut r = (a.clone(), b.clone());
    let mut s = (BigInt::one(), BigInt::zero());
    let mut t = (BigInt::zero(), BigInt::one());

    while !r.1.is_zero() {
        let q = &r.0 / &r.1;
        advance(&mut r, &q);
        advance(&mut s, &q);
        advance(&mut t, &q);
    }
    (r.0, s.0, t.0)
}

/// One step of the coefficient recurrence: `(x0, x1) <- (x1, x0 - q*x1)`.
fn advance(pair: &mut (BigInt, BigInt), q: &BigInt) {
    let next = &pair.0 - q * &pair.1;
    pair.0 = std::mem::replace(&mut pair.1, next);
}

/// Multiplicative inverse of `a` modulo `n`, found with [`egcd`].
/// Returns `None` when `a` and `n` are not coprime.
pub fn invmod(a: &BigUint, n: &BigUint) -> Option<BigUint> {
    if n.is_zero() {
        return None;
    }
    let n = BigInt::from(n.clone());
    let (g, s, _) = egcd(&BigInt::from(a.clone()), &n);
    if g.is_one() {
        let inverse = s.mod_floor(&n);
        Some(
            inverse
                .to_biguint()
                .expect("mod_floor by a positive modulus is non-negative"),
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn mod_exp_known_values() {
        assert_eq!(mod_exp(&big(4), &big(13), &big(497)).unwrap(), big(445));
        assert_eq!(mod_exp(&big(2), &big(10), &big(1000)).unwrap(), big(24));
        assert_eq!(mod_exp(&big(7), &big(1), &big(5)).unwrap(), big(2));
    }

    #[test]
    fn mod_exp_zero_exponent_is_one() {
        assert_eq!(mod_exp(&big(123), &big(0), &big(17)).unwrap(), big(1));
        assert_eq!(mod_exp(&big(0), &big(0), &big(17)).unwrap(), big(1));
    }

    #[test]
    fn mod_exp_modulus_one_is_zero() {
        assert_eq!(mod_exp(&big(42), &big(9001), &big(1)).unwrap(), big(0));
    }

    #[test]
    fn mod_exp_rejects_zero_modulus() {
        mod_exp(&big(3), &big(4), &big(0)).unwrap_err();
    }

    #[test]
    fn gcd_with_zero_is_identity() {
        assert_eq!(gcd(&big(42), &big(0)), big(42));
        assert_eq!(gcd(&big(0), &big(42)), big(42));
    }

    #[test]
    fn gcd_remainder_recurrence() {
        let (a, b) = (big(1071), big(462));
        assert_eq!(gcd(&a, &b), big(21));
        assert_eq!(gcd(&a, &b), gcd(&b, &(&a % &b)));
        assert_eq!(gcd(&a, &b), gcd(&b, &a));
    }

    #[test]
    fn egcd_bezout_identity() {
        let (a, b) = (BigInt::from(240), BigInt::from(46));
        let (g, s, t) = egcd(&a, &b);
        assert_eq!(g, BigInt::from(2));
        assert_eq!(&a * s + &b * t, g);
    }

    #[test]
    fn invmod_known_inverses() {
        // 3 * 4 = 12 = 1 (mod 11)
        assert_eq!(invmod(&big(3), &big(11)), Some(big(4)));
        assert_eq!(invmod(&big(7), &big(3120)), Some(big(1783)));
    }

    #[test]
    fn invmod_requires_coprimality() {
        assert_eq!(invmod(&big(6), &big(9)), None);
        assert_eq!(invmod(&big(2), &big(0)), None);
    }
}
