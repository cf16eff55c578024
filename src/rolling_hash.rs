//! Polynomial rolling hash over a fixed length window.
//!
//! The hash of a window `w` of length `m` is `Σ w[i]·BASE^(m-1-i) mod prime`.
//! All arithmetic stays in `[0, prime)`: products are reduced in 128 bit and a subtraction adds the
//! modulus back before reducing, so no intermediate value is ever negative or overflows,
//! independent of how the host integer type treats remainders.

use std::num::NonZeroU64;

/// Radix of the polynomial, one digit per byte value.
pub const BASE: u64 = 256;

/// Prime used by [`crate::KarpRabin`] unless another one is given.
pub const DEFAULT_PRIME: NonZeroU64 = match NonZeroU64::new(101) {
  Some(prime) => prime,
  None => unreachable!(),
};

fn mul_mod(a: u64, b: u64, prime: NonZeroU64) -> u64 {
  ((a as u128 * b as u128) % prime.get() as u128) as u64
}

fn add_mod(a: u64, b: u64, prime: NonZeroU64) -> u64 {
  ((a as u128 + b as u128) % prime.get() as u128) as u64
}

// a and b are already reduced
fn sub_mod(a: u64, b: u64, prime: NonZeroU64) -> u64 {
  if a >= b {
    a - b
  } else {
    // add the modulus back instead of going negative
    a + (prime.get() - b)
  }
}

// BASE^exponent mod prime, by squaring
pub fn pow_mod(exponent: usize, prime: NonZeroU64) -> u64 {
  let mut result = 1 % prime.get();
  let mut base = BASE % prime.get();
  let mut exponent = exponent;
  while exponent > 0 {
    if exponent & 1 == 1 {
      result = mul_mod(result, base, prime);
    }
    base = mul_mod(base, base, prime);
    exponent >>= 1;
  }
  result
}

/// Hashes the whole window with Horner's rule, `h = (h·BASE + byte) mod prime`.
pub fn hash(window: &[u8], prime: NonZeroU64) -> u64 {
  window
    .iter()
    .fold(0, |h, &byte| add_mod(mul_mod(h, BASE, prime), byte as u64, prime))
}

/// Slides a window of length `len` by one position: `old` leaves at the front, `new` enters at the back.
///
/// Recomputes `BASE^(len-1)` on every call; use [`RollingHash`] to keep it around.
pub fn rehash(previous: u64, old: u8, new: u8, len: usize, prime: NonZeroU64) -> u64 {
  let high = pow_mod(len.saturating_sub(1), prime);
  roll(previous % prime.get(), old, new, high, prime)
}

fn roll(previous: u64, old: u8, new: u8, high: u64, prime: NonZeroU64) -> u64 {
  let without_old = sub_mod(previous, mul_mod(old as u64, high, prime), prime);
  add_mod(mul_mod(without_old, BASE, prime), new as u64, prime)
}

/// Hash of a window that advances one byte at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollingHash {
  value: u64,
  /// BASE^(len-1) mod prime, the weight of the leading byte
  high: u64,
  len: usize,
  prime: NonZeroU64,
}

impl RollingHash {
  pub fn new(window: &[u8], prime: NonZeroU64) -> Self {
    Self {
      value: hash(window, prime),
      high: pow_mod(window.len().saturating_sub(1), prime),
      len: window.len(),
      prime,
    }
  }

  pub fn value(&self) -> u64 {
    self.value
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  // runtime O(1)
  pub fn roll(&mut self, old: u8, new: u8) {
    self.value = roll(self.value, old, new, self.high, self.prime);
  }
}
