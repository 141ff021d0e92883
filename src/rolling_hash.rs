//! Polynomial rolling hash over a fixed-size byte window.
//!
//! The hash of a window `w` is `Σ w[k] * base^(len-1-k) mod modulus`.
//! Sliding the window by one byte is O(1): the outgoing byte's weighted
//! contribution is removed and the incoming byte is folded in.

use crate::error::{DiffError, Result};

pub const DEFAULT_BASE: u64 = 128;
pub const DEFAULT_MODULUS: u64 = 1_000_000_009;
/// Keeps `2 * modulus` representable in the roll step.
const MAX_MODULUS: u64 = 1 << 62;

/// Immutable `(base, modulus)` pair. Both sides of a comparison must hash
/// with the same parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    base: u64,
    modulus: u64,
}

impl HashParams {
    pub fn new(base: u64, modulus: u64) -> Result<Self> {
        if !(2..=MAX_MODULUS).contains(&modulus) || base == 0 || base >= modulus {
            return Err(DiffError::InvalidHashParams { base, modulus });
        }
        Ok(Self { base, modulus })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    #[inline]
    fn mul_mod(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulus as u128) as u64
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RollingHash {
    params: HashParams,
    value: u64,
    /// `base^window mod modulus`, fixed once the window is initialised.
    window_power: u64,
}

impl RollingHash {
    /// Compute the hash of an initial window using Horner's method.
    pub fn init(window: &[u8], params: HashParams) -> Self {
        let mut value = 0u64;
        let mut window_power = 1u64;
        for &byte in window {
            value = (params.mul_mod(value, params.base) + byte as u64) % params.modulus;
            window_power = params.mul_mod(window_power, params.base);
        }
        Self {
            params,
            value,
            window_power,
        }
    }

    /// Slide the window one byte forward. The hasher keeps no copy of the
    /// window, so the caller passes the byte leaving it: `outgoing` was the
    /// first byte of the previous window, `incoming` becomes the last byte
    /// of the new one.
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        let p = &self.params;
        let shifted = p.mul_mod(self.value, p.base);
        let dropped = p.mul_mod(outgoing as u64, self.window_power);
        let value = (shifted + p.modulus - dropped) % p.modulus;
        self.value = (value + incoming as u64) % p.modulus;
    }

    pub fn digest(&self) -> u64 {
        self.value
    }
}
