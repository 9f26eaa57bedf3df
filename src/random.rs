//! Random sources consumed by the wall placer.
//!
//! The placer only ever asks for one `u32` at a time through
//! [`RandomSource`]. Any `rand::RngCore` qualifies, so the entropy-backed
//! variant is simply `rand::rngs::OsRng` (or `rand::thread_rng()`), while the
//! reproducible variant is [`Pcg32`], seeded either explicitly or from the
//! build timestamp.

use rand::RngCore;

/// Build time recorded by `build.rs` as `HH:MM:SS`.
pub const BUILD_TIME: &str = env!("MAZEGEN_BUILD_TIME");

/// Seed derived from [`BUILD_TIME`] at compile time.
pub const COMPILE_TIME_SEED: u64 = fold_seed(BUILD_TIME.as_bytes());

/// Number of outputs discarded after constructing a [`Pcg32`].
pub const WARM_UP_STEPS: usize = 30;

const PCG_MULTIPLIER: u64 = 6364136223846793005;

/// Folds ASCII bytes into a 64-bit seed with `seed = (seed << 8) | byte`.
/// Only the last eight bytes survive the shifts.
pub const fn fold_seed(bytes: &[u8]) -> u64 {
    let mut shifted: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        shifted <<= 8;
        shifted |= bytes[i] as u64;
        i += 1;
    }
    shifted
}

/// A supplier of unsigned 32-bit values.
pub trait RandomSource {
    fn next_random(&mut self) -> u32;

    /// Index into a non-empty collection of `len` items, as `random % len`.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.next_random() as usize % len
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_random(&mut self) -> u32 {
        self.next_u32()
    }
}

/// PCG32 (XSH RR). The state starts at zero and the seed is used as the
/// stream increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    /// Seeds a generator and discards its first [`WARM_UP_STEPS`] outputs.
    pub fn new(seed: u64) -> Self {
        let mut pcg = Self::unwarmed(seed);
        for _ in 0..WARM_UP_STEPS {
            pcg.step();
        }
        pcg
    }

    /// A generator seeded from the build timestamp.
    pub fn compile_time() -> Self {
        Self::new(COMPILE_TIME_SEED)
    }

    pub(crate) fn unwarmed(seed: u64) -> Self {
        Self {
            state: 0,
            inc: seed,
        }
    }

    fn step(&mut self) -> u32 {
        let old = self.state;
        self.state = old
            .wrapping_mul(PCG_MULTIPLIER)
            .wrapping_add(self.inc | 1);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.step() as u64;
        let hi = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
