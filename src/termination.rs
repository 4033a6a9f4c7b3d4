use crate::Grid;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hasher};

/// 128-bit digest of a board's interior.
///
/// Covers the dimensions and every interior cell in row-major order, so equal
/// boards always share a fingerprint and distinct boards collide only with
/// negligible probability.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Fingerprint(u128);

impl Fingerprint {
    // fixed keys keep fingerprints comparable across `Grid`s of one run
    const SEEDS_LO: [u64; 4] = [
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    ];
    const SEEDS_HI: [u64; 4] = [
        0x4528_21e6_38d0_1377,
        0xbe54_66cf_34e9_0c6c,
        0xc0ac_29b7_c97c_50dd,
        0x3f84_d5b5_b547_0917,
    ];

    pub fn of(grid: &Grid) -> Self {
        let [a, b, c, d] = Self::SEEDS_LO;
        let mut lo = ahash::RandomState::with_seeds(a, b, c, d).build_hasher();
        let [a, b, c, d] = Self::SEEDS_HI;
        let mut hi = ahash::RandomState::with_seeds(a, b, c, d).build_hasher();

        for h in [&mut lo, &mut hi] {
            h.write_usize(grid.rows());
            h.write_usize(grid.cols());
        }
        // 64 cells per word; rows are not aligned to words, the dimensions
        // written above disambiguate the layout
        let (mut word, mut bits) = (0u64, 0u32);
        for &cell in grid.interior_rows().flatten() {
            word |= (cell as u64) << bits;
            bits += 1;
            if bits == u64::BITS {
                lo.write_u64(word);
                hi.write_u64(word);
                (word, bits) = (0, 0);
            }
        }
        if bits != 0 {
            lo.write_u64(word);
            hi.write_u64(word);
        }
        Self(((hi.finish() as u128) << 64) | lo.finish() as u128)
    }
}

/// Hasher for keys that already are uniformly distributed digests.
#[derive(Default)]
pub struct PassThroughHasher {
    n: u64,
}

impl Hasher for PassThroughHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.n
    }
    #[inline(always)]
    fn write_u128(&mut self, x: u128) {
        self.n = x as u64 ^ (x >> 64) as u64;
    }
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.n = self.n.rotate_left(8) ^ b as u64;
        }
    }
}

pub type PassThroughHasherBuilder = std::hash::BuildHasherDefault<PassThroughHasher>;

/// Every fingerprint observed during a run. Only grows.
#[derive(Default)]
pub struct History {
    seen: HashSet<Fingerprint, PassThroughHasherBuilder>,
}

impl History {
    /// Records `fp`; returns `false` if it was already present.
    pub fn insert(&mut self, fp: Fingerprint) -> bool {
        self.seen.insert(fp)
    }

    pub fn contains(&self, fp: &Fingerprint) -> bool {
        self.seen.contains(fp)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Verdict of [`TerminationDetector::observe`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Observation {
    Continue,
    /// No interior cell is alive.
    Extinct,
    /// The board equals an earlier generation: a still life or an oscillator.
    Repeating,
}

/// Detects extinction and revisited states across one run.
#[derive(Default)]
pub struct TerminationDetector {
    history: History,
}

impl TerminationDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `grid` and, unless the run ends here, records it.
    ///
    /// Must be called once per generation, the initial board included.
    pub fn observe(&mut self, grid: &Grid) -> Observation {
        if grid.is_extinct() {
            return Observation::Extinct;
        }
        if self.history.insert(Fingerprint::of(grid)) {
            Observation::Continue
        } else {
            Observation::Repeating
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
