//! Deterministic random number generation.
//!
//! RULE: Nothing in the dashboard may call any platform RNG.
//! All randomness flows through PageRng instances derived
//! from the single master seed held by the Dashboard.
//!
//! Each (company, page) pair gets its own RNG stream, seeded from
//! master_seed XOR company hash XOR page slot. This means:
//!   - Re-rendering one page never shifts another page's data.
//!   - Each table is fully reproducible in isolation.

use rand::SeedableRng;
use rand_distr::Distribution;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single generated table.
pub struct PageRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl PageRng {
    /// Create a page RNG from an already-derived seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a u32 in the inclusive range [lo, hi].
    pub fn next_u32_between(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "lo must be <= hi");
        let span = (hi - lo) as u64 + 1;
        lo + self.next_u64_below(span) as u32
    }

    /// Draw one value from any `rand_distr` distribution on this stream.
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.inner)
    }
}

/// Hands out one RNG stream per (company, page slot) for a session.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_table(&self, company: &str, slot: TableSlot) -> PageRng {
        let derived = self.master_seed
            ^ company_hash(company)
            ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        PageRng::from_seed(derived).with_name(slot.name())
    }
}

/// Stable table slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every table's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum TableSlot {
    CurrentMonth = 1,
    FutureChurn = 2,
}

impl TableSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CurrentMonth => "current_month",
            Self::FutureChurn => "future_churn",
        }
    }
}

/// FNV-1a over the company name. Stable across platforms and releases,
/// unlike the std hasher.
fn company_hash(company: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    company
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}
