//! Deterministic "randomness" for content selection.
//!
//! The hash is djb2 with XOR mixing over UTF-16 code units, kept within
//! 31 bits. It depends only on the input string, never on process state,
//! so a page renders identically on every build and every machine.

use crate::content_selection::domain::PoolAxis;

const DJB2_OFFSET: u32 = 5381;
const POSITIVE_MASK: u32 = 0x7fff_ffff;

/// Stable non-negative hash of `input`
pub fn hash(input: &str) -> u32 {
    input.encode_utf16().fold(DJB2_OFFSET, |h, unit| {
        ((h.wrapping_shl(5).wrapping_add(h)) ^ u32::from(unit)) & POSITIVE_MASK
    })
}

/// Index in `[0, len)` chosen by `seed`, or `None` for an empty pool
pub fn select_index(seed: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(hash(seed) as usize % len)
}

/// Picks one element of `pool` by hashing `seed`
///
/// # Panics
/// Panics if `pool` is empty. `CopyPools` never hands out an empty pool.
pub fn pick<'a, T>(pool: &'a [T], seed: &str) -> &'a T {
    match select_index(seed, pool.len()) {
        Some(index) => &pool[index],
        None => panic!("cannot pick from an empty pool (seed '{}')", seed),
    }
}

/// Base seed of one page: `"<vertical-id>:<pair-slug>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSeed(String);

impl SelectionSeed {
    pub fn new(vertical_id: &str, slug: &str) -> Self {
        Self(format!("{}:{}", vertical_id, slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sub-seed for one content axis, e.g. `"accountants:a-to-b-roi"`
    pub fn for_axis(&self, axis: PoolAxis) -> String {
        format!("{}{}", self.0, axis.seed_tag())
    }
}
