use core::{fmt::Debug, iter::FusedIterator};

use arrayvec::ArrayVec;

use crate::common::{macros::{assert_arg, debug_assert_arg, trace}, DebugHex};

mod strategy;

pub use strategy::Strategy;

/// Forward-only cursor producing bytes realigned to a destination bit offset.
///
/// The store is borrowed, never copied. Each fetch consumes exactly one
/// source byte, so the number of fetches a store supports is fixed at
/// [`PhaseAligner::start`] and reported by [`PhaseAligner::remaining`].
#[derive(Clone)]
pub struct PhaseAligner<'a> {
    store: &'a [u8],
    cursor: usize,
    shift: u8,
    carry: u8,
    strategy: Strategy,
}

impl<'a> PhaseAligner<'a> {
    /// Starts a stream whose first output bit at `dest_bit & 7` is the store
    /// bit at `source_bit`.
    ///
    /// Never fails. A store too short for even one fetch yields an empty
    /// stream.
    #[must_use]
    pub fn start(dest_bit: usize, source_bit: usize, store: &'a [u8]) -> Self {
        let cursor = source_bit >> 3;
        let (strategy, shift) = Strategy::select(dest_bit, source_bit);
        // Left shifts pre-read the starting byte, the first fetch takes the next one
        let carry = match strategy {
            Strategy::LeftShift => store.get(cursor).copied().unwrap_or_default(),
            Strategy::NoShift | Strategy::RightShift => 0,
        };

        trace!(
            "phase align start - dest: {}, source: {}, strategy: {:?}, shift: {}, cursor: {}, len: {}",
            dest_bit,
            source_bit,
            strategy,
            shift,
            cursor,
            store.len()
        );

        Self { store, cursor, shift, carry, strategy }
    }

    /// Reinitializes over the same store.
    pub fn restart(&mut self, dest_bit: usize, source_bit: usize) {
        *self = Self::start(dest_bit, source_bit, self.store);
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Misalignment in bits, `0..=7`.
    #[must_use]
    pub fn shift(&self) -> u8 {
        self.shift
    }

    #[must_use]
    pub fn carry(&self) -> u8 {
        self.carry
    }

    /// Index of the store byte under the cursor.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of fetches the store still supports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        let next = match self.strategy {
            Strategy::LeftShift => self.cursor + 1,
            Strategy::NoShift | Strategy::RightShift => self.cursor,
        };
        self.store.len().saturating_sub(next)
    }

    /// Next realigned byte.
    ///
    /// Panics when the store is exhausted, see [`PhaseAligner::try_fetch`].
    pub fn fetch(&mut self) -> u8 {
        assert_arg!(store, self.remaining() > 0, "Phase aligner fetched past the end of the store");

        unsafe {
            self.fetch_unchecked()
        }
    }

    /// Next realigned byte, or `None` once the store is exhausted.
    /// The aligner is left untouched in that case.
    pub fn try_fetch(&mut self) -> Option<u8> {
        if self.remaining() > 0 {
            Some(unsafe { self.fetch_unchecked() })
        } else {
            None
        }
    }

    /// # Safety
    /// [`PhaseAligner::remaining`] must be nonzero
    pub unsafe fn fetch_unchecked(&mut self) -> u8 {
        debug_assert_arg!(store, self.remaining() > 0, "Phase aligner fetched past the end of the store");

        match self.strategy {
            Strategy::NoShift => {
                let byte = unsafe { *self.store.get_unchecked(self.cursor) };
                self.cursor += 1;
                byte
            },
            Strategy::LeftShift => {
                self.cursor += 1;
                let lo = unsafe { *self.store.get_unchecked(self.cursor) };
                self.recombine(lo)
            },
            Strategy::RightShift => {
                let lo = unsafe { *self.store.get_unchecked(self.cursor) };
                self.cursor += 1;
                self.recombine(lo)
            },
        }
    }

    #[inline]
    fn recombine(&mut self, lo: u8) -> u8 {
        let hi = core::mem::replace(&mut self.carry, lo);
        self.strategy.combine(self.shift, hi, lo)
    }

    /// Emits the carried bits as if the next store byte were zero and ends
    /// the stream.
    ///
    /// Lets a caller pick up the tail of a field that ends inside the last
    /// store byte, which a left shift would otherwise need one more byte for.
    pub fn flush(&mut self) -> u8 {
        let byte = if self.strategy.carries() {
            self.strategy.combine(self.shift, self.carry, 0)
        } else {
            0
        };
        self.carry = 0;
        self.cursor = self.store.len();
        byte
    }

    /// Fetches `out.len()` bytes.
    pub fn fill(&mut self, out: &mut [u8]) {
        assert_arg!(out, out.len() <= self.remaining(), "Phase aligner fetched past the end of the store");

        for byte in out.iter_mut() {
            *byte = unsafe { self.fetch_unchecked() };
        }
    }

    #[must_use]
    pub fn fetch_array<const N: usize>(&mut self) -> [u8; N] {
        let mut bytes = [0; N];
        self.fill(&mut bytes);
        bytes
    }

    pub fn try_fetch_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        if self.remaining() >= N {
            Some(self.fetch_array())
        } else {
            None
        }
    }

    /// Up to `len` bytes, cut short by the capacity `N` or the end of the store.
    pub fn fetch_run<const N: usize>(&mut self, len: usize) -> ArrayVec<u8, N> {
        self.by_ref().take(len.min(N)).collect()
    }
}

impl<'a> Iterator for PhaseAligner<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_fetch()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for PhaseAligner<'a> {}

impl<'a> FusedIterator for PhaseAligner<'a> {}

impl<'a> Debug for PhaseAligner<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PhaseAligner")
            .field("strategy", &self.strategy)
            .field("shift", &self.shift)
            .field("carry", &DebugHex::new(self.carry))
            .field("cursor", &self.cursor)
            .field("len", &self.store.len())
            .finish()
    }
}
