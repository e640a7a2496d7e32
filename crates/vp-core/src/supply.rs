//! Pre-generated identifier supply.
//!
//! The arrival processes draw ids from a finite supply.  Exhausting the
//! aircraft supply is the normal end of a run, not a failure.

use std::marker::PhantomData;

/// A finite, sequential supply of typed ids `0..count`.
#[derive(Clone, Debug)]
pub struct IdSupply<I> {
    next:  u32,
    count: u32,
    _id:   PhantomData<I>,
}

impl<I: From<u32>> IdSupply<I> {
    pub fn new(count: u32) -> Self {
        Self { next: 0, count, _id: PhantomData }
    }

    /// Take the next id, or `None` once the supply is exhausted.
    pub fn next_id(&mut self) -> Option<I> {
        if self.is_exhausted() {
            return None;
        }
        let id = I::from(self.next);
        self.next += 1;
        Some(id)
    }

    /// How many ids have been handed out so far.
    #[inline]
    pub fn consumed(&self) -> u32 {
        self.next
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.count
    }
}
