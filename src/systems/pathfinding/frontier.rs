use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-priority frontier of `(cost, slot)` entries.
///
/// No decrease-key: a node is pushed again whenever its cost improves and
/// the outdated entry is skipped by the caller when it surfaces.
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<(u32, usize)>>,
    pushes: u32,
    peak: u32,
}

impl Frontier {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            pushes: 0,
            peak: 0,
        }
    }

    pub(crate) fn push(&mut self, cost: u32, slot: usize) {
        self.heap.push(Reverse((cost, slot)));
        self.pushes += 1;
        self.peak = self.peak.max(self.heap.len() as u32);
    }

    /// Globally cheapest remaining entry.
    pub(crate) fn pop(&mut self) -> Option<(u32, usize)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    #[inline]
    pub(crate) fn pushes(&self) -> u32 {
        self.pushes
    }

    #[inline]
    pub(crate) fn peak(&self) -> u32 {
        self.peak
    }
}
