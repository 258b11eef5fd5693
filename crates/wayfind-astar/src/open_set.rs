//! Index-tracking binary heap over per-node search records.
//!
//! Records live in an arena and never move; the heap stores record ids and
//! every record remembers its current heap slot, so a record whose `g` was
//! lowered in place can be re-sifted directly instead of being removed and
//! pushed again.

use std::hash::Hash;

use fxhash::FxHashMap;

/// Position of a record in the arena.
pub(crate) type RecordId = usize;

/// Search bookkeeping for one discovered node.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord<N> {
    pub(crate) node: N,
    /// Record this node was reached from on the best known path.
    pub(crate) parent: Option<RecordId>,
    /// Cost from the start along the best known path.
    pub(crate) g: f32,
    /// Heuristic estimate to the goal, fixed at discovery.
    pub(crate) h: f32,
    /// Slot in the heap, `None` while the node is not open.
    pub(crate) heap_index: Option<usize>,
}

impl<N> NodeRecord<N> {
    #[inline]
    pub(crate) fn f(&self) -> f32 {
        self.g + self.h
    }

    #[inline]
    pub(crate) fn is_open(&self) -> bool {
        self.heap_index.is_some()
    }
}

/// The open set plus the node record table it indexes into.
pub(crate) struct OpenSet<N> {
    records: Vec<NodeRecord<N>>,
    lookup: FxHashMap<N, RecordId>,
    heap: Vec<RecordId>,
}

impl<N: Copy + Eq + Hash> OpenSet<N> {
    pub(crate) fn with_capacity(records: usize, open: usize) -> Self {
        Self {
            records: Vec::with_capacity(records),
            lookup: FxHashMap::with_capacity_and_hasher(records, Default::default()),
            heap: Vec::with_capacity(open),
        }
    }

    /// Number of records currently open.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Number of nodes discovered so far.
    #[inline]
    pub(crate) fn discovered(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub(crate) fn lookup(&self, node: N) -> Option<RecordId> {
        self.lookup.get(&node).copied()
    }

    #[inline]
    pub(crate) fn record(&self, id: RecordId) -> &NodeRecord<N> {
        &self.records[id]
    }

    #[inline]
    pub(crate) fn record_mut(&mut self, id: RecordId) -> &mut NodeRecord<N> {
        &mut self.records[id]
    }

    /// Create the record for a newly discovered node and open it.
    ///
    /// The node must not have a record yet.
    pub(crate) fn discover(
        &mut self,
        node: N,
        parent: Option<RecordId>,
        g: f32,
        h: f32,
    ) -> RecordId {
        debug_assert!(!self.lookup.contains_key(&node));
        let id = self.records.len();
        self.records.push(NodeRecord {
            node,
            parent,
            g,
            h,
            heap_index: None,
        });
        self.lookup.insert(node, id);
        self.insert(id);
        id
    }

    /// Open a record that is not currently in the heap.
    pub(crate) fn insert(&mut self, id: RecordId) {
        debug_assert!(!self.records[id].is_open());
        let i = self.heap.len();
        self.heap.push(id);
        self.records[id].heap_index = Some(i);
        self.sift_up(i);
    }

    /// Remove and return the open record with the smallest `f`.
    pub(crate) fn pop_min(&mut self) -> Option<RecordId> {
        let n = self.heap.len().checked_sub(1)?;
        self.swap(0, n);
        self.sift_down(0, n);
        let id = self.heap.pop()?;
        self.records[id].heap_index = None;
        Some(id)
    }

    /// Restore heap order after the record's `g` was lowered in place.
    pub(crate) fn decrease_key(&mut self, id: RecordId) {
        let Some(i) = self.records[id].heap_index else {
            debug_assert!(false, "decrease_key on a record that is not open");
            return;
        };
        let n = self.heap.len();
        self.sift_down(i, n);
        self.sift_up(i);
    }

    /// Nodes from the start to `id`, following parent links.
    pub(crate) fn path_to(&self, id: RecordId) -> Vec<N> {
        let mut path = Vec::with_capacity(128);
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let rec = &self.records[ci];
            path.push(rec.node);
            cur = rec.parent;
        }
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Heap internals
    // -----------------------------------------------------------------------

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.records[self.heap[i]].f() < self.records[self.heap[j]].f()
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.records[self.heap[i]].heap_index = Some(i);
        self.records[self.heap[j]].heap_index = Some(j);
    }

    fn sift_up(&mut self, mut j: usize) {
        while j > 0 {
            let i = (j - 1) / 2;
            if !self.less(j, i) {
                break;
            }
            self.swap(i, j);
            j = i;
        }
    }

    /// Sift within the first `n` slots. Ties between children go right.
    fn sift_down(&mut self, mut i: usize, n: usize) {
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut j = left;
            let right = left + 1;
            if right < n && !self.less(left, right) {
                j = right;
            }
            if !self.less(j, i) {
                break;
            }
            self.swap(i, j);
            i = j;
        }
    }
}
