use std::collections::{BinaryHeap, HashMap};

// ---------------------------------------------------------------------------
// Per-node bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
struct Entry {
    g: f64,
    f: f64,
    parent: Option<usize>,
    /// Sequence number of the live heap entry for this node.
    seq: u64,
    open: bool,
}

/// Heap reference ordered by `f`, then by push order.
///
/// Entries whose `seq` no longer matches the node's are stale and skipped
/// when popped.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; among
        // equal f the earliest push wins.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Scores, predecessors and frontier of one search direction.
///
/// Created fresh for every query and dropped with it. Storage is sparse, so
/// memory grows with the number of nodes reached rather than the size of
/// the graph.
#[derive(Debug)]
pub(crate) struct SearchState {
    entries: HashMap<usize, Entry>,
    heap: BinaryHeap<NodeRef>,
    next_seq: u64,
    open_len: usize,
    max_open: usize,
    predecessors: usize,
}

impl SearchState {
    /// Seed a search rooted at `root` whose heuristic value is `h`.
    pub(crate) fn new(root: usize, h: f64) -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            root,
            Entry {
                g: 0.0,
                f: h,
                parent: None,
                seq: 0,
                open: true,
            },
        );
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef {
            idx: root,
            f: h,
            seq: 0,
        });
        Self {
            entries,
            heap,
            next_seq: 1,
            open_len: 1,
            max_open: 1,
            predecessors: 0,
        }
    }

    /// Best known cost from the root, infinite if unreached.
    #[inline]
    pub(crate) fn g(&self, idx: usize) -> f64 {
        self.entries.get(&idx).map_or(f64::INFINITY, |e| e.g)
    }

    #[inline]
    pub(crate) fn parent(&self, idx: usize) -> Option<usize> {
        self.entries.get(&idx).and_then(|e| e.parent)
    }

    #[inline]
    pub(crate) fn has_parent(&self, idx: usize) -> bool {
        self.parent(idx).is_some()
    }

    /// Peak number of open nodes seen so far.
    #[inline]
    pub(crate) fn max_open(&self) -> usize {
        self.max_open
    }

    /// Number of nodes with a recorded predecessor.
    #[inline]
    pub(crate) fn predecessor_count(&self) -> usize {
        self.predecessors
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.open_len == 0
    }

    /// Remove and return the open node with the smallest `f`.
    pub(crate) fn pop_open(&mut self) -> Option<usize> {
        while let Some(r) = self.heap.pop() {
            match self.entries.get_mut(&r.idx) {
                Some(e) if e.open && e.seq == r.seq => {
                    e.open = false;
                    self.open_len -= 1;
                    return Some(r.idx);
                }
                // Stale entry.
                _ => continue,
            }
        }
        None
    }

    /// Smallest `f` among open nodes, discarding stale heap entries.
    pub(crate) fn min_f(&mut self) -> Option<f64> {
        while let Some(&r) = self.heap.peek() {
            if self
                .entries
                .get(&r.idx)
                .is_some_and(|e| e.open && e.seq == r.seq)
            {
                return Some(r.f);
            }
            self.heap.pop();
        }
        None
    }

    /// Record a path reaching `to` via `from` with cost `g` if it is
    /// strictly better than the known one. Returns whether it was.
    pub(crate) fn relax(&mut self, from: usize, to: usize, g: f64, h: f64) -> bool {
        let e = self.entries.entry(to).or_insert(Entry {
            g: f64::INFINITY,
            f: f64::INFINITY,
            parent: None,
            seq: 0,
            open: false,
        });
        if g >= e.g || g.is_nan() {
            return false;
        }

        if e.parent.is_none() {
            self.predecessors += 1;
        }
        e.g = g;
        e.f = g + h;
        e.parent = Some(from);
        e.seq = self.next_seq;
        self.next_seq += 1;

        if !e.open {
            e.open = true;
            self.open_len += 1;
            self.max_open = self.max_open.max(self.open_len);
        }

        self.heap.push(NodeRef {
            idx: to,
            f: e.f,
            seq: e.seq,
        });
        true
    }
}
