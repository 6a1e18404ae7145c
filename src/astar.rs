//! Best-first search core. A variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! reworked around a reusable search context with an expansion budget, a
//! closed-set trace for visualization, and a documented tie-break: among
//! open entries with equal estimated cost, the most recently inserted one
//! is expanded first.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Per-cell scratch record, living in the arena for one search. The parent
/// is an index into the arena, `usize::MAX` for the start.
struct Record<C> {
    parent: usize,
    cost: C,
    closed: bool,
}

/// Open-set entry. Entries are never updated in place: improvements push a
/// fresh entry with a fresh serial and the stale one is discarded on pop.
struct OpenEntry<C> {
    estimated_cost: C,
    cost: C,
    serial: u64,
    index: usize,
}

impl<C: PartialOrd> PartialEq for OpenEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.serial == other.serial
    }
}

impl<C: PartialOrd> Eq for OpenEntry<C> {}

impl<C: PartialOrd> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PartialOrd> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest estimated cost; equal
        // estimates are won by the larger (more recent) serial. Costs are
        // finite sums of step costs, so the incomparable case cannot arise
        // from valid inputs and falls through to the serial.
        match other.estimated_cost.partial_cmp(&self.estimated_cost) {
            Some(Ordering::Equal) | None => self.serial.cmp(&other.serial),
            Some(ordering) => ordering,
        }
    }
}

/// Reusable open/closed state for one search at a time, cleared at the start
/// of every call.
pub(crate) struct SearchContext<N, C> {
    arena: FxIndexMap<N, Record<C>>,
    open: BinaryHeap<OpenEntry<C>>,
    closed_order: Vec<N>,
    serial: u64,
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + PartialOrd + Copy,
{
    pub(crate) fn new() -> SearchContext<N, C> {
        SearchContext {
            arena: FxIndexMap::default(),
            open: BinaryHeap::new(),
            closed_order: Vec::new(),
            serial: 0,
        }
    }

    /// Cells expanded by the most recent search, in expansion order.
    pub(crate) fn closed_cells(&self) -> &[N] {
        &self.closed_order
    }

    /// Discards all state of the previous search.
    pub(crate) fn reset(&mut self) {
        self.arena.clear();
        self.open.clear();
        self.closed_order.clear();
        self.serial = 0;
    }

    /// Runs a best-first search from `start` until `success` holds for an
    /// expanded node, the open set empties, or `budget` expansions have been
    /// made. `successors` receives the node and a closed-set probe so the
    /// generator can skip settled cells. Returns the path (start excluded)
    /// and its cost, or [None].
    pub(crate) fn search<FN, IN, FH, FS>(
        &mut self,
        start: N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
        budget: usize,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N, &dyn Fn(&N) -> bool) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.reset();
        self.arena.insert(
            start,
            Record {
                parent: usize::MAX,
                cost: Zero::zero(),
                closed: false,
            },
        );
        self.open.push(OpenEntry {
            estimated_cost: Zero::zero(),
            cost: Zero::zero(),
            serial: 0,
            index: 0,
        });

        let mut expansions: usize = 0;
        loop {
            if expansions >= budget {
                warn!(
                    "Search budget of {} expansions exhausted before reaching the goal",
                    budget
                );
                return None;
            }
            let OpenEntry { cost, index, .. } = match self.open.pop() {
                Some(entry) => entry,
                None => break,
            };
            {
                // We may have pushed several entries for a node if we kept
                // finding better ways to reach it. Only the entry matching
                // the recorded cost is live; the others are stale.
                let (_, record) = self.arena.get_index(index).unwrap();
                if cost > record.cost {
                    continue;
                }
            }
            let (node, record) = self.arena.get_index_mut(index).unwrap();
            let node = node.clone();
            record.closed = true;
            self.closed_order.push(node.clone());
            expansions += 1;
            if success(&node) {
                return Some((self.reconstruct(index), cost));
            }
            let succ = {
                let arena = &self.arena;
                let is_closed = |n: &N| arena.get(n).map_or(false, |record| record.closed);
                successors(&node, &is_closed)
            };
            for (successor, move_cost) in succ {
                let new_cost = cost + move_cost;
                let h;
                let n;
                match self.arena.entry(successor) {
                    Vacant(e) => {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert(Record {
                            parent: index,
                            cost: new_cost,
                            closed: false,
                        });
                    }
                    Occupied(mut e) => {
                        if e.get().cost > new_cost {
                            h = heuristic(e.key());
                            n = e.index();
                            e.insert(Record {
                                parent: index,
                                cost: new_cost,
                                closed: false,
                            });
                        } else {
                            continue;
                        }
                    }
                }
                self.serial += 1;
                self.open.push(OpenEntry {
                    estimated_cost: new_cost + h,
                    cost: new_cost,
                    serial: self.serial,
                    index: n,
                });
            }
        }
        debug!("Open set exhausted without reaching the goal");
        None
    }

    /// Walks parent indices back from `index`, producing the path in
    /// start-to-goal order with the start itself dropped, which also makes
    /// a start-is-goal search come out empty.
    fn reconstruct(&self, index: usize) -> Vec<N> {
        let mut path: Vec<N> = itertools::unfold(index, |i| {
            self.arena.get_index(*i).map(|(node, record)| {
                *i = record.parent;
                node.clone()
            })
        })
        .collect();
        path.pop();
        path.reverse();
        path
    }
}
