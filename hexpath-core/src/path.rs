//! Weighted A* search over the hex grid
//!
//! g is the accumulated step cost, h is the hex distance to the goal times
//! the smallest cost any step can have. With no declared minimum h is 0 and
//! the search degrades to Dijkstra, which stays optimal for any
//! non-negative cost function.

use crate::offset::OffsetCoord;
use crate::query::GridQuery;
use crate::tiles::{TileSource, DEFAULT_STEP_COST};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Outcome of one search
#[derive(Clone, Debug, PartialEq)]
pub struct PathSearch {
    /// Cells after `start` up to and including `goal`; empty if unreachable
    pub path: Vec<OffsetCoord>,
    /// Total cost of `path`, `None` when the goal was not reached
    pub cost: Option<f32>,
    /// Number of cells whose neighbors were examined
    pub expanded: usize,
}

impl PathSearch {
    fn unreachable(expanded: usize) -> Self {
        Self { path: Vec::new(), cost: None, expanded }
    }

    pub fn is_found(&self) -> bool {
        self.cost.is_some()
    }
}

/// Frontier entry; ordered so `BinaryHeap` pops the lowest f first
#[derive(Clone, Copy, Debug)]
struct FrontierNode {
    priority: f32,
    // Insertion order, breaks ties first-in first-out
    seq: u64,
    g: f32,
    cell: OffsetCoord,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Shortest-path search bound to one grid query
pub struct PathFinder<'a, T: TileSource + ?Sized> {
    query: GridQuery<'a, T>,
    min_step_cost: f32,
}

impl<'a, T: TileSource + ?Sized> PathFinder<'a, T> {
    pub fn new(query: GridQuery<'a, T>) -> Self {
        Self { query, min_step_cost: 0.0 }
    }

    /// Declare a lower bound on every step cost the cost function returns
    ///
    /// Scales the heuristic. A cost function that returns less than this
    /// bound can make the search return a non-optimal route.
    pub fn with_min_step_cost(mut self, cost: f32) -> Self {
        self.min_step_cost = if cost.is_finite() { cost.max(0.0) } else { 0.0 };
        self
    }

    pub fn min_step_cost(&self) -> f32 {
        self.min_step_cost
    }

    /// Route with a uniform cost of 10 per cell
    pub fn find_path(&self, start: OffsetCoord, goal: OffsetCoord) -> Vec<OffsetCoord> {
        self.run(start, goal, |_| DEFAULT_STEP_COST, DEFAULT_STEP_COST).path
    }

    /// Route where entering a cell costs `cost_fn(cell)`
    pub fn find_path_with<F>(&self, start: OffsetCoord, goal: OffsetCoord, cost_fn: F) -> Vec<OffsetCoord>
    where
        F: Fn(OffsetCoord) -> f32,
    {
        self.search(start, goal, cost_fn).path
    }

    /// Full search result
    ///
    /// `cost_fn` must not change during the search. A negative or
    /// non-finite cost blocks the cell. `start == goal` yields `[goal]`.
    pub fn search<F>(&self, start: OffsetCoord, goal: OffsetCoord, cost_fn: F) -> PathSearch
    where
        F: Fn(OffsetCoord) -> f32,
    {
        self.run(start, goal, cost_fn, self.min_step_cost)
    }

    fn run<F>(&self, start: OffsetCoord, goal: OffsetCoord, cost_fn: F, h_scale: f32) -> PathSearch
    where
        F: Fn(OffsetCoord) -> f32,
    {
        if !self.query.has_tile(start) {
            tracing::debug!(%start, %goal, "start has no tile");
            return PathSearch::unreachable(0);
        }
        if start == goal {
            return PathSearch { path: vec![goal], cost: Some(0.0), expanded: 0 };
        }
        if self.query.is_impassable(goal) {
            tracing::debug!(%start, %goal, "goal is impassable");
            return PathSearch::unreachable(0);
        }

        let mut frontier = BinaryHeap::new();
        let mut came_from: FxHashMap<OffsetCoord, OffsetCoord> = FxHashMap::default();
        let mut cost_so_far: FxHashMap<OffsetCoord, f32> = FxHashMap::default();
        let mut seq = 0u64;
        let mut expanded = 0usize;

        cost_so_far.insert(start, 0.0);
        frontier.push(FrontierNode { priority: 0.0, seq, g: 0.0, cell: start });

        while let Some(FrontierNode { g, cell: current, .. }) = frontier.pop() {
            if current == goal {
                break;
            }
            // Superseded by a cheaper entry pushed later
            if cost_so_far.get(&current).is_some_and(|&best| g > best) {
                continue;
            }
            expanded += 1;

            for next in current.neighbors() {
                if self.query.is_impassable(next) {
                    continue;
                }
                let step = cost_fn(next);
                // Negative steps could cycle forever
                if !step.is_finite() || step < 0.0 {
                    continue;
                }
                let new_cost = g + step;
                if cost_so_far.get(&next).map_or(true, |&old| new_cost < old) {
                    cost_so_far.insert(next, new_cost);
                    came_from.insert(next, current);
                    seq += 1;
                    let h = self.query.offset_distance(next, goal) as f32 * h_scale;
                    let priority = new_cost + h;
                    frontier.push(FrontierNode { priority, seq, g: new_cost, cell: next });
                }
            }
        }

        let Some(path) = reconstruct(&came_from, start, goal) else {
            tracing::debug!(%start, %goal, expanded, "goal unreachable");
            return PathSearch::unreachable(expanded);
        };
        let cost = cost_so_far.get(&goal).copied();
        tracing::debug!(%start, %goal, expanded, len = path.len(), "path found");
        PathSearch { path, cost, expanded }
    }
}

/// Walk `came_from` back from `goal`, excluding `start`
fn reconstruct(
    came_from: &FxHashMap<OffsetCoord, OffsetCoord>,
    start: OffsetCoord,
    goal: OffsetCoord,
) -> Option<Vec<OffsetCoord>> {
    let mut path = Vec::new();
    let mut last = goal;
    while last != start {
        path.push(last);
        last = *came_from.get(&last)?;
    }
    path.reverse();
    Some(path)
}
