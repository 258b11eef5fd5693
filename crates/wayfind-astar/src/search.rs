use log::{debug, trace};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::graph::{Edge, Graph};
use crate::hooks::{PossiblePath, Visit, VisitObserver};
use crate::open_set::{OpenSet, RecordId};

/// A successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<N> {
    /// Nodes from start to end, both included.
    pub path: Vec<N>,
    /// Total cost of `path`.
    pub cost: f64,
    /// Number of nodes expanded (popped and asked for their neighbors).
    pub expanded: usize,
}

/// Find the cheapest path from `start` to `end`.
///
/// Shorthand for `AStar::new(graph).find_path(start, end)`.
pub fn find_path<G: Graph>(
    graph: &G,
    start: G::Node,
    end: G::Node,
) -> Result<Vec<G::Node>, SearchError<G::Error>> {
    AStar::new(graph).find_path(start, end)
}

/// A* search driver with optional observation hooks.
///
/// Each call to [`AStar::search`] owns a fresh record table and open set, so
/// one driver can run any number of independent searches. Nodes are never
/// closed for good: a node already expanded is reopened whenever a cheaper
/// route to it turns up.
pub struct AStar<'a, G: Graph> {
    graph: &'a G,
    config: SearchConfig,
    possible_path: Option<&'a mut dyn PossiblePath<G::Node>>,
    visit: Option<&'a mut dyn VisitObserver<G::Node>>,
}

impl<'a, G: Graph> AStar<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            config: SearchConfig::default(),
            possible_path: None,
            visit: None,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Report every goal-reaching route as it is discovered.
    pub fn on_possible_path<P: PossiblePath<G::Node> + 'a>(mut self, hook: &'a mut P) -> Self {
        self.possible_path = Some(hook);
        self
    }

    /// Report every expanded node.
    pub fn on_visit<V: VisitObserver<G::Node> + 'a>(mut self, hook: &'a mut V) -> Self {
        self.visit = Some(hook);
        self
    }

    /// Like [`AStar::search`] but returns only the path.
    pub fn find_path(
        &mut self,
        start: G::Node,
        end: G::Node,
    ) -> Result<Vec<G::Node>, SearchError<G::Error>> {
        self.search(start, end).map(|s| s.path)
    }

    /// Run the search.
    pub fn search(
        &mut self,
        start: G::Node,
        end: G::Node,
    ) -> Result<Solution<G::Node>, SearchError<G::Error>> {
        let graph = self.graph;
        let mut open: OpenSet<G::Node> =
            OpenSet::with_capacity(self.config.record_capacity, self.config.open_capacity);

        let h = graph
            .heuristic_cost(start, end)
            .map_err(SearchError::GraphQueryFailed)?;
        open.discover(start, None, 0.0, h as f32);
        debug!("astar: searching {start:?} -> {end:?}, estimate {h}");

        let mut edges: Vec<Edge<G::Node>> = Vec::with_capacity(8);
        // Cheapest goal-reaching cost seen so far.
        let mut bound = f32::INFINITY;
        let mut expanded = 0usize;

        while let Some(current) = open.pop_min() {
            let rec = open.record(current);
            let (node, g, h, parent) = (rec.node, rec.g, rec.h, rec.parent);

            if node == end {
                let path = open.path_to(current);
                debug!(
                    "astar: found path of {} nodes, cost {g}, {expanded} expanded, {} discovered",
                    path.len(),
                    open.discovered()
                );
                return Ok(Solution {
                    path,
                    cost: f64::from(g),
                    expanded,
                });
            }
            if g >= bound {
                continue;
            }

            let parent_node = parent.map(|p| open.record(p).node);
            if let Some(hook) = self.visit.as_deref_mut() {
                hook.visited(&Visit {
                    node,
                    parent: parent_node,
                    current_cost: f64::from(g),
                    predicted_cost: f64::from(h),
                });
            }
            expanded += 1;

            edges.clear();
            graph
                .neighbors(node, &mut edges)
                .map_err(SearchError::GraphQueryFailed)?;

            for edge in &edges {
                // Only immediate backtracking is skipped; longer cycles are
                // rejected by the cost comparison below.
                if Some(edge.node) == parent_node {
                    continue;
                }
                let cost = g + edge.cost as f32;

                let reached = match open.lookup(edge.node) {
                    None => {
                        let h = graph
                            .heuristic_cost(edge.node, end)
                            .map_err(SearchError::GraphQueryFailed)?;
                        Some(open.discover(edge.node, Some(current), cost, h as f32))
                    }
                    Some(id) if cost < open.record(id).g => {
                        let rec = open.record_mut(id);
                        rec.parent = Some(current);
                        rec.g = cost;
                        if rec.is_open() {
                            open.decrease_key(id);
                        } else {
                            trace!("astar: reopening {:?} at cost {cost}", edge.node);
                            open.insert(id);
                        }
                        Some(id)
                    }
                    Some(_) => {
                        // Alternate route to the goal that is no cheaper than
                        // the best one; only equal-cost routes are reported.
                        if edge.node == end && cost <= bound {
                            if let Some(hook) = self.possible_path.as_deref_mut() {
                                let mut path = open.path_to(current);
                                path.push(end);
                                hook.possible_path(&path, f64::from(cost));
                            }
                        }
                        None
                    }
                };

                if let Some(id) = reached {
                    if edge.node == end {
                        self.goal_reached(&open, id, &mut bound);
                    }
                }
            }
        }

        debug!(
            "astar: no path from {start:?} to {end:?}, {expanded} expanded, {} discovered",
            open.discovered()
        );
        Err(SearchError::Unreachable)
    }

    /// The goal record was just created or improved.
    fn goal_reached(&mut self, open: &OpenSet<G::Node>, id: RecordId, bound: &mut f32) {
        let cost = open.record(id).g;
        trace!("astar: goal reached at cost {cost} ({} open)", open.len());
        if cost < *bound {
            *bound = cost;
        }
        if let Some(hook) = self.possible_path.as_deref_mut() {
            hook.possible_path(&open.path_to(id), f64::from(cost));
        }
    }
}
