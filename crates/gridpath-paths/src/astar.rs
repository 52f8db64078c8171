use std::collections::BinaryHeap;

use gridpath_core::{Point, TileMap};

use crate::PathFinder;
use crate::pathfinder::NodeRef;
use crate::pather::TilePather;
use crate::traits::AstarPather;

/// Compute the shortest path from `start` to `goal` on a tile map.
///
/// One-shot convenience over [`PathFinder::find_path`] with the standard
/// [`TilePather`]: 8-directional movement, unit step cost, walls
/// impassable. The returned path includes both endpoints; an empty vector
/// means the goal is unreachable.
pub fn find_path(map: &TileMap, start: Point, goal: Point) -> Vec<Point> {
    let mut finder = PathFinder::new(map.width(), map.height());
    finder.find_path(&TilePather::new(map), start, goal)
}

impl PathFinder {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path including both endpoints, or an empty vector
    /// when no path exists or either endpoint lies outside the finder's
    /// grid. `from == to` returns the single-element path immediately.
    pub fn find_path<P: AstarPather>(&mut self, pather: &P, from: Point, to: Point) -> Vec<Point> {
        let Some(start_idx) = self.idx(from) else {
            return Vec::new();
        };
        let Some(goal_idx) = self.idx(to) else {
            return Vec::new();
        };

        if start_idx == goal_idx {
            return vec![from];
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };

            let ci = current.idx;

            // Skip stale entries: leftovers from earlier queries, and cells
            // whose heap entry was superseded by a cheaper rediscovery.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break true;
            }

            self.nodes[ci].open = false;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && tentative_g >= n.g {
                    // Already reached at least as cheaply this query.
                    continue;
                }

                n.generation = cur_gen;
                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("no path {from} -> {to}, {expanded} nodes expanded");
            return Vec::new();
        }

        // Reconstruct by walking parent links back to the root.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        log::debug!(
            "path {from} -> {to}: {} cells, {expanded} nodes expanded",
            path.len()
        );
        path
    }
}
