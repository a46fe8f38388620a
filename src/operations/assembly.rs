//! Loop assembly: recovering closed polygons from unordered edge sets.
//!
//! Edges are drawn one at a time and stored flat; nothing records which
//! edge follows which. These routines rebuild that structure by greedy
//! endpoint chaining with a pixel snap tolerance. Failure to close is a
//! normal state while the user is still drawing, so both entry points
//! return empty results rather than errors.

use tracing::warn;

use crate::math::{Point2, ENDPOINT_SNAP_PX};
use crate::model::Edge;

/// Per-axis endpoint match at the assembly snap tolerance.
fn points_close(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < ENDPOINT_SNAP_PX && (a.y - b.y).abs() < ENDPOINT_SNAP_PX
}

/// Counts how many other edges share an endpoint with `edge`.
fn connection_count(edge: &Edge, edges: &[Edge], skip: usize) -> usize {
    let ends = [edge.start(), edge.end()];
    edges
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != skip)
        .filter(|(_, other)| {
            let other_ends = [other.start(), other.end()];
            ends.iter()
                .any(|e| other_ends.iter().any(|o| points_close(e, o)))
        })
        .count()
}

/// Orders an unordered edge set into a closed vertex loop.
///
/// Traces a chain of connected endpoints, starting from an edge with an
/// open end when one exists (so partial inputs fail fast) and from the
/// first edge otherwise. The duplicate closing vertex is dropped.
///
/// Returns an empty vector when the set does not close into a loop of
/// at least 3 vertices — the caller treats that as "no polygon yet".
#[must_use]
pub fn order_edges_into_loop(edges: &[Edge]) -> Vec<Point2> {
    if edges.is_empty() {
        return Vec::new();
    }

    // Prefer a start edge with fewer than 2 connections (an open end);
    // in a well-formed closed loop every edge has 2 and the first wins.
    let start_index = (0..edges.len())
        .find(|&i| connection_count(&edges[i], edges, i) < 2)
        .unwrap_or(0);

    let mut polygon = vec![edges[start_index].start(), edges[start_index].end()];
    let mut current = edges[start_index].end();
    let mut used = vec![false; edges.len()];
    used[start_index] = true;

    // Bounded at 2× the edge count so malformed input cannot spin.
    let max_steps = edges.len() * 2;
    let mut steps = 0;

    while used.iter().filter(|u| **u).count() < edges.len() && steps < max_steps {
        steps += 1;

        let next = edges.iter().enumerate().find_map(|(i, edge)| {
            if used[i] {
                return None;
            }
            if points_close(&edge.start(), &current) {
                Some((i, edge.end()))
            } else if points_close(&edge.end(), &current) {
                Some((i, edge.start()))
            } else {
                None
            }
        });

        let Some((next_index, next_point)) = next else {
            if points_close(&current, &polygon[0]) {
                break; // loop closed with edges left over
            }
            warn!("no connecting edge found; wall set is open or fragmented");
            return Vec::new();
        };

        polygon.push(next_point);
        used[next_index] = true;
        current = next_point;

        if points_close(&current, &polygon[0]) {
            polygon.pop(); // drop the duplicate closing vertex
            break;
        }
    }

    // Consuming every edge is not enough: the last traced point must
    // come back to the start, or the chain is open.
    if polygon.len() < 3 || !points_close(&current, &polygon[0]) {
        warn!("edge chain did not close into a loop");
        return Vec::new();
    }
    polygon
}

/// Groups void edges into one or more closed point loops.
///
/// Void edges may form several disjoint shapes. Each pass picks an
/// unused edge and extends a path (reversing candidate edges where
/// needed) until it closes on its start or runs out of continuations.
/// Unclosed paths release their edges back to the pool and are dropped
/// for this pass; closed paths of at least 3 edges are ordered into
/// vertex loops with [`order_edges_into_loop`].
#[must_use]
pub fn group_void_loops(edges: &[Edge]) -> Vec<Vec<Point2>> {
    let mut loops = Vec::new();
    let mut used = vec![false; edges.len()];

    for seed in 0..edges.len() {
        if used[seed] {
            continue;
        }

        let mut path_edges = vec![edges[seed].clone()];
        let mut path_indices = vec![seed];
        used[seed] = true;

        let path_start = edges[seed].start();
        let mut path_end = edges[seed].end();

        let max_steps = edges.len() * 2;
        let mut steps = 0;
        let mut closed = false;

        while steps < max_steps {
            steps += 1;

            let next = edges.iter().enumerate().find_map(|(i, edge)| {
                if used[i] {
                    return None;
                }
                if points_close(&edge.start(), &path_end) {
                    Some((i, edge.clone()))
                } else if points_close(&edge.end(), &path_end) {
                    Some((i, edge.reversed()))
                } else {
                    None
                }
            });

            match next {
                Some((i, edge)) => {
                    path_end = edge.end();
                    path_edges.push(edge);
                    path_indices.push(i);
                    used[i] = true;
                }
                None => {
                    closed = points_close(&path_end, &path_start);
                    if !closed {
                        warn!(
                            edges = path_edges.len(),
                            "void edge path did not close; releasing its edges"
                        );
                        for &i in &path_indices {
                            used[i] = false;
                        }
                    }
                    break;
                }
            }
        }

        if closed && path_edges.len() >= 3 {
            let ordered = order_edges_into_loop(&path_edges);
            if ordered.len() >= 3 {
                loops.push(ordered);
            }
        } else if closed {
            warn!("closed void path has fewer than 3 edges; discarding");
            for &i in &path_indices {
                used[i] = false;
            }
        }
    }

    loops
}
