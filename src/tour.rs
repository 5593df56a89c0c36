//! Tour construction and improvement.
//!
//! Nearest-neighbor builds an initial open tour (no return to start),
//! 2-opt local search improves it. Both work purely on matrix indices.

use crate::matrix::TravelMatrix;

/// Build an optimized open tour over all matrix indices: nearest-neighbor
/// construction followed by 2-opt improvement.
pub fn build_tour(matrix: &TravelMatrix) -> Vec<usize> {
    two_opt(matrix, nearest_neighbor(matrix))
}

/// Greedy construction: start at index 0, repeatedly move to the nearest
/// unvisited index by travel time, ties broken by lowest index.
///
/// Index 0 is always the tour's start; a day's sequence begins at the
/// first routable activity.
pub fn nearest_neighbor(matrix: &TravelMatrix) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut tour = Vec::with_capacity(n);
    tour.push(0);

    let mut current = 0;
    while tour.len() < n {
        let mut nearest: Option<usize> = None;
        let mut nearest_s = f64::INFINITY;

        for next in 0..n {
            // Strict < keeps the lowest index on ties.
            if !visited[next] && matrix.duration_s(current, next) < nearest_s {
                nearest_s = matrix.duration_s(current, next);
                nearest = Some(next);
            }
        }

        let Some(next) = nearest else { break };
        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour
}

/// 2-opt local search: reverse a segment of the tour whenever doing so
/// strictly reduces total travel time, restarting the scan after every
/// accepted swap, until a full pass makes no improvement.
///
/// Each candidate is evaluated by recomputing the whole tour duration.
/// Fine for day-sized tours (single digits to low tens of stops); larger
/// tours would want the O(1) delta over the four affected edges.
pub fn two_opt(matrix: &TravelMatrix, mut tour: Vec<usize>) -> Vec<usize> {
    let n = tour.len();
    if n < 3 {
        return tour;
    }

    let mut best_s = matrix.tour_duration_s(&tour);

    // Terminates: every accepted swap strictly lowers a total bounded by zero.
    'improved: loop {
        for i in 0..n - 1 {
            for j in i + 2..n {
                tour[i + 1..=j].reverse();
                let candidate_s = matrix.tour_duration_s(&tour);
                if candidate_s < best_s {
                    best_s = candidate_s;
                    continue 'improved;
                }
                tour[i + 1..=j].reverse();
            }
        }
        break;
    }

    tour
}
