//! Daily-route optimization: filter, route, recompose.
//!
//! Given a day's activities, routes the ones with coordinates through the
//! travel matrix and the tour builder, appends the rest untouched, and
//! reports before/after travel statistics.

use rayon::prelude::*;

use crate::matrix::TravelMatrix;
use crate::tour;
use crate::traits::{Activity, Coordinate, TravelMatrixProvider};

/// A routable activity's position: its coordinate plus its index in the
/// caller's original list.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub coordinate: Coordinate,
    pub source_index: usize,
}

/// One hop of the optimized tour, labeled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub duration_minutes: i32,
    /// Rounded to one decimal place.
    pub distance_km: f64,
}

/// Outcome of a single day's optimization. Contains every input activity
/// exactly once, in both orders. Totals are minutes of travel along
/// consecutive hops; `time_saved` is never negative.
#[derive(Debug, Clone)]
pub struct OptimizationResult<A> {
    pub original_order: Vec<A>,
    pub optimized_order: Vec<A>,
    pub original_total_time: i32,
    pub optimized_total_time: i32,
    pub time_saved: i32,
    pub segments: Vec<Segment>,
}

impl<A: Clone> OptimizationResult<A> {
    /// No-op result: nothing to route, order unchanged.
    fn identity(activities: &[A]) -> Self {
        Self {
            original_order: activities.to_vec(),
            optimized_order: activities.to_vec(),
            original_total_time: 0,
            optimized_total_time: 0,
            time_saved: 0,
            segments: Vec::new(),
        }
    }
}

/// The ordered sublist of activities with usable coordinates, keeping
/// their original index for re-assembly. Activities failing the test are
/// never dropped or reordered: they go to the end of the optimized order
/// unchanged.
pub fn routable_locations<A: Activity>(activities: &[A]) -> Vec<Location> {
    activities
        .iter()
        .enumerate()
        .filter_map(|(source_index, activity)| {
            activity
                .coordinate()
                .filter(Coordinate::is_finite)
                .map(|coordinate| Location {
                    coordinate,
                    source_index,
                })
        })
        .collect()
}

/// Reorder one day's activities to minimize total inter-activity travel
/// time. With fewer than two routable activities this is a no-op.
pub fn optimize_day<A, M>(activities: &[A], provider: &M) -> OptimizationResult<A>
where
    A: Activity + Clone,
    M: TravelMatrixProvider,
{
    let located = routable_locations(activities);
    if located.len() < 2 {
        return OptimizationResult::identity(activities);
    }

    tracing::debug!(
        routable = located.len(),
        total = activities.len(),
        "optimizing daily route"
    );

    let coordinates: Vec<Coordinate> = located.iter().map(|l| l.coordinate).collect();
    let matrix = provider.matrix_for(&coordinates);
    if matrix.len() != coordinates.len() {
        tracing::warn!("travel matrix size mismatch, leaving order unchanged");
        return OptimizationResult::identity(activities);
    }

    let identity: Vec<usize> = (0..located.len()).collect();
    let original_s = matrix.tour_duration_s(&identity);

    let mut optimized = tour::build_tour(&matrix);
    let mut optimized_s = matrix.tour_duration_s(&optimized);

    // The nearest-neighbor seed can land in a local optimum above the
    // caller's order; never hand back something worse than the input.
    if optimized_s > original_s {
        optimized = identity;
        optimized_s = original_s;
    }

    let segments = compose_segments(activities, &located, &optimized, &matrix);
    let optimized_order = compose_order(activities, &located, &optimized);

    let original_total_time = round_minutes(original_s);
    let optimized_total_time = round_minutes(optimized_s);

    tracing::debug!(
        original_minutes = original_total_time,
        optimized_minutes = optimized_total_time,
        "daily route optimized"
    );

    OptimizationResult {
        original_order: activities.to_vec(),
        optimized_order,
        original_total_time,
        optimized_total_time,
        time_saved: original_total_time - optimized_total_time,
        segments,
    }
}

/// Optimize several independent days in parallel. Each day's computation
/// is self-contained, so this is a plain data-parallel map.
pub fn optimize_days<A, M>(days: &[Vec<A>], provider: &M) -> Vec<OptimizationResult<A>>
where
    A: Activity + Clone + Send + Sync,
    M: TravelMatrixProvider + Sync,
{
    days.par_iter()
        .map(|activities| optimize_day(activities, provider))
        .collect()
}

fn compose_segments<A: Activity>(
    activities: &[A],
    located: &[Location],
    tour: &[usize],
    matrix: &TravelMatrix,
) -> Vec<Segment> {
    tour.windows(2)
        .map(|hop| {
            let (from, to) = (hop[0], hop[1]);
            Segment {
                from: activities[located[from].source_index].title().to_string(),
                to: activities[located[to].source_index].title().to_string(),
                duration_minutes: round_minutes(matrix.duration_s(from, to)),
                distance_km: (matrix.distance_m(from, to) / 100.0).round() / 10.0,
            }
        })
        .collect()
}

/// Routed activities in tour order, then unrouted activities in their
/// original relative order.
fn compose_order<A: Activity + Clone>(
    activities: &[A],
    located: &[Location],
    tour: &[usize],
) -> Vec<A> {
    let mut routed = vec![false; activities.len()];
    for location in located {
        routed[location.source_index] = true;
    }

    let mut order: Vec<A> = tour
        .iter()
        .map(|&idx| activities[located[idx].source_index].clone())
        .collect();

    order.extend(
        activities
            .iter()
            .zip(&routed)
            .filter(|(_, is_routed)| !**is_routed)
            .map(|(activity, _)| activity.clone()),
    );

    order
}

fn round_minutes(seconds: f64) -> i32 {
    (seconds / 60.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Stop {
        title: String,
        coordinate: Option<Coordinate>,
    }

    impl Activity for Stop {
        fn title(&self) -> &str {
            &self.title
        }

        fn coordinate(&self) -> Option<Coordinate> {
            self.coordinate
        }
    }

    #[test]
    fn filter_keeps_original_indices() {
        let activities = vec![
            Stop {
                title: "a".into(),
                coordinate: None,
            },
            Stop {
                title: "b".into(),
                coordinate: Some(Coordinate::new(1.0, 2.0)),
            },
            Stop {
                title: "c".into(),
                coordinate: Some(Coordinate::new(f64::NAN, 2.0)),
            },
            Stop {
                title: "d".into(),
                coordinate: Some(Coordinate::new(3.0, 4.0)),
            },
        ];

        let located = routable_locations(&activities);
        let indices: Vec<usize> = located.iter().map(|l| l.source_index).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn round_minutes_rounds_to_nearest() {
        assert_eq!(round_minutes(0.0), 0);
        assert_eq!(round_minutes(89.0), 1);
        assert_eq!(round_minutes(91.0), 2);
    }
}
