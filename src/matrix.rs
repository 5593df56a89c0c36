//! Pairwise travel matrix.

/// Parallel square matrices of travel distance and travel time between
/// every pair of locations in a set.
///
/// Indexed by position within the location list handed to the provider.
/// The diagonal is always zero. API-sourced matrices may be asymmetric
/// (one-way streets); geometric ones are symmetric by construction.
#[derive(Debug, Clone, Default)]
pub struct TravelMatrix {
    distances_m: Vec<Vec<f64>>,
    durations_s: Vec<Vec<f64>>,
}

impl TravelMatrix {
    /// An `n`×`n` matrix with every cell (including the diagonal) at zero.
    pub fn zeroed(n: usize) -> Self {
        Self {
            distances_m: vec![vec![0.0; n]; n],
            durations_s: vec![vec![0.0; n]; n],
        }
    }

    /// Number of locations covered by the matrix.
    pub fn len(&self) -> usize {
        self.durations_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations_s.is_empty()
    }

    /// Travel distance from `from` to `to` in meters.
    pub fn distance_m(&self, from: usize, to: usize) -> f64 {
        self.distances_m[from][to]
    }

    /// Travel time from `from` to `to` in seconds.
    pub fn duration_s(&self, from: usize, to: usize) -> f64 {
        self.durations_s[from][to]
    }

    pub fn set(&mut self, from: usize, to: usize, meters: f64, seconds: f64) {
        self.distances_m[from][to] = meters;
        self.durations_s[from][to] = seconds;
    }

    /// Total travel time in seconds along an open tour (consecutive hops
    /// only, no return to start).
    pub fn tour_duration_s(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|hop| self.duration_s(hop[0], hop[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_has_zero_diagonal() {
        let matrix = TravelMatrix::zeroed(3);
        for i in 0..3 {
            assert_eq!(matrix.duration_s(i, i), 0.0);
            assert_eq!(matrix.distance_m(i, i), 0.0);
        }
    }

    #[test]
    fn tour_duration_sums_consecutive_hops() {
        let mut matrix = TravelMatrix::zeroed(3);
        matrix.set(0, 1, 1000.0, 60.0);
        matrix.set(1, 2, 2000.0, 120.0);
        matrix.set(0, 2, 5000.0, 300.0);

        // Open tour: 0 -> 1 -> 2, no closing hop back to 0.
        assert_eq!(matrix.tour_duration_s(&[0, 1, 2]), 180.0);
    }

    #[test]
    fn tour_duration_trivial_orders() {
        let matrix = TravelMatrix::zeroed(2);
        assert_eq!(matrix.tour_duration_s(&[]), 0.0);
        assert_eq!(matrix.tour_duration_s(&[0]), 0.0);
    }
}
