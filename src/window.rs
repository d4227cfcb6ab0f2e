//! Windowed solving of arbitrarily long point sequences.
//!
//! Every segment is taken from a not-a-knot solve over a window of `2 * buffer + 2` points
//! in which the segment sits as close to the middle as the sequence bounds allow. The
//! `buffer` segments on each side absorb the error of the artificial boundary condition, so
//! memory and work per solve stay constant while the result approaches the spline solved
//! over all points at once.

use log::debug;

use crate::{
    boundary::BoundaryCondition, error::SplineError, point::Point, polynomial::Polynomial,
    system::SplineSystem,
};

/// Buffer half-width used by the random chain demo.
pub const DEFAULT_BUFFER: usize = 4;

pub struct WindowedSolver<'a> {
    points: &'a [Point],
    buffer: usize,
    window_size: usize,
}

impl<'a> WindowedSolver<'a> {
    /// Windows hold `2 * buffer + 2` points, or all of them when the sequence is shorter.
    /// # Errors
    /// [SplineError::TooFewPoints] for less than two points.
    pub fn new(points: &'a [Point], buffer: usize) -> Result<Self, SplineError> {
        if points.len() < 2 {
            return Err(SplineError::TooFewPoints { got: points.len() });
        }

        let window_size = (2 * buffer + 2).min(points.len());
        Ok(WindowedSolver { points, buffer, window_size })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Index of the first point of the window used for `segment`
    /// (segment `s` spans points `s` and `s + 1`).
    pub fn window_start(&self, segment: usize) -> usize {
        segment
            .saturating_sub(self.buffer)
            .min(self.points.len() - self.window_size)
    }

    /// Solves the window of `segment` and keeps only that segment's polynomial.
    /// # Panics
    /// When `segment` is not lower than [WindowedSolver::segment_count].
    pub fn solve_segment(&self, segment: usize) -> Result<Polynomial, SplineError> {
        let start = self.window_start(segment);
        let window = &self.points[start..start + self.window_size];

        debug!(
            "segment {}: solving window of {} points starting at {}",
            segment, self.window_size, start
        );

        let solved = SplineSystem::new(window, BoundaryCondition::NotAKnot)?.solve()?;
        Ok(solved.segment(segment - start))
    }

    /// Polynomials of all segments in order. The first failing window aborts the whole run.
    pub fn solve_all(&self) -> Result<Vec<Polynomial>, SplineError> {
        (0..self.segment_count())
            .map(|segment| self.solve_segment(segment))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{generator::GeneratorConfig, point::points_from_pairs};

    fn sample_points() -> Vec<Point> {
        points_from_pairs(&[(0.0, 2.0), (1.0, 8.0), (4.0, 4.0), (5.0, 4.0), (7.0, 6.0)])
    }

    fn chain(count: usize, seed: u64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        GeneratorConfig::default().with_count(count).generate(&mut rng).unwrap()
    }

    fn max_midpoint_error(points: &[Point], exact: &[Polynomial], approx: &[Polynomial]) -> f64 {
        exact
            .iter()
            .zip(approx.iter())
            .enumerate()
            .map(|(i, (e, a))| {
                let x = 0.5 * (points[i].get_x() + points[i + 1].get_x());
                (e.evaluate(x) - a.evaluate(x)).abs()
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn too_few_points() {
        let points = vec![Point::new(0.0, 0.0)];
        assert!(matches!(
            WindowedSolver::new(&points, 4),
            Err(SplineError::TooFewPoints { got: 1 })
        ));
    }

    #[test]
    fn window_start_is_clamped() {
        let points = chain(20, 1);
        let solver = WindowedSolver::new(&points, 3).unwrap();

        assert_eq!(8, solver.window_size());
        assert_eq!(19, solver.segment_count());
        assert_eq!(0, solver.window_start(0));
        assert_eq!(0, solver.window_start(3));
        assert_eq!(1, solver.window_start(4));
        assert_eq!(7, solver.window_start(10));
        assert_eq!(12, solver.window_start(15));
        assert_eq!(12, solver.window_start(18));

        for segment in 0..solver.segment_count() {
            let start = solver.window_start(segment);
            assert!(start <= segment);
            assert!(segment + 1 < start + solver.window_size());
        }
    }

    #[test]
    fn short_sequence_uses_whole_window() {
        let eps = 1e-9;
        let points = sample_points();
        let solver = WindowedSolver::new(&points, 4).unwrap();

        assert_eq!(5, solver.window_size());

        let windowed = solver.solve_all().unwrap();
        let exact = SplineSystem::new(&points, BoundaryCondition::NotAKnot)
            .unwrap()
            .solve()
            .unwrap()
            .segments();

        assert_eq!(4, windowed.len());
        for (w, e) in windowed.iter().zip(exact.iter()) {
            let w = w.get_coefficients();
            let e = e.get_coefficients();
            for k in 0..4 {
                assert_approx_eq!(w[k], e[k], eps);
            }
        }
    }

    #[test]
    fn long_chain_approaches_full_solve() {
        let points = chain(40, 7);
        let exact = SplineSystem::new(&points, BoundaryCondition::NotAKnot)
            .unwrap()
            .solve()
            .unwrap()
            .segments();

        let windowed = WindowedSolver::new(&points, 8).unwrap().solve_all().unwrap();
        assert_eq!(39, windowed.len());
        assert!(max_midpoint_error(&points, &exact, &windowed) < 1e-3);

        let narrow = WindowedSolver::new(&points, 1).unwrap().solve_all().unwrap();
        assert!(
            max_midpoint_error(&points, &exact, &windowed)
                <= max_midpoint_error(&points, &exact, &narrow)
        );
    }

    #[test]
    fn windowed_chain_interpolates_points() {
        let eps = 1e-6;
        let points = chain(30, 11);
        let segments = WindowedSolver::new(&points, DEFAULT_BUFFER).unwrap().solve_all().unwrap();

        for (i, segment) in segments.iter().enumerate() {
            assert_approx_eq!(segment.evaluate(points[i].get_x()), points[i].get_y(), eps);
            assert_approx_eq!(segment.evaluate(points[i + 1].get_x()), points[i + 1].get_y(), eps);
        }
    }

    #[test]
    fn inconsistent_window_aborts() {
        let points = points_from_pairs(&[(1.0, 0.0), (1.0, 1.0)]);
        let solver = WindowedSolver::new(&points, 4).unwrap();

        assert!(matches!(solver.solve_all(), Err(SplineError::Inconsistent { .. })));
    }
}
