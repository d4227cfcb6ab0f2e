//! Random chains of points for exercising the windowed solver.
//!
//! Points form a random walk: every point moves right by a random step and up or down by a
//! random step, while y stays inside a global range. The random source is supplied by the
//! caller, so a seeded generator reproduces the same chain.

use std::fmt::Display;

use log::warn;
use rand::Rng;

use crate::{error::SplineError, point::Point};

/// Suspicious generator parameters. They are reported but do not stop generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    InvertedYRange,
    InvertedYStep,
    InvertedXStep,
    /// Chain may step back in x, so the curve may not be a function.
    NonPositiveXStep,
}

impl Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::InvertedYRange => write!(f, "min_y must be less than or equal to max_y"),
            Advisory::InvertedYStep => {
                write!(f, "min_y_step must be less than or equal to max_y_step")
            }
            Advisory::InvertedXStep => {
                write!(f, "min_x_step must be less than or equal to max_x_step")
            }
            Advisory::NonPositiveXStep => write!(
                f,
                "min_x_step is not positive, the generated spline may not be a function"
            ),
        }
    }
}

/// Parameters of the random walk.
///
/// # Example
/// ```
/// use chain_spline::{GeneratorConfig, Point};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let config = GeneratorConfig::default()
///     .with_count(10)
///     .with_start(Point::new(0.0, 0.0))
///     .with_x_step(0.5, 1.0);
/// let points = config.generate(&mut StdRng::seed_from_u64(3)).unwrap();
///
/// assert_eq!(10, points.len());
/// assert!(points.windows(2).all(|w| w[1].get_x() - w[0].get_x() >= 0.5 - 1e-9));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    count: usize,
    start: Point,
    min_y: f64,
    max_y: f64,
    min_y_step: f64,
    max_y_step: f64,
    min_x_step: f64,
    max_x_step: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: 32,
            start: Point::new(0.0, 0.5),
            min_y: -100.0,
            max_y: 100.0,
            min_y_step: -0.4,
            max_y_step: 0.4,
            min_x_step: 0.2,
            max_x_step: 0.4,
        }
    }
}

impl GeneratorConfig {
    /// Total number of points, the start point included.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn with_y_range(mut self, min_y: f64, max_y: f64) -> Self {
        self.min_y = min_y;
        self.max_y = max_y;
        self
    }

    pub fn with_y_step(mut self, min_y_step: f64, max_y_step: f64) -> Self {
        self.min_y_step = min_y_step;
        self.max_y_step = max_y_step;
        self
    }

    pub fn with_x_step(mut self, min_x_step: f64, max_x_step: f64) -> Self {
        self.min_x_step = min_x_step;
        self.max_x_step = max_x_step;
        self
    }

    pub fn get_count(&self) -> usize {
        self.count
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if self.min_y > self.max_y {
            advisories.push(Advisory::InvertedYRange);
        }
        if self.min_y_step > self.max_y_step {
            advisories.push(Advisory::InvertedYStep);
        }
        if self.min_x_step > self.max_x_step {
            advisories.push(Advisory::InvertedXStep);
        }
        if self.min_x_step <= 0.0 {
            advisories.push(Advisory::NonPositiveXStep);
        }
        advisories
    }

    /// Generates the chain. Advisories are logged as warnings and generation goes on.
    /// # Errors
    /// [SplineError::UnsatisfiableRange] when the allowed y interval of some point is empty,
    /// e.g. the start point lies far outside of the y range.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<Point>, SplineError> {
        for advisory in self.advisories() {
            warn!("{}", advisory);
        }

        let mut points = Vec::with_capacity(self.count);
        if self.count == 0 {
            return Ok(points);
        }
        points.push(self.start);

        let mut previous = self.start;
        for index in 1..self.count {
            let low = self.min_y.max(previous.get_y() + self.min_y_step);
            let high = self.max_y.min(previous.get_y() + self.max_y_step);

            if high < low {
                return Err(SplineError::UnsatisfiableRange { index, low, high });
            }

            let x = uniform(
                rng,
                previous.get_x() + self.min_x_step,
                previous.get_x() + self.max_x_step,
            );
            let y = uniform(rng, low, high);

            previous = Point::new(x, y);
            points.push(previous);
        }
        Ok(points)
    }
}

fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.gen::<f64>() * (high - low)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn default_has_no_advisories() {
        assert!(GeneratorConfig::default().advisories().is_empty());
        assert_eq!(32, GeneratorConfig::default().get_count());
    }

    #[test]
    fn same_seed_same_chain() {
        let config = GeneratorConfig::default().with_count(50);

        let first = config.generate(&mut StdRng::seed_from_u64(3)).unwrap();
        let second = config.generate(&mut StdRng::seed_from_u64(3)).unwrap();
        let other = config.generate(&mut StdRng::seed_from_u64(4)).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn steps_respect_limits() {
        let config = GeneratorConfig::default().with_count(200);
        let points = config.generate(&mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(200, points.len());
        assert_eq!(Point::new(0.0, 0.5), points[0]);
        for pair in points.windows(2) {
            let dx = pair[1].get_x() - pair[0].get_x();
            let dy = pair[1].get_y() - pair[0].get_y();
            assert!((0.2 - 1e-12..=0.4 + 1e-12).contains(&dx));
            assert!((-0.4 - 1e-12..=0.4 + 1e-12).contains(&dy));
        }
    }

    #[test]
    fn y_range_is_respected() {
        let config = GeneratorConfig::default()
            .with_count(100)
            .with_start(Point::new(0.0, 0.9))
            .with_y_range(0.0, 1.0)
            .with_y_step(-0.3, 0.3);
        let points = config.generate(&mut StdRng::seed_from_u64(5)).unwrap();

        assert!(points.iter().all(|p| (-1e-12..=1.0 + 1e-12).contains(&p.get_y())));
    }

    #[test]
    fn inverted_parameters_are_reported() {
        let config = GeneratorConfig::default()
            .with_y_range(10.0, -10.0)
            .with_x_step(0.0, -0.5);

        assert_eq!(
            vec![Advisory::InvertedYRange, Advisory::InvertedXStep, Advisory::NonPositiveXStep],
            config.advisories()
        );
        assert_eq!(
            vec![Advisory::InvertedYStep],
            GeneratorConfig::default().with_y_step(1.0, 0.0).advisories()
        );
    }

    #[test]
    fn advisories_do_not_stop_generation() {
        // x may go backwards, which is only worth a warning
        let config = GeneratorConfig::default().with_count(10).with_x_step(-0.1, 0.1);
        let points = config.generate(&mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(vec![Advisory::NonPositiveXStep], config.advisories());
        assert_eq!(10, points.len());
    }

    #[test]
    fn start_outside_of_range_is_unsatisfiable() {
        let config = GeneratorConfig::default().with_start(Point::new(0.0, 500.0));
        let result = config.generate(&mut StdRng::seed_from_u64(1));

        assert!(matches!(result, Err(SplineError::UnsatisfiableRange { index: 1, .. })));
    }

    #[test]
    fn tiny_counts() {
        let mut rng = StdRng::seed_from_u64(0);

        assert!(GeneratorConfig::default().with_count(0).generate(&mut rng).unwrap().is_empty());
        assert_eq!(
            vec![Point::new(0.0, 0.5)],
            GeneratorConfig::default().with_count(1).generate(&mut rng).unwrap()
        );
    }
}
