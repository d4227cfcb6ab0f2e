use std::{fs::File, io::{BufWriter, Write}, path::Path};

use crate::{
    boundary::BoundaryCondition, error::SplineError, point::Point, polynomial::Polynomial,
    system::SplineSystem, window::WindowedSolver,
};

/// Cubic spline passing through a sequence of points with increasing x.
/// Segment `i` spans points `i` and `i + 1`.
pub struct Spline {
    points: Vec<Point>,
    polynomials: Vec<Polynomial>,
    boundary: Option<BoundaryCondition>,
    min_x: f64,
    max_x: f64,
    last_interval_cache: usize,
}

impl Spline {
    /// Solves one system over all `points`, closed by `boundary`.
    /// # Errors
    /// [SplineError::TooFewPoints] for less than two points, [SplineError::Inconsistent] when
    /// the system has no solution (repeated or decreasing x).
    pub fn new(points: Vec<Point>, boundary: BoundaryCondition) -> Result<Self, SplineError> {
        let polynomials = SplineSystem::new(&points, boundary)?.solve()?.segments();
        Ok(Spline::from_parts(points, polynomials, Some(boundary)))
    }

    /// Builds the spline from windows of `2 * buffer + 2` points, keeping from each not-a-knot
    /// solve only the segment in its middle. Memory per solve does not depend on the number
    /// of points.
    ///
    /// # Example
    /// ```
    /// use chain_spline::{BoundaryCondition, Point, Spline};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let points = vec![
    ///     Point::new(0.0, 2.0),
    ///     Point::new(1.0, 8.0),
    ///     Point::new(4.0, 4.0),
    ///     Point::new(5.0, 4.0),
    ///     Point::new(7.0, 6.0),
    /// ];
    /// let windowed = Spline::windowed(points.clone(), 4).unwrap();
    /// let exact = Spline::new(points, BoundaryCondition::NotAKnot).unwrap();
    ///
    /// assert_approx_eq!(exact.interpolate(2.5).unwrap(), windowed.interpolate(2.5).unwrap(), 1e-9);
    /// ```
    /// # Errors
    /// The first window failing to solve aborts the whole spline.
    pub fn windowed(points: Vec<Point>, buffer: usize) -> Result<Self, SplineError> {
        let polynomials = WindowedSolver::new(&points, buffer)?.solve_all()?;
        Ok(Spline::from_parts(points, polynomials, None))
    }

    fn from_parts(
        points: Vec<Point>,
        polynomials: Vec<Polynomial>,
        boundary: Option<BoundaryCondition>,
    ) -> Self {
        let min_x = points[0].get_x();
        let max_x = points[points.len() - 1].get_x();
        Spline {
            points,
            polynomials,
            boundary,
            min_x,
            max_x,
            last_interval_cache: 0,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn segments(&self) -> &[Polynomial] {
        &self.polynomials
    }

    /// Boundary condition of an exact solve, `None` for a windowed spline.
    pub fn boundary(&self) -> Option<BoundaryCondition> {
        self.boundary
    }

    pub fn interpolate(&self, x: f64) -> Result<f64, SplineError> {
        self.check_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.polynomials[index].evaluate(x))
    }

    pub fn cached_interpolate(&mut self, x: f64) -> Result<f64, SplineError> {
        self.check_range(x)?;
        let index = self.find_interval_index_with_cache(x);
        Ok(self.polynomials[index].evaluate(x))
    }

    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            self.check_range(*x)?;
            index = self.find_interval_index_with_hint(index, *x);
            results.push(self.polynomials[index].evaluate(*x));
        }
        Ok(results)
    }

    pub fn extrapolate(&self, x: f64) -> f64 {
        match self.evaluate_on_boundaries(x) {
            Some(result) => result,
            None => {
                let index = self.find_interval_index(x);
                self.polynomials[index].evaluate(x)
            }
        }
    }

    pub fn batch_extrapolate(&self, x_vector: &[f64]) -> Vec<f64> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            match self.evaluate_on_boundaries(*x) {
                Some(result) => results.push(result),
                None => {
                    index = self.find_interval_index_with_hint(index, *x);
                    results.push(self.polynomials[index].evaluate(*x));
                }
            }
        }
        results
    }

    /// Writes the line oriented form: the first point, then for every following point a line
    /// with its segment's `a b c d` and a line with the point itself.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), SplineError> {
        let first = self.points[0];
        writeln!(out, "{:.6} {:.6}", first.get_x(), first.get_y())?;

        for (polynomial, point) in self.polynomials.iter().zip(self.points.iter().skip(1)) {
            let [a, b, c, d] = polynomial.get_coefficients();
            writeln!(out, "{:.6} {:.6} {:.6} {:.6}", a, b, c, d)?;
            writeln!(out, "{:.6} {:.6}", point.get_x(), point.get_y())?;
        }
        out.flush()?;
        Ok(())
    }

    /// Creates (or truncates) the file at `path` and writes the spline into it.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SplineError> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    fn check_range(&self, x: f64) -> Result<(), SplineError> {
        if self.is_in_range(x) {
            Ok(())
        } else {
            Err(SplineError::OutOfRange { x, min: self.min_x, max: self.max_x })
        }
    }

    fn is_in_range(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    fn find_interval_index(&self, x: f64) -> usize {
        let size = self.points.len();
        let mut min = 0;
        let mut max = size - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.points[mid].get_x() {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_with_cache(&mut self, x: f64) -> usize {
        self.last_interval_cache = self.find_interval_index_with_hint(self.last_interval_cache, x);
        self.last_interval_cache
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            index_hint
        } else if index_hint + 1 < self.polynomials.len()
            && self.is_in_interval_range(index_hint + 1, x)
        {
            index_hint + 1
        } else {
            self.find_interval_index(x)
        }
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        self.points[interval_index].get_x() <= x && x <= self.points[interval_index + 1].get_x()
    }

    fn evaluate_on_boundaries(&self, x: f64) -> Option<f64> {
        let size = self.points.len();
        if x < self.points[1].get_x() {
            Some(self.polynomials[0].evaluate(x))
        } else if x > self.points[size - 2].get_x() {
            Some(self.polynomials[size - 2].evaluate(x))
        } else {
            None
        }
    }
}
