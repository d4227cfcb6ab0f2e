use std::fmt::Display;

use nalgebra::DMatrix;

use crate::{
    boundary::BoundaryCondition, error::SplineError, point::Point, polynomial::Polynomial, solver,
};

/// Augmented matrix of the cubic spline system for one sequence of points.
///
/// For `n` points the system has `N = 4 * (n - 1)` unknowns, four per segment, in the order
/// `a, b, c, d` of `a*x^3 + b*x^2 + c*x + d`. Rows are packed in a fixed order:
/// - two interpolation rows per segment,
/// - first derivative continuity at each interior point,
/// - second derivative continuity at each interior point,
/// - two rows of the selected [BoundaryCondition].
///
/// The last column holds the right hand side.
///
/// # Example
/// ```
/// use chain_spline::{BoundaryCondition, Point, SplineSystem};
/// use assert_approx_eq::assert_approx_eq;
///
/// let points = vec![Point::new(0.0, 1.0), Point::new(2.0, 5.0)];
/// let system = SplineSystem::new(&points, BoundaryCondition::Natural).unwrap();
/// assert_eq!(4, system.size());
///
/// let solved = system.solve().unwrap();
/// let line = solved.segment(0);
/// assert_approx_eq!(3.0, line.evaluate(1.0), 1e-9);
/// ```
pub struct SplineSystem {
    matrix: DMatrix<f64>,
    size: usize,
}

impl SplineSystem {
    /// Builds the system for `points` closed by `boundary`.
    ///
    /// x values are not checked; repeated or decreasing x lead to a singular system which is
    /// reported by [SplineSystem::solve].
    /// # Errors
    /// [SplineError::TooFewPoints] for less than two points.
    pub fn new(points: &[Point], boundary: BoundaryCondition) -> Result<Self, SplineError> {
        if points.len() < 2 {
            return Err(SplineError::TooFewPoints { got: points.len() });
        }

        let size = 4 * (points.len() - 1);
        let mut system = SplineSystem {
            matrix: DMatrix::<f64>::zeros(size, size + 1),
            size,
        };
        system.load(points, boundary);
        Ok(system)
    }

    /// Number of unknowns (rows).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Solves the system in place. The matrix is consumed, a failed solve leaves nothing to inspect.
    pub fn solve(mut self) -> Result<SolvedSystem, SplineError> {
        solver::solve_in_place(&mut self.matrix)?;
        Ok(SolvedSystem {
            matrix: self.matrix,
            size: self.size,
        })
    }

    fn load(&mut self, points: &[Point], boundary: BoundaryCondition) {
        let number_of_intervals = points.len() - 1;

        let x: Vec<f64> = points.iter().map(Point::get_x).collect();
        let squares: Vec<f64> = x.iter().map(|x| x * x).collect();
        let cubes: Vec<f64> = x.iter().zip(squares.iter()).map(|(x, s)| x * s).collect();

        let mut equation_counter = 0;

        for i in 0..number_of_intervals {
            for k in [i, i + 1] {
                self.add_segment_terms(equation_counter, i, [cubes[k], squares[k], x[k], 1.0]);
                self.matrix[(equation_counter, self.size)] = points[k].get_y();
                equation_counter += 1;
            }
        }

        for i in 1..number_of_intervals {
            self.continuity_equation(
                equation_counter,
                i - 1,
                [3.0 * squares[i], 2.0 * x[i], 1.0, 0.0],
            );
            equation_counter += 1;
        }

        for i in 1..number_of_intervals {
            self.continuity_equation(equation_counter, i - 1, [6.0 * x[i], 2.0, 0.0, 0.0]);
            equation_counter += 1;
        }

        self.boundary_equations(equation_counter, boundary, &x, &squares);
        equation_counter += 2;

        debug_assert_eq!(self.size, equation_counter);
    }

    /// Derivative of `left_segment` equals derivative of the following segment, rhs stays 0.
    fn continuity_equation(&mut self, row: usize, left_segment: usize, terms: [f64; 4]) {
        self.add_segment_terms(row, left_segment, terms);
        self.add_segment_terms(row, left_segment + 1, terms.map(|t| -t));
    }

    fn boundary_equations(
        &mut self,
        row: usize,
        boundary: BoundaryCondition,
        x: &[f64],
        squares: &[f64],
    ) {
        let first = 0;
        let last = x.len() - 2;
        let x_last = x.len() - 1;

        match boundary {
            BoundaryCondition::Natural => {
                self.add_segment_terms(row, first, [6.0 * x[0], 2.0, 0.0, 0.0]);
                self.add_segment_terms(row + 1, last, [6.0 * x[x_last], 2.0, 0.0, 0.0]);
            }
            BoundaryCondition::Periodic => {
                // with a single segment both terms land in the same columns, hence adding
                self.add_segment_terms(row, first, [3.0 * squares[0], 2.0 * x[0], 1.0, 0.0]);
                self.add_segment_terms(
                    row,
                    last,
                    [-3.0 * squares[x_last], -2.0 * x[x_last], -1.0, 0.0],
                );

                self.add_segment_terms(row + 1, first, [6.0 * x[0], 2.0, 0.0, 0.0]);
                self.add_segment_terms(row + 1, last, [-6.0 * x[x_last], -2.0, 0.0, 0.0]);
            }
            BoundaryCondition::Quadratic => {
                self.add_segment_terms(row, first, [1.0, 0.0, 0.0, 0.0]);
                self.add_segment_terms(row + 1, last, [1.0, 0.0, 0.0, 0.0]);
            }
            BoundaryCondition::NotAKnot if last == first => {
                // no neighbour to compare with: the only segment is a straight line
                self.add_segment_terms(row, first, [1.0, 0.0, 0.0, 0.0]);
                self.add_segment_terms(row + 1, first, [0.0, 1.0, 0.0, 0.0]);
            }
            BoundaryCondition::NotAKnot if last == first + 1 => {
                // both pairs are the same pair: one cubic through three points is left free,
                // the parabola is taken
                self.add_segment_terms(row, first, [1.0, 0.0, 0.0, 0.0]);
                self.add_segment_terms(row, last, [-1.0, 0.0, 0.0, 0.0]);
                self.add_segment_terms(row + 1, first, [1.0, 0.0, 0.0, 0.0]);
            }
            BoundaryCondition::NotAKnot => {
                self.add_segment_terms(row, first, [1.0, 0.0, 0.0, 0.0]);
                self.add_segment_terms(row, first + 1, [-1.0, 0.0, 0.0, 0.0]);

                self.add_segment_terms(row + 1, last - 1, [1.0, 0.0, 0.0, 0.0]);
                self.add_segment_terms(row + 1, last, [-1.0, 0.0, 0.0, 0.0]);
            }
        }
    }

    fn add_segment_terms(&mut self, row: usize, segment: usize, terms: [f64; 4]) {
        let index_start = 4 * segment;
        for (c, term) in terms.iter().enumerate() {
            self.matrix[(row, index_start + c)] += term;
        }
    }
}

impl Display for SplineSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for j in 0..self.size {
            write!(f, "{:7} ", j)?;
        }
        writeln!(f)?;
        for i in 0..self.size {
            for j in 0..self.size {
                write!(f, "{:7.3} ", self.matrix[(i, j)])?;
            }
            writeln!(f, "| {:7.3}", self.matrix[(i, self.size)])?;
        }
        Ok(())
    }
}

/// Successfully solved [SplineSystem]. Coefficients of segment `i` are unknowns `4i..4i+3`.
pub struct SolvedSystem {
    matrix: DMatrix<f64>,
    size: usize,
}

impl SolvedSystem {
    pub fn segment_count(&self) -> usize {
        self.size / 4
    }

    /// Polynomial of segment `index`.
    /// # Panics
    /// When `index` is not lower than [SolvedSystem::segment_count].
    pub fn segment(&self, index: usize) -> Polynomial {
        let row = 4 * index;
        Polynomial::new([
            self.matrix[(row, self.size)],
            self.matrix[(row + 1, self.size)],
            self.matrix[(row + 2, self.size)],
            self.matrix[(row + 3, self.size)],
        ])
    }

    pub fn segments(&self) -> Vec<Polynomial> {
        (0..self.segment_count()).map(|i| self.segment(i)).collect()
    }

    /// All unknowns, four per segment.
    pub fn coefficients(&self) -> Vec<f64> {
        self.matrix.column(self.size).iter().copied().collect()
    }
}
