/// Point through which the spline passes.
/// - `x` - coordinate, expected to be strictly increasing along a point sequence,
/// - `y` - coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates [Point] from its coordinates.
    /// # Example
    /// ```
    /// use chain_spline::Point;
    ///
    /// let point = Point::new(1.0, 2.0);
    /// assert_eq!(1.0, point.get_x());
    /// assert_eq!(2.0, point.get_y());
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Point::new(value.0, value.1)
    }
}

/// Convenience conversion of coordinate pairs into [Point]s.
/// # Example
/// ```
/// use chain_spline::points_from_pairs;
///
/// let points = points_from_pairs(&[(0.0, 2.0), (1.0, 8.0)]);
/// assert_eq!(2, points.len());
/// assert_eq!(8.0, points[1].get_y());
/// ```
pub fn points_from_pairs(pairs: &[(f64, f64)]) -> Vec<Point> {
    pairs.iter().map(|pair| Point::from(*pair)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let x = 1.0;
        let y = 2.5;
        let point = Point::new(x, y);

        assert_eq!(x, point.x);
        assert_eq!(y, point.y);
    }

    #[test]
    fn test_from_tuple() {
        let point = Point::from((-3.0, 0.25));

        assert_eq!(-3.0, point.get_x());
        assert_eq!(0.25, point.get_y());
    }

    #[test]
    fn test_points_from_pairs_keeps_order() {
        let points = points_from_pairs(&[(0.0, 2.0), (1.0, 8.0), (4.0, 4.0)]);

        assert_eq!(3, points.len());
        assert_eq!(Point::new(0.0, 2.0), points[0]);
        assert_eq!(Point::new(4.0, 4.0), points[2]);
    }
}
