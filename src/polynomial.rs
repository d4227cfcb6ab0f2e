/// Cubic polynomial `a*x^3 + b*x^2 + c*x + d` owned by one spline segment.
/// Coefficients are stored highest degree first, the same order in which they
/// occupy columns of the spline system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: [f64; 4],
}

impl Polynomial {
    pub fn new(coefficients: [f64; 4]) -> Self {
        Polynomial { coefficients }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let [a, b, c, d] = self.coefficients;
        ((a * x + b) * x + c) * x + d
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let [a, b, c, _] = self.coefficients;
        (3.0 * a * x + 2.0 * b) * x + c
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        let [a, b, _, _] = self.coefficients;
        6.0 * a * x + 2.0 * b
    }

    pub fn third_derivative(&self) -> f64 {
        6.0 * self.coefficients[0]
    }

    pub fn get_coefficients(&self) -> [f64; 4] {
        self.coefficients
    }

    /// Leading (cubic) coefficient.
    pub fn leading(&self) -> f64 {
        self.coefficients[0]
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn evaluate() {

        let eps = 1e-6;
        let polynomial = Polynomial::new([-0.25, 2.5, 1.0, -4.0]);

        assert_approx_eq!(polynomial.evaluate(2.1), 6.8097500, eps);
        assert_approx_eq!(polynomial.evaluate(-3.14), 25.2487860, eps);
        assert_approx_eq!(polynomial.evaluate(0.0), -4.0, eps);
    }

    #[test]
    fn derivatives() {

        let eps = 1e-9;
        let polynomial = Polynomial::new([2.0, -1.0, 3.0, 5.0]);

        // 6x^2 - 2x + 3
        assert_approx_eq!(polynomial.derivative(1.5), 13.5, eps);
        // 12x - 2
        assert_approx_eq!(polynomial.second_derivative(1.5), 16.0, eps);
        assert_approx_eq!(polynomial.third_derivative(), 12.0, eps);
        assert_eq!(2.0, polynomial.leading());
    }

    #[test]
    fn straight_line() {
        let eps = 1e-12;
        let polynomial = Polynomial::new([0.0, 0.0, 2.0, 1.0]);

        assert_approx_eq!(polynomial.evaluate(3.0), 7.0, eps);
        assert_approx_eq!(polynomial.derivative(-8.0), 2.0, eps);
        assert_approx_eq!(polynomial.second_derivative(100.0), 0.0, eps);
    }
}
