use std::{error::Error, fmt::Display, io};

/// Failure outcomes of building, solving, generating and writing splines.
#[derive(Debug)]
pub enum SplineError {
    /// Spline needs at least two points to have a single segment.
    TooFewPoints { got: usize },
    /// Back-substitution met a zero pivot with a non-zero right hand side.
    Inconsistent { row: usize },
    /// No y value satisfies the generator constraints for the point at `index`.
    UnsatisfiableRange { index: usize, low: f64, high: f64 },
    /// Interpolation requested outside of the knots range.
    OutOfRange { x: f64, min: f64, max: f64 },
    /// Output destination could not be opened or written.
    Io(io::Error),
}

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Spline: ")?;
        match self {
            SplineError::TooFewPoints { got } => {
                write!(f, "spline must have at least 2 points, got {}", got)
            }
            SplineError::Inconsistent { row } => {
                write!(f, "system of equations has no solution (row {})", row)
            }
            SplineError::UnsatisfiableRange { index, low, high } => write!(
                f,
                "cannot generate point {}: no y value in [{}, {}]",
                index, low, high
            ),
            SplineError::OutOfRange { x, min, max } => {
                write!(f, "x = {} is out of range [{}, {}]", x, min, max)
            }
            SplineError::Io(err) => write!(f, "could not write spline: {}", err),
        }
    }
}

impl Error for SplineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SplineError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SplineError {
    fn from(err: io::Error) -> Self {
        SplineError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed() {
        let err = SplineError::Inconsistent { row: 3 };
        assert_eq!("Error in Spline: system of equations has no solution (row 3)", err.to_string());

        let err = SplineError::TooFewPoints { got: 1 };
        assert!(err.to_string().starts_with("Error in Spline: "));
    }

    #[test]
    fn io_error_is_source() {
        let err = SplineError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));

        assert!(matches!(err, SplineError::Io(_)));
        assert!(err.source().is_some());
        assert!(SplineError::OutOfRange { x: 2.0, min: 0.0, max: 1.0 }.source().is_none());
    }
}
