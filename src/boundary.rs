/// Extra pair of constraints closing the spline system at both ends of the point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    /// Second derivative is zero at the first and the last point.
    Natural,
    /// First and second derivatives at the first point equal those at the last point.
    Periodic,
    /// Both end segments degenerate to quadratics (leading coefficient is zero).
    Quadratic,
    /// Leading coefficients of the two first and of the two last segments are equal,
    /// so the third derivative is continuous at the second and the second to last knot.
    NotAKnot,
}

impl BoundaryCondition {
    pub const ALL: [BoundaryCondition; 4] = [
        BoundaryCondition::Natural,
        BoundaryCondition::Periodic,
        BoundaryCondition::Quadratic,
        BoundaryCondition::NotAKnot,
    ];
}
