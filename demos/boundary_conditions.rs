extern crate chain_spline;

use chain_spline::{points_from_pairs, BoundaryCondition, SplineSystem};

fn main() {

    let points = points_from_pairs(&[(0.0, 2.0), (1.0, 8.0), (4.0, 4.0), (5.0, 4.0), (7.0, 6.0)]);

    for boundary in BoundaryCondition::ALL {
        let system = SplineSystem::new(&points, boundary).unwrap();

        println!("{:?}", boundary);
        println!("{}", system);

        match system.solve() {
            Ok(solved) => {
                for (i, segment) in solved.segments().iter().enumerate() {
                    let [a, b, c, d] = segment.get_coefficients();
                    println!("{};{:.4};{:.4};{:.4};{:.4}", i, a, b, c, d);
                }
            }
            Err(err) => println!("Could not solve: {}", err),
        }
        println!();
    }
}
