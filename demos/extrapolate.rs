extern crate chain_spline;

use chain_spline::{points_from_pairs, BoundaryCondition, Spline};

fn main() {

    let x_min = -2.0;
    let x_max = 9.0;

    let points = points_from_pairs(&[(0.0, 2.0), (1.0, 8.0), (4.0, 4.0), (5.0, 4.0), (7.0, 6.0)]);
    let spline = Spline::new(points, BoundaryCondition::NotAKnot).unwrap();

    let number_of_steps = 110;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| x_min + step * i as f64).collect();
    let result = spline.batch_extrapolate(&x_vector);

    println!("x;y");
    for (x, y) in x_vector.iter().zip(result.iter()) {
        println!("{:.2};{:.2}", x, y);
    }
}
