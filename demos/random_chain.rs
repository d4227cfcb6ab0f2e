extern crate chain_spline;

use std::error::Error;

use chain_spline::{window::DEFAULT_BUFFER, GeneratorConfig, Point, Spline};
use rand::{rngs::StdRng, SeedableRng};

// Generates a random chain of points and writes its windowed spline to spline.txt.
fn main() -> Result<(), Box<dyn Error>> {

    let config = GeneratorConfig::default()
        .with_count(32)
        .with_start(Point::new(0.0, 0.5))
        .with_y_range(-100.0, 100.0)
        .with_y_step(-0.4, 0.4)
        .with_x_step(0.2, 0.4);

    let mut rng = StdRng::seed_from_u64(3);
    let points = config.generate(&mut rng)?;

    let spline = Spline::windowed(points, DEFAULT_BUFFER)?;
    spline.save("spline.txt")?;

    println!("written {} segments to spline.txt", spline.segments().len());
    Ok(())
}
