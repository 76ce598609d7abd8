extern crate bounded_polynomial;

use bounded_polynomial::Polynomial;
use nalgebra::DMatrix;

fn main() {

    let mut polynomial = Polynomial::new();
    polynomial.add_coefficient(1.0);
    polynomial.add_coefficient(-5.2);
    polynomial.add_coefficient(2.0);
    polynomial.add_coefficient(-4.0);

    println!("p(x) = {}", polynomial);

    let x_min = -2.0;
    let x_max = 2.0;
    let number_of_steps = 40;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps)
        .map(|i| x_min + step * i as f64)
        .collect();
    let result = polynomial.batch_evaluate(&x_vector);

    // same values as Vandermonde matrix times coefficient vector
    let vandermonde = DMatrix::from_fn(x_vector.len(), polynomial.get_size(), |r, c| {
        x_vector[r].powf(c as f64)
    });
    let matrix_result = vandermonde * polynomial.to_vector();
    let max_difference = result.iter()
        .zip(matrix_result.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);

    println!("max difference to Vandermonde product: {:e}", max_difference);

    println!("x;y;root");
    for i in 0..number_of_steps {
        let location = polynomial.find_root(result[i], result[i + 1]);
        println!("{:.2};{:.2};{}", x_vector[i], result[i], location);
    }
}
