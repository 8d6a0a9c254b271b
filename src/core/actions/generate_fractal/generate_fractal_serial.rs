use std::ops::Range;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Single-threaded reference implementation; the parallel strategies must match it exactly.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Sample> {
    let size = algorithm.image_size();

    (0..size.height())
        .flat_map(|y| (0..size.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

/// Fills `band`, the row-major slice holding exactly the pixels of `rows`.
pub(crate) fn generate_fractal_band<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    rows: Range<u32>,
    band: &mut [Alg::Sample],
) {
    let width = algorithm.image_size().width();

    debug_assert_eq!(band.len(), rows.len() * width as usize);

    let pixels = rows.flat_map(|y| (0..width).map(move |x| Point { x, y }));

    for (sample, pixel) in band.iter_mut().zip(pixels) {
        *sample = algorithm.compute(pixel);
    }
}
