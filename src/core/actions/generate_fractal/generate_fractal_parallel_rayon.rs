use log::debug;
use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_band;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is its own task, so uneven rows (deep interior vs fast escapes)
/// balance across the global pool. Output order matches
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Sample>
where
    Alg: FractalAlgorithm + Sync,
{
    let size = algorithm.image_size();

    if size.is_empty() {
        return Vec::new();
    }

    debug!(
        "rendering {} rows on the rayon pool ({} threads)",
        size.height(),
        rayon::current_num_threads()
    );

    let mut buffer = vec![Alg::Sample::default(); size.pixel_count()];

    buffer
        .par_chunks_mut(size.width() as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            generate_fractal_band(algorithm, y..y + 1, row);
        });

    buffer
}
