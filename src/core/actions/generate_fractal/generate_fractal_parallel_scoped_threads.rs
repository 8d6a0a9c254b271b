use std::num::NonZeroU32;
use std::thread;

use log::{debug, trace};

use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_band;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::util::calculate_bands_for_rows::calculate_row_bands;
use crate::core::util::calculate_threads_for_row_banding::calculate_threads_for_row_banding;

/// Renders on one scoped thread per row band, with `min(available_parallelism, height)` bands.
pub fn generate_fractal_parallel_scoped_threads<Alg>(algorithm: &Alg) -> Vec<Alg::Sample>
where
    Alg: FractalAlgorithm + Sync,
{
    let num_threads = calculate_threads_for_row_banding(algorithm.image_size().height());

    generate_fractal_parallel_scoped_threads_with(
        algorithm,
        NonZeroU32::new(num_threads).unwrap_or(NonZeroU32::MIN),
    )
}

/// Splits the buffer into disjoint row bands and fills each on its own scoped
/// thread. Returns once every thread has joined; a panicking worker resumes
/// the panic on the caller.
pub fn generate_fractal_parallel_scoped_threads_with<Alg>(
    algorithm: &Alg,
    num_threads: NonZeroU32,
) -> Vec<Alg::Sample>
where
    Alg: FractalAlgorithm + Sync,
{
    let size = algorithm.image_size();

    if size.is_empty() {
        return Vec::new();
    }

    let row_width = size.width() as usize;
    let bands = calculate_row_bands(size.height(), num_threads);
    let mut buffer = vec![Alg::Sample::default(); size.pixel_count()];

    debug!(
        "rendering {} rows on {} scoped threads: {:?}",
        size.height(),
        bands.len(),
        bands
    );

    let mut remaining = buffer.as_mut_slice();

    thread::scope(|scope| {
        for (band_num, rows) in bands.into_iter().enumerate() {
            let (band, rest) =
                std::mem::take(&mut remaining).split_at_mut(rows.len() * row_width);
            remaining = rest;

            scope.spawn(move || {
                generate_fractal_band(algorithm, rows.clone(), band);
                trace!("band {band_num} finished rows {rows:?}");
            });
        }
    });

    buffer
}
