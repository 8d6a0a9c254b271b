use std::num::NonZeroU32;
use std::ops::Range;

/// Number of row bands to split `height` rows into: never more bands than rows,
/// never fewer than one.
pub fn calculate_bands_for_rows(max_bands: NonZeroU32, height: u32) -> u32 {
    max_bands.get().min(height).max(1)
}

/// Splits `0..height` into `bands` contiguous row ranges in order.
///
/// Every band gets `height / bands` rows and the last band also takes the
/// remainder, so the ranges never overlap and cover every row exactly once.
pub fn calculate_row_bands(height: u32, bands: NonZeroU32) -> Vec<Range<u32>> {
    let bands = bands.get().min(height.max(1));
    let band_height = height / bands;

    (0..bands)
        .map(|band_num| {
            let band_top = band_num * band_height;
            let band_bottom = if band_num == bands - 1 {
                height
            } else {
                band_top + band_height
            };

            band_top..band_bottom
        })
        .collect()
}
