use std::num::NonZeroU32;

use crate::core::util::calculate_bands_for_rows::calculate_bands_for_rows;

pub fn available_threads() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(u32::try_from(n.get()).unwrap_or(u32::MAX)))
        .unwrap_or(NonZeroU32::MIN)
}

/// Worker count for a render of `height` rows: `min(available_parallelism, height)`, at least 1.
pub fn calculate_threads_for_row_banding(height: u32) -> u32 {
    calculate_bands_for_rows(available_threads(), height)
}
