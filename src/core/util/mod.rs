pub mod calculate_bands_for_rows;
pub mod calculate_threads_for_row_banding;
pub mod pixel_to_complex_coords;
