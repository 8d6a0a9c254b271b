pub mod raw_f32;
