pub mod write_le_f32;
