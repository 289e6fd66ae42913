pub mod circuit;
pub mod glow;
pub mod hex_grid;
pub mod matrix;
