pub mod color;
pub mod conv;
