pub mod sample;
pub mod simple_probability;
