pub mod memory;
pub mod seed;
