pub mod horn;

pub use horn::{solve, GAIN_FLOOR_DBI, SPEED_OF_LIGHT_MM_MHZ};
