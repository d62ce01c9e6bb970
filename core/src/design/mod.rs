pub mod input;
pub mod result;

pub use input::DesignInput;
pub use result::HornDimensions;
