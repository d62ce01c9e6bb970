pub mod format;
pub mod locale;
pub mod summary;

pub use format::{format_length, LengthUnit};
pub use locale::{label, Language};
pub use summary::render;
