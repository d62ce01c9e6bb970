pub mod model;
pub mod svg;

pub use model::SchematicModel;
