pub mod casts;
pub mod definition;

pub use casts::ValueObjectCasts;
pub use definition::ModelDefinition;
