pub mod memory;
pub mod registry;

pub use memory::InMemoryModel;
pub use registry::{ClassRegistry, ResolverFn};
