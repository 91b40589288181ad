pub mod codec;
pub mod host;

// Re-export all port traits for convenience
pub use codec::{AttributeCodec, ClassTable, ValueObjectCodec};
pub use host::HostModel;
