pub mod collection;
pub mod id;

pub use collection::RecordCollection;
pub use id::{IdGenerator, IdStrategy};
