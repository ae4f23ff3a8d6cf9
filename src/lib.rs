pub mod error;
pub mod value;
pub mod sequence_list;
pub mod stack;

pub use error::ContainerError;
pub use sequence_list::SequenceList;
pub use stack::{BoundedStack, DEFAULT_CAPACITY};
pub use value::{Slot, Value, EMPTY_SLOT};
