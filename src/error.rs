use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContainerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("List is empty")]
    EmptyList,

    #[error("List has {len} node(s), at least 2 are needed")]
    TooShort { len: usize },

    #[error("Stack is full (capacity {capacity})")]
    StackFull { capacity: usize },

    #[error("Stack is empty")]
    StackEmpty,

    #[error("Location {0} is out of range, locations start at 1")]
    InvalidLocation(usize),

    #[error("Capacity {0} is invalid, a stack needs at least one slot")]
    InvalidCapacity(usize),
}
