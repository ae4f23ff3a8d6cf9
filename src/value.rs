use std::fmt::Display;

pub type Value = i32;

/// Marker printed for a stack slot that holds no data.
pub const EMPTY_SLOT: Value = -99;

/// One slot of a stack's backing storage, as seen by the raw display view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Filled(Value),
    Empty,
}

impl Slot {
    pub fn value(&self) -> Option<Value> {
        match self {
            Slot::Filled(v) => Some(*v),
            Slot::Empty => None,
        }
    }
}

impl From<Option<Value>> for Slot {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(v) => Slot::Filled(v),
            None => Slot::Empty,
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Filled(v) => write!(f, "{}", v),
            Slot::Empty => write!(f, "{}", EMPTY_SLOT),
        }
    }
}
