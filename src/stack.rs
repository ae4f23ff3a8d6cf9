use std::fmt::Display;

use log::{debug, trace};

use crate::error::{ContainerError, Result};
use crate::value::{Slot, Value};

pub const DEFAULT_CAPACITY: usize = 10;

/// Fixed-capacity LIFO stack over a slot array allocated once at construction.
/// Slots above the top hold no data and show up as the empty sentinel in
/// [`BoundedStack::display`].
#[derive(Debug)]
pub struct BoundedStack {
    slots: Box<[Option<Value>]>,
    len: usize,
}

impl BoundedStack {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ContainerError::InvalidCapacity(capacity));
        }

        Ok(Self { slots: vec![None; capacity].into_boxed_slice(), len: 0 })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Index of the topmost filled slot, `None` when empty.
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Pushes `value` unless the stack is full. A full stack is left as is
    /// and `false` is returned.
    pub fn push(&mut self, value: Value) -> bool {
        match self.try_push(value) {
            Ok(()) => true,
            Err(e) => {
                debug!("push of {} ignored: {}", value, e);
                false
            }
        }
    }

    pub fn try_push(&mut self, value: Value) -> Result<()> {
        if self.is_full() {
            return Err(ContainerError::StackFull { capacity: self.capacity() });
        }

        self.slots[self.len] = Some(value);
        self.len += 1;
        trace!("pushed {} (len {})", value, self.len);
        Ok(())
    }

    /// Pops the top value, or does nothing on an empty stack.
    pub fn pop(&mut self) -> Option<Value> {
        match self.try_pop() {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("pop ignored: {}", e);
                None
            }
        }
    }

    pub fn try_pop(&mut self) -> Result<Value> {
        let top = self.top().ok_or(ContainerError::StackEmpty)?;
        let value = self.slots[top].take().ok_or(ContainerError::StackEmpty)?;
        self.len = top;
        trace!("popped {} (len {})", value, self.len);
        Ok(value)
    }

    /// Value `pos` places below the top; `peek(0)` is the top itself.
    pub fn peek(&self, pos: usize) -> Option<Value> {
        let index = self.top()?.checked_sub(pos)?;
        self.slots[index]
    }

    /// Every slot of the backing storage, bottom first, empty ones included.
    pub fn display(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots.iter().copied().map(Slot::from)
    }

    /// Only the stored values, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.slots[..self.len].iter().flatten().copied()
    }
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self { slots: vec![None; DEFAULT_CAPACITY].into_boxed_slice(), len: 0 }
    }
}

impl Display for BoundedStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut slots = self.display();
        if let Some(first) = slots.next() {
            write!(f, "{}", first)?;
            for slot in slots {
                write!(f, " {}", slot)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::EMPTY_SLOT;
    use proptest::prelude::*;

    fn raw(stack: &BoundedStack) -> Vec<Value> {
        stack.display().map(|s| s.value().unwrap_or(EMPTY_SLOT)).collect()
    }

    #[test]
    fn push_push_pop_shows_active_region() {
        let mut stack = BoundedStack::default();
        stack.push(14);
        stack.push(15);

        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![14, 15]);
        assert_eq!(raw(&stack), vec![14, 15, -99, -99, -99, -99, -99, -99, -99, -99]);

        assert_eq!(stack.pop(), Some(15));
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![14]);
        assert_eq!(raw(&stack)[..2], [14, -99]);
    }

    #[test]
    fn new_stack_is_empty() {
        let stack = BoundedStack::default();

        assert!(stack.is_empty());
        assert!(!stack.is_full());
        assert_eq!(stack.top(), None);
        assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
        assert!(stack.display().all(|s| s == Slot::Empty));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(BoundedStack::with_capacity(0).unwrap_err(), ContainerError::InvalidCapacity(0));
    }

    #[test]
    fn overflow_is_silently_ignored() {
        let mut stack = BoundedStack::with_capacity(3).unwrap();
        assert!(stack.push(1));
        assert!(stack.push(2));
        assert!(stack.push(3));

        assert!(!stack.push(4));
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(stack.top(), Some(2));
    }

    #[test]
    fn strict_push_reports_full() {
        let mut stack = BoundedStack::with_capacity(1).unwrap();
        stack.try_push(1).unwrap();

        assert_eq!(stack.try_push(2), Err(ContainerError::StackFull { capacity: 1 }));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut stack = BoundedStack::with_capacity(2).unwrap();

        assert_eq!(stack.pop(), None);
        assert_eq!(stack.try_pop(), Err(ContainerError::StackEmpty));
        assert_eq!(stack.top(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_looks_below_top() {
        let mut stack = BoundedStack::default();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.peek(0), Some(2));
        assert_eq!(stack.peek(1), Some(1));
        assert_eq!(stack.peek(2), None);
    }

    #[test]
    fn sentinel_value_can_be_stored() {
        let mut stack = BoundedStack::default();
        stack.push(EMPTY_SLOT);

        assert_eq!(stack.pop(), Some(EMPTY_SLOT));
        assert!(stack.is_empty());
    }

    #[test]
    fn display_renders_raw_slots() {
        let mut stack = BoundedStack::with_capacity(4).unwrap();
        stack.push(7);

        assert_eq!(stack.to_string(), "7 -99 -99 -99");
    }

    proptest! {
        #[test]
        fn full_exactly_at_capacity(capacity in 1usize..32) {
            let mut stack = BoundedStack::with_capacity(capacity).unwrap();

            for i in 0..capacity {
                prop_assert!(!stack.is_full());
                prop_assert!(stack.push(i as Value));
            }

            prop_assert!(stack.is_full());
            prop_assert_eq!(stack.top(), Some(capacity - 1));
            prop_assert!(!stack.push(-1));
            prop_assert_eq!(stack.len(), capacity);

            stack.pop();
            prop_assert!(!stack.is_full());
        }

        #[test]
        fn pushes_and_pops_follow_lifo(ops in prop::collection::vec(prop::option::of(any::<Value>()), 0..64)) {
            let mut stack = BoundedStack::with_capacity(8).unwrap();
            let mut model: Vec<Value> = Vec::new();

            for op in ops {
                match op {
                    Some(v) => {
                        let accepted = stack.push(v);
                        prop_assert_eq!(accepted, model.len() < 8);
                        if accepted {
                            model.push(v);
                        }
                    }
                    None => {
                        prop_assert_eq!(stack.pop(), model.pop());
                    }
                }

                prop_assert_eq!(stack.iter().collect::<Vec<_>>(), model.clone());
                prop_assert_eq!(stack.display().filter(|s| *s == Slot::Empty).count(), 8 - model.len());
            }
        }
    }
}
