use std::fmt::Display;

use log::{debug, trace};

use crate::error::{ContainerError, Result};
use crate::value::Value;

#[derive(Debug)]
struct Node {
    value: Value,
    next: Option<Box<Node>>,
}

/// Singly linked list of values. Every node is owned by its predecessor and
/// the head is owned by the list, so the chain is always finite and acyclic.
#[derive(Debug)]
pub struct SequenceList {
    head: Option<Box<Node>>,
    count: usize,
}

impl SequenceList {
    pub fn new() -> Self {
        Self { head: None, count: 0 }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn prepend(&mut self, value: Value) {
        let node = Box::new(Node { value, next: self.head.take() });
        self.head = Some(node);
        self.count += 1;
        trace!("prepended {} (len {})", value, self.count);
    }

    pub fn append(&mut self, value: Value) {
        let node = Box::new(Node { value, next: None });

        if self.head.is_none() {
            self.head = Some(node);
        } else if let Some(last) = self.node_mut(self.count - 1) {
            last.next = Some(node);
        }

        self.count += 1;
        trace!("appended {} (len {})", value, self.count);
    }

    /// Inserts `value` so that it ends up at the 1-based `location`.
    ///
    /// An empty list takes the value as its head whatever the location is,
    /// and a location past the end appends instead.
    pub fn insert_at(&mut self, location: usize, value: Value) -> Result<()> {
        if self.is_empty() {
            debug!("list is empty, inserting {} as the first node", value);
            self.prepend(value);
            return Ok(());
        }

        if location == 0 {
            return Err(ContainerError::InvalidLocation(location));
        }

        if location > self.count {
            debug!("location {} is past length {}, appending {}", location, self.count, value);
            self.append(value);
            return Ok(());
        }

        if location == 1 {
            self.prepend(value);
            return Ok(());
        }

        match self.node_mut(location - 2) {
            Some(prev) => {
                let next = prev.next.take();
                prev.next = Some(Box::new(Node { value, next }));
            }
            None => return Err(ContainerError::InvalidLocation(location)),
        }

        self.count += 1;
        trace!("spliced {} at location {} (len {})", value, location, self.count);
        Ok(())
    }

    /// Releases every node, head included.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }

        trace!("cleared {} node(s)", self.count);
        self.count = 0;
    }

    /// Value of the middle node, found with a slow and a fast cursor.
    /// Even lengths give the lower middle.
    pub fn midpoint(&self) -> Result<Value> {
        let head = self.head.as_deref().ok_or(ContainerError::EmptyList)?;
        if head.next.is_none() {
            return Err(ContainerError::TooShort { len: self.count });
        }

        let mut slow = head;
        let mut fast = head;
        while let Some(skip) = fast.next.as_deref().and_then(|n| n.next.as_deref()) {
            fast = skip;
            slow = match slow.next.as_deref() {
                Some(n) => n,
                None => break,
            };
        }

        Ok(slow.value)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head.as_deref() }
    }

    pub fn traverse(&self) -> Iter<'_> {
        self.iter()
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }

        Some(node)
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

impl<'a> IntoIterator for &'a SequenceList {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for SequenceList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SequenceList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Extend<Value> for SequenceList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        let values: Vec<Value> = iter.into_iter().collect();
        let added = values.len();

        // Build the new tail back to front, then link it in with one walk.
        let mut chain: Option<Box<Node>> = None;
        for value in values.into_iter().rev() {
            chain = Some(Box::new(Node { value, next: chain }));
        }

        if self.head.is_none() {
            self.head = chain;
        } else if let Some(last) = self.node_mut(self.count - 1) {
            last.next = chain;
        }

        self.count += added;
    }
}

impl FromIterator<Value> for SequenceList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Display for SequenceList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for value in iter {
                write!(f, "->{}", value)?;
            }
        }

        Ok(())
    }
}
