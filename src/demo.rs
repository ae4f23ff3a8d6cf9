use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use ds::{BoundedStack, SequenceList, Value};

use crate::console::Console;

/// Appends while the user answers `1`, then prepends, inserts at a chosen
/// location, reports the middle and clears the list.
pub fn run_list<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let mut list = SequenceList::new();

    loop {
        let value = console.ask_value("Enter Data")?;
        list.append(value);
        if console.ask_value("Choice")? != 1 {
            break;
        }
    }
    show_list(console, &list)?;

    let value = console.ask_value("Enter Data")?;
    list.prepend(value);
    show_list(console, &list)?;

    let location = if list.is_empty() { 1 } else { ask_location(console)? };
    let value = console.ask_value("Enter Data")?;
    if list.is_empty() {
        console.say("LinkedList is empty inserting in 1st node")?;
    } else if location > list.len() {
        console.say("Location Greater than Length Appending Node.")?;
    }
    list.insert_at(location, value).context("Failed to insert node")?;
    show_list(console, &list)?;

    match list.midpoint() {
        Ok(mid) => console.say(&format!("Mid: {}", mid))?,
        Err(e) => console.say(&format!("Mid: {}", e))?,
    }

    list.clear();
    info!("list demo finished");
    Ok(())
}

fn ask_location<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<usize> {
    loop {
        let location = console.ask_value("Enter Location")?;
        match usize::try_from(location) {
            Ok(l) if l > 0 => return Ok(l),
            _ => console.say("Locations start at 1.")?,
        }
    }
}

fn show_list<R: BufRead, W: Write>(console: &mut Console<R, W>, list: &SequenceList) -> Result<()> {
    if list.is_empty() {
        console.say("Linked List is Empty.")
    } else {
        console.say(&list.to_string())
    }
}

/// Pushes every value, shows the raw slots, pops once and shows them again.
pub fn run_stack<R: BufRead, W: Write>(console: &mut Console<R, W>, capacity: usize, values: &[Value]) -> Result<()> {
    let mut stack = BoundedStack::with_capacity(capacity).context("Failed to create stack")?;

    for &value in values {
        if !stack.push(value) {
            console.say(&format!("Stack is full, {} was not pushed", value))?;
        }
    }
    console.say(&stack.to_string())?;

    stack.pop();
    console.say(&stack.to_string())?;

    info!("stack demo finished");
    Ok(())
}
