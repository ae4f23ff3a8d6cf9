use std::io;

use anyhow::{Context, Result};
use log::LevelFilter;
use structopt::StructOpt;

use console::Console;

mod console;
mod demo;


#[derive(Debug, StructOpt)]
#[structopt(about = "Linked list and bounded stack demonstrations")]
struct Options {
    /// Log every container operation
    #[structopt(long)]
    trace: bool,

    #[structopt(subcommand)]
    command: Command
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Build a linked list from values typed on stdin
    List,
    /// Push values onto a bounded stack, then pop once
    Stack {
        /// Number of slots in the stack
        #[structopt(long, default_value = "10")]
        capacity: usize,

        /// Values to push, 14 and 15 if none are given
        #[structopt(allow_hyphen_values = true)]
        values: Vec<i32>
    }
}

fn main() -> Result<()> {
    let options = Options::from_args();
    init_logging(options.trace);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match options.command {
        Command::List => demo::run_list(&mut console).context("List demo failed"),
        Command::Stack { capacity, values } => {
            let values = if values.is_empty() { vec![14, 15] } else { values };
            log::debug!("stack capacity {}, values {:?}", capacity, values);
            demo::run_stack(&mut console, capacity, &values).context("Stack demo failed")
        }
    }
}

fn init_logging(trace: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if trace {
        builder.filter_level(LevelFilter::Trace);
    }
    builder.init();
}
