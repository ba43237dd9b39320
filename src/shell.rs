//! A line-oriented shell over an `OrderedTree<i32>`. Each line of input is a command name;
//! commands that need a number prompt for it on the following lines and keep asking until they
//! get one they can use.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::shell::Shell;
//! use ordered_tree::SuccessorSplice;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let input = "add\n2\nadd\nnope\n1\ncount\n";
//! let mut output = Vec::new();
//!
//! let mut shell = Shell::new(
//!     input.as_bytes(),
//!     &mut output,
//!     StdRng::seed_from_u64(7),
//!     SuccessorSplice::Detach,
//! );
//! shell.run().unwrap();
//!
//! assert_eq!(shell.tree().count(), 2);
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("Invalid\n"));
//! assert!(output.ends_with("2\n"));
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, info};
use rand::{rngs::StdRng, Rng};

use crate::tree::{OrderedTree, SuccessorSplice};

/// Everything the shell knows how to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the command names.
    Help,
    /// Replace the tree with an empty one.
    Clear,
    /// Print the tree.
    Print,
    /// Replace the tree with a random population of distinct keys.
    Random,
    /// Add a key.
    Add,
    /// Delete a key.
    Delete,
    /// Report whether a key is in the tree.
    Contains,
    /// Report how many nodes the tree has.
    Count,
    /// Report whether the tree passes validation.
    Valid,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 9] = [
        Command::Help,
        Command::Clear,
        Command::Print,
        Command::Random,
        Command::Add,
        Command::Delete,
        Command::Contains,
        Command::Count,
        Command::Valid,
    ];

    /// The name typed to run this command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Print => "print",
            Command::Random => "random",
            Command::Add => "add",
            Command::Delete => "delete",
            Command::Contains => "contains",
            Command::Count => "count",
            Command::Valid => "valid",
        }
    }

    /// Looks up the command with exactly this name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// Builds a tree of `count` distinct keys drawn uniformly from `min..=max`. Each key is redrawn
/// until it isn't already in the tree, then added.
///
/// # Panics
///
/// If `min..=max` holds fewer than `count` keys.
pub fn populate_random<R>(
    rng: &mut R,
    count: usize,
    min: i32,
    max: i32,
    splice: SuccessorSplice,
) -> OrderedTree<i32>
where
    R: Rng,
{
    let available = (i64::from(max) - i64::from(min) + 1).max(0) as u64;
    assert!(
        count as u64 <= available,
        "cannot draw {} distinct keys from {}..={}",
        count,
        min,
        max
    );

    let mut tree = OrderedTree::with_splice(splice);
    for _ in 0..count {
        let key = loop {
            let key = rng.gen_range(min..=max);
            if !tree.contains(&key) {
                break key;
            }
        };
        tree.add(key);
    }

    tree
}

/// Reads commands from `R`, runs them against its tree and writes responses to `W`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    tree: OrderedTree<i32>,
    rng: StdRng,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a shell with an empty tree that deletes with `splice`. `rng` drives `random`.
    pub fn new(input: R, output: W, rng: StdRng, splice: SuccessorSplice) -> Self {
        Self {
            input,
            output,
            tree: OrderedTree::with_splice(splice),
            rng,
        }
    }

    /// The tree as the commands so far have left it.
    pub fn tree(&self) -> &OrderedTree<i32> {
        &self.tree
    }

    /// Runs commands until the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        while let Some(line) = self.read_line()? {
            match Command::parse(line.trim()) {
                Some(command) => self.execute(command)?,
                None => writeln!(self.output, "Invalid command. For more info, type help")?,
            }
        }

        self.output.flush()
    }

    /// Runs a single command, prompting for any numbers it needs.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        debug!("running {}", command.name());
        match command {
            Command::Help => {
                writeln!(self.output, "Command list:")?;
                for command in Command::ALL.iter() {
                    writeln!(self.output, "{}", command.name())?;
                }
            }
            Command::Clear => self.tree = OrderedTree::with_splice(self.tree.splice()),
            Command::Print => self.tree.write_tree(&mut self.output)?,
            Command::Random => {
                writeln!(self.output, "Enter number of items")?;
                let count = self.read_int(|x| x > 0)?;

                writeln!(self.output, "Enter minimum value")?;
                let min = self.read_int(|_| true)?;

                writeln!(self.output, "Enter maximum value")?;
                let max = self.read_int(|x| {
                    x > min && i64::from(x) - i64::from(min) + 1 >= i64::from(count)
                })?;

                info!("populating {} keys from {}..={}", count, min, max);
                self.tree = populate_random(
                    &mut self.rng,
                    count as usize,
                    min,
                    max,
                    self.tree.splice(),
                );
                self.tree.write_tree(&mut self.output)?;
            }
            Command::Add => {
                writeln!(self.output, "Enter item to add")?;
                let key = self.read_int(|_| true)?;

                self.tree.add(key);
                self.tree.write_tree(&mut self.output)?;
            }
            Command::Delete => {
                writeln!(self.output, "Enter item to delete")?;
                let key = self.read_int(|_| true)?;

                if self.tree.delete(&key) {
                    writeln!(self.output, "Delete successful")?;
                } else {
                    writeln!(self.output, "Delete failed")?;
                }
                self.tree.write_tree(&mut self.output)?;
            }
            Command::Contains => {
                writeln!(self.output, "Enter item to find")?;
                let key = self.read_int(|_| true)?;

                writeln!(self.output, "{}", self.tree.contains(&key))?;
            }
            Command::Count => writeln!(self.output, "{}", self.tree.count())?,
            Command::Valid => writeln!(self.output, "{}", self.tree.is_valid())?,
        }

        Ok(())
    }

    /// Reads one line without its line ending, or `None` at the end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Reads lines until one parses as an `i32` accepted by `accept`, answering `Invalid` to
    /// every other line.
    fn read_int(&mut self, accept: impl Fn(i32) -> bool) -> io::Result<i32> {
        loop {
            let line = self.read_line()?.ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended while waiting for a number",
                )
            })?;

            match line.trim().parse() {
                Ok(x) if accept(x) => return Ok(x),
                _ => writeln!(self.output, "Invalid")?,
            }
        }
    }
}
