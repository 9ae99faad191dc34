//! The interactive command loop.

use sift_core::CancelFlag;
use sift_database::Database;
use sift_format::{BoxFormatter, Formatter};
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

pub const PROMPT: &str = "~# ";

const HELP: &str = "\
\\load <csv> <descriptor>  load a CSV file described by a YAML descriptor
\\drop <table>             drop a loaded table
\\list                     list loaded tables
\\help                     show this help
\\q                        quit
select <fields>|* from <table> [where <condition>];";

/// One line of shell input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    List,
    Load { csv: String, descriptor: String },
    Drop { table: String },
    Query(String),
    Empty,
}

/// A malformed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsageError {
    Load(String),
    Drop(String),
    Unknown(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::Load(line) => write!(f, "wrong syntax for \\load: '{}'", line),
            UsageError::Drop(line) => write!(f, "wrong syntax for \\drop: '{}'", line),
            UsageError::Unknown(cmd) => {
                write!(f, "unknown command '{}', type \\help for the list", cmd)
            }
        }
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, UsageError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }
        if !line.starts_with('\\') {
            return Ok(Command::Query(line.to_string()));
        }

        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();
        match (name, args.as_slice()) {
            ("\\q", []) => Ok(Command::Quit),
            ("\\help", []) => Ok(Command::Help),
            ("\\list", []) => Ok(Command::List),
            ("\\load", [csv, descriptor]) => Ok(Command::Load {
                csv: csv.to_string(),
                descriptor: descriptor.to_string(),
            }),
            ("\\load", _) => Err(UsageError::Load(line.to_string())),
            ("\\drop", [table]) => Ok(Command::Drop {
                table: table.to_string(),
            }),
            ("\\drop", _) => Err(UsageError::Drop(line.to_string())),
            _ => Err(UsageError::Unknown(name.to_string())),
        }
    }
}

/// Whether the loop should keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reads commands, runs them against a database and writes the results.
///
/// Raising the shell's interrupt flag cancels the query in flight and ends the loop
/// before the next command.
pub struct Shell<'a, W: Write> {
    db: &'a Database,
    formatter: BoxFormatter,
    interrupt: CancelFlag,
    out: W,
}

impl<'a, W: Write> Shell<'a, W> {
    pub fn new(db: &'a Database, out: W) -> Self {
        Self {
            db,
            formatter: BoxFormatter::new(),
            interrupt: CancelFlag::new(),
            out,
        }
    }

    /// Returns a handle to the flag that interrupts this shell.
    pub fn interrupt_flag(&self) -> CancelFlag {
        self.interrupt.clone()
    }

    /// Runs until `\q`, end of input or an interrupt.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.run_lines(input.lines())
    }

    /// Like [`run`](Self::run), over already split lines.
    pub fn run_lines<I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut lines = lines.into_iter();
        loop {
            if self.interrupt.is_cancelled() {
                info!("shell has been interrupted");
                break;
            }
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(self.out)?;
                break;
            };
            if self.handle(&line?)? == Flow::Quit {
                break;
            }
        }
        writeln!(self.out, "Bye-bye!")?;
        info!("shell has been stopped");
        Ok(())
    }

    /// Handles one input line. Failures are reported on the output and logged;
    /// only write errors end the loop.
    pub fn handle(&mut self, line: &str) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(self.out, "error: {}", err)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Empty => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::List => {
                for name in self.db.table_names() {
                    writeln!(self.out, "{}", name)?;
                }
            }
            Command::Load { csv, descriptor } => {
                if let Err(err) = self.db.load_csv(&csv, &descriptor) {
                    writeln!(self.out, "error: {}", err)?;
                    error!(csv = %csv, descriptor = %descriptor, error = %err, "error when loading table");
                }
            }
            Command::Drop { table } => {
                if let Err(err) = self.db.drop_table(&table) {
                    writeln!(self.out, "error: {}", err)?;
                    error!(table = %table, error = %err, "error when dropping table");
                }
            }
            Command::Query(query) => match self
                .db
                .execute_formatted_with(&query, &self.formatter, &self.interrupt)
            {
                Ok(text) => writeln!(self.out, "{}", text)?,
                Err(err) => {
                    writeln!(self.out, "error: {}", err)?;
                    error!(query = %query, error = %err, "error executing query");
                }
            },
        }
        Ok(Flow::Continue)
    }

    /// Consumes the shell, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
