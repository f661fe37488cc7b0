//! The interactive read/dispatch/print loop.
//!
//! A [`Session`] owns the address book for one run of the program. It is
//! generic over its input and output so tests can drive it with in-memory
//! buffers.

use crate::commands::{self, CommandContext, Reply};
use crate::config::Config;
use crate::models::AddressBook;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Source of "today" for the birthday query.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub struct Session<C: Clock = SystemClock> {
    book: AddressBook,
    config: Config,
    clock: C,
}

impl Session<SystemClock> {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            clock,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one line through the command layer.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let ctx = CommandContext {
            today: self.clock.today(),
            birthday_window_days: self.config.birthday_window_days,
        };
        commands::execute(&mut self.book, line, &ctx)
    }

    /// Greet, then prompt and answer until `close`/`exit` or end of input.
    ///
    /// End of input is handled like `exit`. Only I/O errors are returned;
    /// a line that is not valid UTF-8 is decoded lossily and answered.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        info!("Session started");
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                // The prompt is still on the current line
                writeln!(output)?;
                write_reply(&mut output, &Reply::farewell())?;
                break;
            }

            // Undecodable bytes become U+FFFD instead of ending the session
            let line = String::from_utf8_lossy(&buf);
            let Some(reply) = self.handle_line(&line) else {
                continue;
            };
            write_reply(&mut output, &reply)?;
            if reply.exit {
                break;
            }
        }

        output.flush()?;
        info!(contacts = self.book.len(), "Session finished");
        Ok(())
    }
}

fn write_reply<W: Write>(output: &mut W, reply: &Reply) -> io::Result<()> {
    for line in &reply.lines {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
