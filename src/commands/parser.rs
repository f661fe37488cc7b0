//! Turning an input line into a [`Command`].

use crate::error::{CommandError, CommandResult};

/// A parsed command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
}

/// Split a line on whitespace into the command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}

impl Command {
    /// Parse a line. `Ok(None)` means the line was blank.
    ///
    /// Commands without arguments ignore any extra words. Commands that take
    /// arguments require exactly the documented count.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let Some((word, args)) = parse_input(line) else {
            return Ok(None);
        };

        let command = match word {
            "hello" => Command::Hello,
            "close" | "exit" => Command::Exit,
            "all" => Command::All,
            "birthdays" => Command::Birthdays,
            "add" => {
                let [name, phone] = exact_args::<2>(word, &args)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, phone] = exact_args::<2>(word, &args)?;
                Command::Change { name, phone }
            }
            "add-birthday" => {
                let [name, birthday] = exact_args::<2>(word, &args)?;
                Command::AddBirthday { name, birthday }
            }
            "phone" => {
                let [name] = exact_args::<1>(word, &args)?;
                Command::Phone { name }
            }
            "show-birthday" => {
                let [name] = exact_args::<1>(word, &args)?;
                Command::ShowBirthday { name }
            }
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Canonical command word, used in logs.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add { .. } => "add",
            Command::Change { .. } => "change",
            Command::Phone { .. } => "phone",
            Command::All => "all",
            Command::AddBirthday { .. } => "add-birthday",
            Command::ShowBirthday { .. } => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
        }
    }
}

fn exact_args<const N: usize>(command: &str, args: &[&str]) -> CommandResult<[String; N]> {
    if args.len() != N {
        return Err(CommandError::InvalidArguments {
            command: command.to_string(),
            expected: N,
            actual: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
