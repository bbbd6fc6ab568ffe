use std::{num::NonZeroU64, str::FromStr};

/// The possible errors when parsing a line of user input.
#[derive(thiserror::Error, Debug, PartialEq)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum CommandError {
    /// The command is not recognised.
    #[error("Invalid command '{0}'")]
    Unknown(Box<str>),
    /// The amount of generations to run is not a positive number.
    #[error("Invalid generation count '{0}' - must be a positive number")]
    InvalidCount(Box<str>),
}

/// The commands a user can give the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    /// Advances the grid by one generation.
    Next,
    /// Advances the grid by up to the given amount of generations, stopping early if all cells die.
    Run(NonZeroU64),
    /// Terminates the shell.
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses a single line of input. Command names are case insensitive.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_lowercase();

        let command = match name.as_str() {
            "n" | "next" => Command::Next,
            "q" | "quit" | "exit" => Command::Quit,
            "r" | "run" => {
                let count = words.next().unwrap_or_default();
                let count = count
                    .parse()
                    .map_err(|_| CommandError::InvalidCount(count.into()))?;
                Command::Run(count)
            }
            _ => return Err(CommandError::Unknown(line.trim().into())),
        };

        // Trailing words are not part of any command.
        if words.next().is_some() {
            return Err(CommandError::Unknown(line.trim().into()));
        }

        Ok(command)
    }
}
