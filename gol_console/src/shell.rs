use std::{
    fmt,
    io::{self, BufRead, Write},
    time::Duration,
};

use gol_core::Simulator;

use crate::{
    commands::Command,
    lang,
    settings::SimulationSpeed,
};

lang! {
    INITIALISED, "\nSuccessfully initialised the starting grid:\n";
    NEW_STATE, "Here is the new grid state:\n";
    GENERATION, "Generation: ";
    COMMAND_PROMPT, "Please type 'n' to go to the next generation, 'r <count>' to run several, or 'q' to exit: ";
    VALID_COMMANDS, "must be one of 'n', 'r <count>' or 'q'";
    GAME_OVER, "All cells have died. The game is over.";
    INVALID_NUMBER, "Please enter a whole number."
}

/// The possible errors whilst running the shell.
#[derive(thiserror::Error, Debug)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum ShellError {
    /// Unable to read input or write output.
    #[error("Unable to read or write to the console: {0}")]
    Io(#[from] io::Error),
    /// Unable to convert the grid into JSON.
    #[error("Unable to convert the grid into JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The input ended whilst a value was still needed.
    #[error("Input ended before the grid was created")]
    InputClosed,
}

/// How the shell ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellOutcome {
    /// The user asked to quit.
    Quit,
    /// Every cell on the grid died.
    Extinct,
    /// The input ended.
    InputClosed,
}

/// How each generation of the grid is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Rows of space separated 0s & 1s, preceded by the generation.
    Text,
    /// A JSON [`gol_core::GridSnapshot`] on a single line.
    Json,
}

/// Drives a [`Simulator`] from user commands, printing the grid after each generation.
pub(crate) struct Shell<S: Simulator> {
    simulator: S,
    speed: SimulationSpeed,
    format: OutputFormat,
}

impl<S: Simulator> Shell<S> {
    pub(crate) fn new(simulator: S, speed: SimulationSpeed, format: OutputFormat) -> Self {
        Self {
            simulator,
            speed,
            format,
        }
    }

    /// Prints the starting grid, then reads & executes commands until the user quits, every cell dies or the input
    /// ends.
    pub(crate) fn run(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<ShellOutcome, ShellError> {
        self.message(output, format_args!("{INITIALISED}\n"))?;
        self.print_grid(output)?;

        let mut line = String::new();
        loop {
            self.message(output, format_args!("{COMMAND_PROMPT}"))?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(ShellOutcome::InputClosed);
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::warn!("{err}");
                    self.message(output, format_args!("\n{err} - {VALID_COMMANDS}\n"))?;
                    continue;
                }
            };

            match command {
                Command::Quit => return Ok(ShellOutcome::Quit),
                Command::Next => {
                    if self.step(output)? {
                        return Ok(ShellOutcome::Extinct);
                    }
                }
                Command::Run(generations) => {
                    // Used to control the generations per second.
                    let mut tick_rate_limiter = self.speed.get().map(|ticks_per_second| {
                        let mut interval =
                            spin_sleep_util::interval(Duration::from_secs(1) / ticks_per_second.get());
                        interval.set_missed_tick_behavior(spin_sleep_util::MissedTickBehavior::Skip);
                        interval
                    });

                    for _ in 0..generations.get() {
                        if let Some(tick_rate_limiter) = tick_rate_limiter.as_mut() {
                            tick_rate_limiter.tick();
                        }

                        if self.step(output)? {
                            return Ok(ShellOutcome::Extinct);
                        }
                    }
                }
            }
        }
    }

    /// Advances the simulation one generation & prints the result.
    /// Returns true if every cell is dead.
    fn step(&mut self, output: &mut impl Write) -> Result<bool, ShellError> {
        self.simulator.advance();

        self.message(output, format_args!("{NEW_STATE}\n"))?;
        self.print_grid(output)?;

        if self.simulator.is_extinct() {
            log::info!("Every cell died on generation {}", self.simulator.get_generation());
            self.message(output, format_args!("{GAME_OVER}\n"))?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Writes text meant for a person at the console.
    /// Nothing is written when printing JSON, so the output only contains snapshots.
    fn message(&self, output: &mut impl Write, message: fmt::Arguments<'_>) -> Result<(), ShellError> {
        if self.format == OutputFormat::Text {
            output.write_fmt(message)?;
        }

        Ok(())
    }

    fn print_grid(&self, output: &mut impl Write) -> Result<(), ShellError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(output, "{GENERATION}{}", self.simulator.get_generation())?;
                writeln!(output, "{}", self.simulator.render())?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, &self.simulator.snapshot())?;
                writeln!(output)?;
            }
        }

        Ok(())
    }
}

/// Converts a dimension entered by the user into a grid dimension.
///
/// Negative dimensions become zero, which no config accepts, so they are replaced by the default size like any other
/// invalid dimension.
pub(crate) fn dimension_from_signed(dimension: i64) -> usize {
    usize::try_from(dimension).unwrap_or(0)
}

/// Prompts for a grid dimension until a whole number is entered.
/// Any whole number is accepted, including negative numbers.
pub(crate) fn read_dimension(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<usize, ShellError> {
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }

        match line.trim().parse() {
            Ok(dimension) => return Ok(dimension_from_signed(dimension)),
            Err(_) => writeln!(output, "{INVALID_NUMBER}")?,
        }
    }
}
