use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use app_dirs2::{AppDataType, AppInfo, get_app_root};
use args::Args;
use clap::Parser;
use gol_core::{GridSize, InitialPattern};
use gol_grid::Grid;
use rand::{SeedableRng, rngs::StdRng};
use settings::Settings;
use shell::{OutputFormat, Shell, dimension_from_signed, read_dimension};

mod args;
mod commands;
mod settings;
mod shell;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut config_path = match args.config_path {
        Some(config_path) => config_path,
        None => user_config_path()?,
    };
    std::fs::create_dir_all(config_path.as_path())?;
    config_path.push("settings.json");

    let settings = Settings::load(&config_path)
        .inspect_err(|err| log::error!("{} - {err}", error_text::SETTINGS_LOAD))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let file_pattern = args
        .pattern
        .map(|path| InitialPattern::load(path))
        .transpose()
        .inspect_err(|err| log::error!("{} - {err}", error_text::PATTERN_LOAD))?;

    // Missing dimensions are taken from the pattern file if there is one, otherwise asked for.
    // Prompts go to stderr when printing JSON so stdout only contains snapshots.
    let mut stderr = io::stderr().lock();
    let mut prompt_output: &mut dyn Write = match args.json {
        true => &mut stderr,
        false => &mut output,
    };
    let width = match (args.width, &file_pattern) {
        (Some(width), _) => dimension_from_signed(width),
        (None, Some(pattern)) => pattern.get_size().get_width(),
        (None, None) => read_dimension(&mut input, &mut prompt_output, lang::WIDTH_PROMPT)?,
    };
    let height = match (args.height, &file_pattern) {
        (Some(height), _) => dimension_from_signed(height),
        (None, Some(pattern)) => pattern.get_size().get_height(),
        (None, None) => read_dimension(&mut input, &mut prompt_output, lang::HEIGHT_PROMPT)?,
    };

    let pattern = match (file_pattern, args.seed) {
        (Some(pattern), _) => pattern,
        (None, seed) => {
            // Generate the random grid at the size the grid will actually be.
            let size = GridSize::clamped(width, height, &settings.grid);
            match seed {
                Some(seed) => InitialPattern::random(size, &mut StdRng::seed_from_u64(seed)),
                None => InitialPattern::random(size, &mut rand::thread_rng()),
            }
        }
    };

    let grid = Grid::with_config(&settings.grid, width, height, &pattern);
    let format = match args.json {
        true => OutputFormat::Json,
        false => OutputFormat::Text,
    };

    let outcome = Shell::new(grid, settings.speed, format)
        .run(&mut input, &mut output)
        .inspect_err(|err| log::error!("{} - {err}", error_text::SHELL))?;
    log::info!("Shell finished: {outcome:?}");

    Ok(())
}

/// The information used to get the default settings location.
pub const APP_INFO: AppInfo = AppInfo {
    name: "bounded_game_of_life",
    author: "tye",
};

/// The path to where user configuration will be stored.
///
/// On Linux:
/// `/home/<user>/.config/bounded_game_of_life`
fn user_config_path() -> Result<PathBuf, app_dirs2::AppDirsError> {
    get_app_root(AppDataType::UserConfig, &APP_INFO)
}

/// Creates a public constant string with the name as the name of the constant
/// and the text as the value of the string.
///
/// # Examples
/// ```
/// lang!{QUOTE, "Ya like jazz?"}
/// assert_eq!(QUOTE, "Ya like jazz?");
/// ```
#[macro_export]
macro_rules! lang {
    {$($name:tt, $text:literal);*} => {
        $(
        pub const $name: &str = $text;
        )*
    };
}

mod error_text {
    lang! {
        SETTINGS_LOAD, "Unable to load settings.";
        PATTERN_LOAD, "Unable to load the starting pattern.";
        SHELL, "The game ended unexpectedly."
    }
}

mod lang {
    use crate::lang;

    lang! {
        WIDTH_PROMPT, "\nPlease enter the number of columns (X-axis) for the grid: ";
        HEIGHT_PROMPT, "Please enter the number of rows (Y-axis) for the grid: "
    }
}
