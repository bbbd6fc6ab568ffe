use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The number of columns on the grid. Prompted for if not given.
    /// Sizes outside the configured bounds, including negative sizes, are replaced by the default size.
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    pub(crate) width: Option<i64>,

    /// The number of rows on the grid. Prompted for if not given.
    /// Sizes outside the configured bounds, including negative sizes, are replaced by the default size.
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    pub(crate) height: Option<i64>,

    /// A file containing the starting grid, as rows of space separated 0s & 1s.
    /// A random grid is generated if not given.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) pattern: Option<PathBuf>,

    /// Seeds the random starting grid, so the same seed always gives the same grid.
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// The path to the directory which will contain the user configuration data.
    #[arg(short, long, value_name = "DIR")]
    pub(crate) config_path: Option<PathBuf>,

    /// Print each generation as JSON rather than as text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Negative sizes are passed through rather than being treated as flags.
    fn negative_dimensions() {
        let args = Args::try_parse_from(["gol_console", "-x", "-3", "--height", "-10"])
            .expect("Negative dimensions must parse");

        assert_eq!(args.width, Some(-3));
        assert_eq!(args.height, Some(-10));
    }

    #[test]
    /// Every argument is optional.
    fn defaults() {
        let args = Args::try_parse_from(["gol_console"]).expect("No arguments are required");

        assert_eq!(args.width, None);
        assert!(args.pattern.is_none());
        assert!(!args.json);
    }
}
