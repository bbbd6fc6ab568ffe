use std::{fs::File, io::ErrorKind, num::NonZeroU32, path::Path};

use gol_core::GridConfig;

/// The ticks per second used when a speed of zero is requested.
const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// The possible errors when loading the settings file.
#[derive(thiserror::Error, Debug)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum SettingsError {
    /// Unable to read the settings file.
    #[error("Unable to read settings file: {0}")]
    FileRead(#[from] std::io::Error),
    /// The file contains invalid data.
    #[error("File is not a valid settings file: {0}")]
    InvalidData(#[from] serde_json::Error),
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Settings {
    /// The bounds requested grid sizes are checked against.
    pub(crate) grid: GridConfig,
    /// How fast the `run` command advances the grid.
    pub(crate) speed: SimulationSpeed,
}

impl Settings {
    /// Loads the settings from the given file.
    ///
    /// If the file does not exist, the default settings are written to it & returned.
    pub(crate) fn load(path: &Path) -> Result<Self, SettingsError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No settings found at {path:?}, using defaults");
                let settings = Settings::default();
                if let Err(err) = settings.save(path) {
                    log::warn!("Unable to write default settings to {path:?}: {err}");
                }
                return Ok(settings);
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_reader(file)?)
    }

    /// Writes the settings to the given file, replacing any existing settings.
    pub(crate) fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// The speed the simulation runs at when running multiple generations.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq)]
pub(crate) struct SimulationSpeed {
    pub(crate) ticks_per_second: Option<NonZeroU32>,
}

impl Default for SimulationSpeed {
    fn default() -> Self {
        Self::new(DEFAULT_TICKS_PER_SECOND)
    }
}

impl SimulationSpeed {
    pub(crate) const UNCAPPED: Self = {
        Self {
            ticks_per_second: None,
        }
    };

    /// A speed of zero ticks per second is replaced with the default speed.
    pub(crate) fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second: NonZeroU32::new(ticks_per_second)
                .or(NonZeroU32::new(DEFAULT_TICKS_PER_SECOND)),
        }
    }

    /// Gets the ticks per second the simulation will run at.
    /// If [`None`] is returned there is no cap for the simulation speed.
    pub(crate) fn get(&self) -> Option<NonZeroU32> {
        self.ticks_per_second
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    /// A missing settings file gives the defaults & creates the file.
    fn missing_file_uses_defaults() {
        let temp_dir = tempdir().expect("Able to create temp dir");
        let path = temp_dir.path().join("settings.json");

        let settings = Settings::load(&path).expect("Missing settings must not error");
        assert_eq!(settings, Settings::default());
        assert!(path.exists(), "Default settings must be written.");

        let reloaded = Settings::load(&path).expect("Written defaults must load");
        assert_eq!(reloaded, Settings::default());
    }

    #[test]
    /// Fields missing from the file take their default values.
    fn partial_file() {
        let temp_dir = tempdir().expect("Able to create temp dir");
        let path = temp_dir.path().join("settings.json");
        let mut file = File::create(&path).expect("Able to create settings file");
        write!(file, r#"{{"speed":{{"ticks_per_second":null}}}}"#).expect("Able to write file");

        let settings = Settings::load(&path).expect("Partial settings must load");
        assert_eq!(settings.grid, GridConfig::default());
        assert_eq!(settings.speed, SimulationSpeed::UNCAPPED);
    }

    #[test]
    /// Grid bounds that are out of order are rejected.
    fn invalid_grid_bounds() {
        let temp_dir = tempdir().expect("Able to create temp dir");
        let path = temp_dir.path().join("settings.json");
        let mut file = File::create(&path).expect("Able to create settings file");
        write!(
            file,
            r#"{{"grid":{{"minimum_size":10,"default_size":5,"maximum_size":20}}}}"#
        )
        .expect("Able to write file");

        let error = Settings::load(&path).unwrap_err();
        assert_eq!(error.kind(), SettingsErrorKind::InvalidData);
    }

    #[test]
    /// A file that is not valid settings json is an error rather than being overwritten.
    fn malformed_file() {
        let temp_dir = tempdir().expect("Able to create temp dir");
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "not json").expect("Able to write file");

        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::InvalidData(_))
        ));
    }

    #[test]
    /// A speed of zero falls back to the default speed.
    fn zero_speed() {
        assert_eq!(
            SimulationSpeed::new(0).get().map(NonZeroU32::get),
            Some(DEFAULT_TICKS_PER_SECOND)
        );
        assert_eq!(SimulationSpeed::new(3).get().map(NonZeroU32::get), Some(3));
    }
}
