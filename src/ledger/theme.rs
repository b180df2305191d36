use crate::storage::{Storage, StorageError};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::warn;

const THEME_KEY: &str = "theme";

/// The persisted colour scheme preference.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark
}

impl Theme {
    /// Reads the stored preference, falling back to `Light` when it is missing or unknown.
    pub fn load<S: Storage>(storage: &S) -> Theme {
        match storage.load(THEME_KEY) {
            Ok(Some(value)) => Theme::from_str(&value).unwrap_or_else(|error| {
                warn!("{error}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(error) => {
                warn!("{error}");
                Theme::default()
            }
        }
    }

    pub fn save<S: Storage>(&self, storage: &S) -> Result<(), StorageError> {
        storage.save(THEME_KEY, &self.to_string())
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light
        }
    }
}

impl Display for Theme {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(formatter, "light"),
            Theme::Dark => write!(formatter, "dark")
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{other}'"))
        }
    }
}
