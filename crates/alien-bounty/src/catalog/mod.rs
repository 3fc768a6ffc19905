mod loadout;
mod parser;
mod roster;
mod weapons;

use crate::bounty::{Loadout, Target};
use crate::config::DataPaths;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

pub use loadout::{validate_efficiency, LoadoutSelection};
pub use roster::{load_targets_from_path, load_targets_from_reader};
pub use weapons::WeaponCatalog;

/// Kind of identifier looked up while assembling a loadout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Laser,
    RocketLauncher,
    LaserAmmo,
    LauncherAmmo,
    RocketAmmo,
    DroneFormation,
    Refining,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Laser => "laser",
            Self::RocketLauncher => "rocket launcher",
            Self::LaserAmmo => "laser ammo",
            Self::LauncherAmmo => "launcher ammo",
            Self::RocketAmmo => "rocket ammo",
            Self::DroneFormation => "drone formation",
            Self::Refining => "refining",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid {document} data: {source}")]
    Json {
        document: &'static str,
        source: serde_json::Error,
    },
    #[error("configuration key not found: {category} '{key}'")]
    UnknownKey { category: Category, key: String },
    #[error("duplicate {category} identifier '{key}'")]
    Duplicate { category: Category, key: String },
    #[error("invalid {subject}: {reason}")]
    Invalid { subject: String, reason: String },
}

pub(crate) fn check_finite(subject: &str, field: &str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CatalogError::Invalid {
            subject: subject.to_string(),
            reason: format!("{field} must be a finite number, got {value}"),
        })
    }
}

pub(crate) fn check_non_negative(
    subject: &str,
    field: &str,
    value: f64,
) -> Result<(), CatalogError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::Invalid {
            subject: subject.to_string(),
            reason: format!("{field} must be a non-negative number, got {value}"),
        })
    }
}

/// Everything the reward engine needs, validated and resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BountyInputs {
    pub targets: Vec<Target>,
    pub loadout: Loadout,
    pub efficiency: f64,
}

impl BountyInputs {
    pub fn load(paths: &DataPaths) -> Result<Self, CatalogError> {
        let catalog = WeaponCatalog::from_path(&paths.weapons)?;
        info!(
            lasers = catalog.count(Category::Laser),
            launchers = catalog.count(Category::RocketLauncher),
            path = %paths.weapons.display(),
            "weapon catalog loaded"
        );

        let targets = load_targets_from_path(&paths.aliens)?;
        info!(aliens = targets.len(), path = %paths.aliens.display(), "alien roster loaded");

        let LoadoutSelection {
            loadout,
            efficiency,
        } = LoadoutSelection::from_path(&paths.loadout, &catalog)?;
        info!(
            lasers = loadout.beam_count(),
            launcher = %loadout.launcher.name,
            efficiency,
            "loadout resolved"
        );

        Ok(Self {
            targets,
            loadout,
            efficiency,
        })
    }
}
