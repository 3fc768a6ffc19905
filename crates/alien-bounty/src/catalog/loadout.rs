use super::parser::{self, LoadoutDocument};
use super::weapons::WeaponCatalog;
use super::CatalogError;
use crate::bounty::{BeamSlot, Loadout};
use std::io::Read;
use std::path::Path;

/// A resolved loadout together with the efficiency derating it was
/// configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadoutSelection {
    pub loadout: Loadout,
    pub efficiency: f64,
}

impl LoadoutSelection {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalog: &WeaponCatalog,
    ) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, catalog)
    }

    pub fn from_reader<R: Read>(reader: R, catalog: &WeaponCatalog) -> Result<Self, CatalogError> {
        let document: LoadoutDocument = parser::parse_document(reader, "loadout")?;
        resolve(document, catalog)
    }
}

/// Accepts efficiency deratings in (0, 1].
pub fn validate_efficiency(value: f64) -> Result<f64, CatalogError> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(CatalogError::Invalid {
            subject: "efficiency".to_string(),
            reason: format!("must lie in (0, 1], got {value}"),
        })
    }
}

fn resolve(
    document: LoadoutDocument,
    catalog: &WeaponCatalog,
) -> Result<LoadoutSelection, CatalogError> {
    let beams = document
        .weapons
        .lasers
        .iter()
        .map(|mount| {
            Ok(BeamSlot {
                base_damage: catalog.laser_damage(&mount.key)?,
                count: mount.amount,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;
    beams
        .iter()
        .try_fold(0u32, |total, slot| total.checked_add(slot.count))
        .ok_or_else(|| CatalogError::Invalid {
            subject: "lasers".to_string(),
            reason: "total laser amount exceeds u32::MAX".to_string(),
        })?;

    let loadout = Loadout {
        beams,
        launcher: catalog.launcher(&document.weapons.rocket_launcher.key)?.clone(),
        projectile_ammo: catalog.rocket_ammo(&document.ammos.rockets)?.clone(),
        beam_ammo: catalog.laser_ammo(&document.ammos.lasers)?.clone(),
        launcher_ammo: catalog.launcher_ammo(&document.ammos.rocket_launcher)?.clone(),
        formation: catalog.formation(&document.drone_formation)?.clone(),
        beam_refining: catalog.refining(&document.laser_refining)?.clone(),
        projectile_refining: catalog.refining(&document.rocket_refining)?.clone(),
        has_elite_boost: document.leonov_boost,
        has_beginner_boost: document.beginner_boost,
    };

    Ok(LoadoutSelection {
        loadout,
        efficiency: validate_efficiency(document.efficiency)?,
    })
}
