use super::parser::{self, WeaponsDocument};
use super::{check_finite, check_non_negative, CatalogError, Category};
use crate::bounty::{BeamAmmo, FormationBoost, LauncherSpec, ProjectileAmmo, RefiningBoost};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Equipment reference tables keyed by identifier. Built once and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct WeaponCatalog {
    lasers: HashMap<String, f64>,
    launchers: HashMap<String, LauncherSpec>,
    laser_ammo: HashMap<String, BeamAmmo>,
    launcher_ammo: HashMap<String, ProjectileAmmo>,
    rocket_ammo: HashMap<String, ProjectileAmmo>,
    formations: HashMap<String, FormationBoost>,
    refinings: HashMap<String, RefiningBoost>,
}

impl WeaponCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: WeaponsDocument = parser::parse_document(reader, "weapons")?;
        Self::from_document(document)
    }

    fn from_document(document: WeaponsDocument) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for row in document.lasers {
            check_non_negative(&row.key, "damage", row.damage)?;
            insert_unique(&mut catalog.lasers, Category::Laser, row.key, row.damage)?;
        }

        for row in document.rocket_launchers {
            if row.mag_size == 0 {
                return Err(CatalogError::Invalid {
                    subject: row.key,
                    reason: "mag_size must be at least 1".to_string(),
                });
            }
            check_non_negative(&row.key, "reload_time", row.reload_time)?;
            let spec = LauncherSpec {
                name: row.key.clone(),
                magazine_size: row.mag_size,
                reload_time: row.reload_time,
            };
            insert_unique(&mut catalog.launchers, Category::RocketLauncher, row.key, spec)?;
        }

        for row in document.ammos.laser {
            check_non_negative(&row.key, "multiplier", row.multiplier)?;
            check_non_negative(&row.key, "cost_u", row.cost_u)?;
            check_non_negative(&row.key, "cost_c", row.cost_c)?;
            let ammo = BeamAmmo {
                name: row.key.clone(),
                multiplier: row.multiplier,
                cost_uridium: row.cost_u,
                cost_credits: row.cost_c,
            };
            insert_unique(&mut catalog.laser_ammo, Category::LaserAmmo, row.key, ammo)?;
        }

        for (category, rows, table) in [
            (
                Category::LauncherAmmo,
                document.ammos.launcher,
                &mut catalog.launcher_ammo,
            ),
            (
                Category::RocketAmmo,
                document.ammos.rocket,
                &mut catalog.rocket_ammo,
            ),
        ] {
            for row in rows {
                check_non_negative(&row.key, "damage", row.damage)?;
                check_non_negative(&row.key, "cost_u", row.cost_u)?;
                check_non_negative(&row.key, "cost_c", row.cost_c)?;
                let ammo = ProjectileAmmo {
                    name: row.key.clone(),
                    damage: row.damage,
                    cost_uridium: row.cost_u,
                    cost_credits: row.cost_c,
                };
                insert_unique(table, category, row.key, ammo)?;
            }
        }

        for row in document.drone_formations {
            check_finite(&row.key, "rocket_boost", row.rocket_boost)?;
            check_finite(&row.key, "laser_boost", row.laser_boost)?;
            let formation = FormationBoost {
                name: row.key.clone(),
                projectile_damage_boost: row.rocket_boost,
                beam_damage_boost: row.laser_boost,
            };
            insert_unique(
                &mut catalog.formations,
                Category::DroneFormation,
                row.key,
                formation,
            )?;
        }

        for row in document.refining {
            check_finite(&row.key, "boost", row.boost)?;
            check_non_negative(&row.key, "cost_u", row.cost_u)?;
            let refining = RefiningBoost {
                name: row.key.clone(),
                boost: row.boost,
                cost_uridium: row.cost_u,
            };
            insert_unique(&mut catalog.refinings, Category::Refining, row.key, refining)?;
        }

        Ok(catalog)
    }

    pub fn laser_damage(&self, key: &str) -> Result<f64, CatalogError> {
        lookup(&self.lasers, Category::Laser, key).copied()
    }

    pub fn launcher(&self, key: &str) -> Result<&LauncherSpec, CatalogError> {
        lookup(&self.launchers, Category::RocketLauncher, key)
    }

    pub fn laser_ammo(&self, key: &str) -> Result<&BeamAmmo, CatalogError> {
        lookup(&self.laser_ammo, Category::LaserAmmo, key)
    }

    pub fn launcher_ammo(&self, key: &str) -> Result<&ProjectileAmmo, CatalogError> {
        lookup(&self.launcher_ammo, Category::LauncherAmmo, key)
    }

    pub fn rocket_ammo(&self, key: &str) -> Result<&ProjectileAmmo, CatalogError> {
        lookup(&self.rocket_ammo, Category::RocketAmmo, key)
    }

    pub fn formation(&self, key: &str) -> Result<&FormationBoost, CatalogError> {
        lookup(&self.formations, Category::DroneFormation, key)
    }

    pub fn refining(&self, key: &str) -> Result<&RefiningBoost, CatalogError> {
        lookup(&self.refinings, Category::Refining, key)
    }

    /// Number of identifiers registered for a category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Laser => self.lasers.len(),
            Category::RocketLauncher => self.launchers.len(),
            Category::LaserAmmo => self.laser_ammo.len(),
            Category::LauncherAmmo => self.launcher_ammo.len(),
            Category::RocketAmmo => self.rocket_ammo.len(),
            Category::DroneFormation => self.formations.len(),
            Category::Refining => self.refinings.len(),
        }
    }
}

fn insert_unique<T>(
    table: &mut HashMap<String, T>,
    category: Category,
    key: String,
    value: T,
) -> Result<(), CatalogError> {
    if table.contains_key(&key) {
        return Err(CatalogError::Duplicate { category, key });
    }
    table.insert(key, value);
    Ok(())
}

fn lookup<'a, T>(
    table: &'a HashMap<String, T>,
    category: Category,
    key: &str,
) -> Result<&'a T, CatalogError> {
    table.get(key).ok_or_else(|| CatalogError::UnknownKey {
        category,
        key: key.to_string(),
    })
}
