use super::CatalogError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;

pub(crate) fn parse_document<T, R>(reader: R, document: &'static str) -> Result<T, CatalogError>
where
    T: DeserializeOwned,
    R: Read,
{
    serde_json::from_reader(reader).map_err(|source| CatalogError::Json { document, source })
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeaponsDocument {
    pub(crate) lasers: Vec<LaserRow>,
    pub(crate) rocket_launchers: Vec<LauncherRow>,
    pub(crate) ammos: AmmoSection,
    pub(crate) drone_formations: Vec<FormationRow>,
    pub(crate) refining: Vec<RefiningRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LaserRow {
    #[serde(rename = "type")]
    pub(crate) key: String,
    pub(crate) damage: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LauncherRow {
    #[serde(rename = "type")]
    pub(crate) key: String,
    pub(crate) mag_size: u32,
    pub(crate) reload_time: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AmmoSection {
    pub(crate) laser: Vec<LaserAmmoRow>,
    pub(crate) launcher: Vec<RocketAmmoRow>,
    pub(crate) rocket: Vec<RocketAmmoRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LaserAmmoRow {
    #[serde(rename = "type")]
    pub(crate) key: String,
    pub(crate) multiplier: f64,
    pub(crate) cost_u: f64,
    #[serde(default)]
    pub(crate) cost_c: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RocketAmmoRow {
    #[serde(rename = "type")]
    pub(crate) key: String,
    pub(crate) damage: f64,
    pub(crate) cost_u: f64,
    #[serde(default)]
    pub(crate) cost_c: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FormationRow {
    #[serde(rename = "type")]
    pub(crate) key: String,
    pub(crate) rocket_boost: f64,
    pub(crate) laser_boost: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefiningRow {
    #[serde(rename = "type")]
    pub(crate) key: String,
    pub(crate) boost: f64,
    pub(crate) cost_u: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AliensDocument {
    pub(crate) aliens: Vec<AlienRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlienRow {
    #[serde(rename = "type")]
    pub(crate) name: String,
    pub(crate) hp: f64,
    pub(crate) rewards: RewardsRow,
    #[serde(rename = "isLower")]
    pub(crate) is_lower: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RewardsRow {
    #[serde(default)]
    pub(crate) credits: f64,
    pub(crate) uridium: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoadoutDocument {
    pub(crate) weapons: LoadoutWeapons,
    pub(crate) ammos: LoadoutAmmos,
    pub(crate) drone_formation: String,
    pub(crate) laser_refining: String,
    pub(crate) rocket_refining: String,
    pub(crate) leonov_boost: bool,
    pub(crate) beginner_boost: bool,
    pub(crate) efficiency: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoadoutWeapons {
    pub(crate) lasers: Vec<LaserMount>,
    pub(crate) rocket_launcher: KeyRef,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LaserMount {
    #[serde(rename = "type")]
    pub(crate) key: String,
    pub(crate) amount: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KeyRef {
    #[serde(rename = "type")]
    pub(crate) key: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoadoutAmmos {
    pub(crate) rockets: String,
    pub(crate) lasers: String,
    pub(crate) rocket_launcher: String,
}
