use super::parser::{self, AliensDocument};
use super::{check_finite, CatalogError};
use crate::bounty::Target;
use std::io::Read;
use std::path::Path;

pub fn load_targets_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Target>, CatalogError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_targets_from_reader(file)
}

/// Reads the alien roster, preserving file order.
pub fn load_targets_from_reader<R: Read>(reader: R) -> Result<Vec<Target>, CatalogError> {
    let document: AliensDocument = parser::parse_document(reader, "aliens")?;
    let mut targets = Vec::with_capacity(document.aliens.len());

    for row in document.aliens {
        if !(row.hp.is_finite() && row.hp > 0.0) {
            return Err(CatalogError::Invalid {
                subject: row.name,
                reason: format!("hp must be a positive number, got {}", row.hp),
            });
        }
        check_finite(&row.name, "credits", row.rewards.credits)?;
        check_finite(&row.name, "uridium", row.rewards.uridium)?;

        targets.push(Target {
            name: row.name,
            hit_points: row.hp,
            credits: row.rewards.credits,
            uridium: row.rewards.uridium,
            is_low_tier: row.is_lower,
        });
    }

    Ok(targets)
}
