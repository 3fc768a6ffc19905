use super::domain::{Loadout, WeaponClass};
use serde::Serialize;

/// Mean share of nominal damage that actually lands after falloff.
pub const AVERAGE_DAMAGE_FACTOR: f64 = 0.75;
/// Share of laser shots that hit.
pub const BEAM_ACCURACY: f64 = 0.8;
/// Beginner boost bonus; the launcher formula also adds it to the reload cycle.
pub const BEGINNER_BOOST: f64 = 0.6;
pub const ELITE_BEAM_BOOST: f64 = 0.5;
pub const ELITE_PROJECTILE_BOOST: f64 = 1.0;

/// Per-class damage rates before the average damage factor is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DamageBreakdown {
    pub beam: f64,
    pub projectile: f64,
    pub launcher: f64,
}

impl DamageBreakdown {
    pub fn subtotal(&self, class: WeaponClass) -> f64 {
        match class {
            WeaponClass::Beam => self.beam,
            WeaponClass::Projectile => self.projectile,
            WeaponClass::Launcher => self.launcher,
        }
    }

    pub fn total(&self) -> f64 {
        (self.beam + self.projectile + self.launcher) * AVERAGE_DAMAGE_FACTOR
    }
}

pub fn damage_breakdown(loadout: &Loadout, target_is_low_tier: bool) -> DamageBreakdown {
    let elite_active = loadout.has_elite_boost && target_is_low_tier;
    let beginner = if loadout.has_beginner_boost {
        BEGINNER_BOOST
    } else {
        0.0
    };
    let (elite_beam, elite_projectile) = if elite_active {
        (ELITE_BEAM_BOOST, ELITE_PROJECTILE_BOOST)
    } else {
        (0.0, 0.0)
    };

    let beam_boost = 1.0
        + loadout.beam_refining.boost
        + elite_beam
        + loadout.formation.beam_damage_boost
        + beginner;
    let beam =
        loadout.beam_base_damage() * loadout.beam_ammo.multiplier * beam_boost * BEAM_ACCURACY;

    let projectile_boost = 1.0
        + loadout.projectile_refining.boost
        + elite_projectile
        + loadout.formation.projectile_damage_boost
        + beginner;
    let projectile = loadout.projectile_ammo.damage * projectile_boost;

    let launcher = loadout
        .launcher
        .sustained(loadout.launcher_ammo.damage, beginner);

    DamageBreakdown {
        beam,
        projectile,
        launcher,
    }
}

/// Sustained damage per second of the whole loadout.
pub fn compute_dps(loadout: &Loadout, target_is_low_tier: bool) -> f64 {
    damage_breakdown(loadout, target_is_low_tier).total()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::bounty::domain::{
        BeamAmmo, BeamSlot, FormationBoost, LauncherSpec, ProjectileAmmo, RefiningBoost,
    };

    fn no_refining() -> RefiningBoost {
        RefiningBoost {
            name: "none".to_string(),
            boost: 0.0,
            cost_uridium: 0.0,
        }
    }

    fn inert_projectile(name: &str) -> ProjectileAmmo {
        ProjectileAmmo {
            name: name.to_string(),
            damage: 0.0,
            cost_uridium: 0.0,
            cost_credits: 0.0,
        }
    }

    /// Two lasers of 100 base damage with x1.5 ammo and nothing else.
    pub(crate) fn beam_only_loadout() -> Loadout {
        Loadout {
            beams: vec![BeamSlot {
                base_damage: 100.0,
                count: 2,
            }],
            launcher: LauncherSpec {
                name: "HST-2".to_string(),
                magazine_size: 5,
                reload_time: 5.0,
            },
            projectile_ammo: inert_projectile("none"),
            beam_ammo: BeamAmmo {
                name: "x1.5".to_string(),
                multiplier: 1.5,
                cost_uridium: 0.0,
                cost_credits: 0.0,
            },
            launcher_ammo: inert_projectile("none"),
            formation: FormationBoost {
                name: "standard".to_string(),
                projectile_damage_boost: 0.0,
                beam_damage_boost: 0.0,
            },
            beam_refining: no_refining(),
            projectile_refining: no_refining(),
            has_elite_boost: false,
            has_beginner_boost: false,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn beam_only_loadout_matches_reference_dps() {
        let loadout = beam_only_loadout();
        let breakdown = damage_breakdown(&loadout, false);
        assert_close(breakdown.beam, 240.0);
        assert_close(breakdown.projectile, 0.0);
        assert_close(breakdown.launcher, 0.0);
        assert_close(compute_dps(&loadout, false), 180.0);
    }

    #[test]
    fn empty_loadout_deals_no_damage() {
        let mut loadout = beam_only_loadout();
        loadout.beams.clear();
        loadout.has_elite_boost = true;
        loadout.has_beginner_boost = true;
        assert_eq!(compute_dps(&loadout, true), 0.0);
        assert_eq!(compute_dps(&loadout, false), 0.0);
    }

    #[test]
    fn elite_boost_only_applies_to_low_tier_targets() {
        let mut loadout = beam_only_loadout();
        loadout.projectile_ammo.damage = 1000.0;
        loadout.has_elite_boost = true;

        let low = damage_breakdown(&loadout, true);
        let high = damage_breakdown(&loadout, false);

        assert_close(low.beam, 100.0 * 2.0 * 1.5 * 1.5 * 0.8);
        assert_close(high.beam, 240.0);
        assert_close(low.projectile, 2000.0);
        assert_close(high.projectile, 1000.0);
        assert!(compute_dps(&loadout, true) >= compute_dps(&loadout, false));

        loadout.has_elite_boost = false;
        assert_close(
            compute_dps(&loadout, true),
            compute_dps(&loadout, false),
        );
    }

    #[test]
    fn boosts_stack_additively() {
        let mut loadout = beam_only_loadout();
        loadout.projectile_ammo.damage = 1000.0;
        loadout.beam_refining.boost = 0.1;
        loadout.projectile_refining.boost = 0.2;
        loadout.formation.beam_damage_boost = 0.05;
        loadout.formation.projectile_damage_boost = 0.25;
        loadout.has_beginner_boost = true;

        let breakdown = damage_breakdown(&loadout, false);
        assert_close(breakdown.beam, 300.0 * (1.0 + 0.1 + 0.05 + 0.6) * 0.8);
        assert_close(breakdown.projectile, 1000.0 * (1.0 + 0.2 + 0.25 + 0.6));
    }

    #[test]
    fn launcher_throughput_accounts_for_reload_and_beginner_boost() {
        let mut loadout = beam_only_loadout();
        loadout.beams.clear();
        loadout.launcher_ammo.damage = 2000.0;

        assert_close(damage_breakdown(&loadout, false).launcher, 1000.0);

        loadout.has_beginner_boost = true;
        assert_close(
            damage_breakdown(&loadout, false).launcher,
            2000.0 * 5.0 / (5.0 + 5.0 + 0.6),
        );
    }

    #[test]
    fn breakdown_exposes_subtotals_per_class() {
        let breakdown = DamageBreakdown {
            beam: 1.0,
            projectile: 2.0,
            launcher: 3.0,
        };
        let subtotals: Vec<f64> = WeaponClass::ordered()
            .into_iter()
            .map(|class| breakdown.subtotal(class))
            .collect();
        assert_eq!(subtotals, vec![1.0, 2.0, 3.0]);
        assert_close(breakdown.total(), 4.5);
    }
}
