use super::domain::Loadout;

/// Uridium spent per second of sustained fire.
///
/// Lasers and rockets each draw one round per second; the launcher only
/// draws while it is not reloading.
pub fn compute_cost_per_second(loadout: &Loadout) -> f64 {
    let beam = loadout.beam_count() as f64
        * (loadout.beam_ammo.cost_uridium + loadout.beam_refining.cost_uridium);
    let projectile =
        loadout.projectile_ammo.cost_uridium + loadout.projectile_refining.cost_uridium;
    let launcher = loadout
        .launcher
        .sustained(loadout.launcher_ammo.cost_uridium, 0.0);

    beam + projectile + launcher
}
