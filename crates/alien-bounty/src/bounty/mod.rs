mod cost;
mod damage;
pub mod domain;
mod reward;

pub use cost::compute_cost_per_second;
pub use damage::{
    compute_dps, damage_breakdown, DamageBreakdown, AVERAGE_DAMAGE_FACTOR, BEAM_ACCURACY,
    BEGINNER_BOOST, ELITE_BEAM_BOOST, ELITE_PROJECTILE_BOOST,
};
pub use domain::{
    BeamAmmo, BeamSlot, FormationBoost, LauncherSpec, Loadout, ProjectileAmmo, RefiningBoost,
    RewardResult, Target, WeaponClass,
};
pub use reward::{evaluate, BountyEvaluator, MIN_TIME_TO_KILL};
