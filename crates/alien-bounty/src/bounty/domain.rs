use serde::Serialize;

/// The three independent weapon classes a ship can field at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    Beam,
    Projectile,
    Launcher,
}

impl WeaponClass {
    pub const fn ordered() -> [Self; 3] {
        [Self::Beam, Self::Projectile, Self::Launcher]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beam => "Lasers",
            Self::Projectile => "Rockets",
            Self::Launcher => "Rocket launcher",
        }
    }
}

/// An alien that can be hunted for a bounty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    pub name: String,
    pub hit_points: f64,
    pub credits: f64,
    pub uridium: f64,
    /// Low-tier aliens are eligible for the elite (Leonov) boost.
    pub is_low_tier: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LauncherSpec {
    pub name: String,
    pub magazine_size: u32,
    pub reload_time: f64,
}

impl LauncherSpec {
    /// Spreads a per-shot quantity over a full magazine cycle, with `extra`
    /// seconds added to the reload.
    pub(crate) fn sustained(&self, per_shot: f64, extra: f64) -> f64 {
        let magazine = f64::from(self.magazine_size);
        per_shot * magazine / (magazine + self.reload_time + extra)
    }
}

/// Laser ammunition scales the base damage of every equipped laser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamAmmo {
    pub name: String,
    pub multiplier: f64,
    pub cost_uridium: f64,
    pub cost_credits: f64,
}

/// Rocket and launcher ammunition deal a flat amount of damage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileAmmo {
    pub name: String,
    pub damage: f64,
    pub cost_uridium: f64,
    pub cost_credits: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormationBoost {
    pub name: String,
    pub projectile_damage_boost: f64,
    pub beam_damage_boost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefiningBoost {
    pub name: String,
    pub boost: f64,
    pub cost_uridium: f64,
}

/// One group of identical lasers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeamSlot {
    pub base_damage: f64,
    pub count: u32,
}

/// Complete equipment configuration of the hunting ship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loadout {
    pub beams: Vec<BeamSlot>,
    pub launcher: LauncherSpec,
    pub projectile_ammo: ProjectileAmmo,
    pub beam_ammo: BeamAmmo,
    pub launcher_ammo: ProjectileAmmo,
    pub formation: FormationBoost,
    pub beam_refining: RefiningBoost,
    pub projectile_refining: RefiningBoost,
    pub has_elite_boost: bool,
    pub has_beginner_boost: bool,
}

impl Loadout {
    pub fn beam_count(&self) -> u64 {
        self.beams.iter().map(|slot| u64::from(slot.count)).sum()
    }

    pub fn beam_base_damage(&self) -> f64 {
        self.beams
            .iter()
            .map(|slot| slot.base_damage * f64::from(slot.count))
            .sum()
    }
}

/// Bounty economics of hunting one alien with a given loadout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardResult {
    pub target_name: String,
    /// Seconds, never below one.
    pub time_to_kill: f64,
    pub raw_reward: f64,
    pub net_reward_per_kill: f64,
    pub yield_per_hour: f64,
}
