use super::cost::compute_cost_per_second;
use super::damage::damage_breakdown;
use super::domain::{Loadout, RewardResult, Target};
use std::cmp::Ordering;
use tracing::debug;

const SECONDS_PER_HOUR: f64 = 3600.0;
/// Shortest engagement accounted for, however much damage overkills.
pub const MIN_TIME_TO_KILL: f64 = 1.0;

/// Loadout-level rates computed once and reused for every alien.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BountyEvaluator {
    dps_low_tier: f64,
    dps_high_tier: f64,
    cost_per_second: f64,
    efficiency: f64,
}

impl BountyEvaluator {
    /// `efficiency` is the uptime derating in (0, 1] applied to hourly yield.
    pub fn new(loadout: &Loadout, efficiency: f64) -> Self {
        let low = damage_breakdown(loadout, true);
        let high = damage_breakdown(loadout, false);
        let cost_per_second = compute_cost_per_second(loadout);

        debug!(
            beam = low.beam,
            projectile = low.projectile,
            launcher = low.launcher,
            "low-tier damage breakdown"
        );
        debug!(
            beam = high.beam,
            projectile = high.projectile,
            launcher = high.launcher,
            "high-tier damage breakdown"
        );
        debug!(cost_per_second, efficiency, "loadout uridium cost");

        Self {
            dps_low_tier: low.total(),
            dps_high_tier: high.total(),
            cost_per_second,
            efficiency,
        }
    }

    pub fn dps_for(&self, target_is_low_tier: bool) -> f64 {
        if target_is_low_tier {
            self.dps_low_tier
        } else {
            self.dps_high_tier
        }
    }

    pub fn cost_per_second(&self) -> f64 {
        self.cost_per_second
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn evaluate_target(&self, target: &Target) -> RewardResult {
        let dps = self.dps_for(target.is_low_tier);
        let raw_reward = target.uridium;

        // A loadout without damage never finishes the kill; firing at it
        // burns uridium forever unless the ammunition is free.
        if dps.is_nan() || dps <= 0.0 {
            let (net_reward_per_kill, yield_per_hour) = if self.cost_per_second > 0.0 {
                (f64::NEG_INFINITY, f64::NEG_INFINITY)
            } else {
                (raw_reward, 0.0)
            };
            return RewardResult {
                target_name: target.name.clone(),
                time_to_kill: f64::INFINITY,
                raw_reward,
                net_reward_per_kill,
                yield_per_hour,
            };
        }

        let time_to_kill = (target.hit_points / dps).max(MIN_TIME_TO_KILL);
        let net_reward_per_kill = raw_reward - self.cost_per_second * time_to_kill;
        let yield_per_hour =
            net_reward_per_kill * (SECONDS_PER_HOUR / time_to_kill) * self.efficiency;

        RewardResult {
            target_name: target.name.clone(),
            time_to_kill,
            raw_reward,
            net_reward_per_kill,
            yield_per_hour,
        }
    }

    /// Evaluates every alien and orders the results by hourly yield, best
    /// first. Equal yields keep their input order.
    pub fn rank(&self, targets: &[Target]) -> Vec<RewardResult> {
        let mut results: Vec<RewardResult> = targets
            .iter()
            .map(|target| self.evaluate_target(target))
            .collect();
        results.sort_by(|a, b| {
            b.yield_per_hour
                .partial_cmp(&a.yield_per_hour)
                .unwrap_or(Ordering::Equal)
        });
        results
    }
}

pub fn evaluate(targets: &[Target], loadout: &Loadout, efficiency: f64) -> Vec<RewardResult> {
    BountyEvaluator::new(loadout, efficiency).rank(targets)
}
