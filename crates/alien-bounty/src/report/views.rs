use crate::bounty::RewardResult;
use serde::Serialize;

pub const CSV_COLUMNS: [&str; 5] = ["Alien", "ttk", "raw uri", "uri/kill", "uri/hour"];

/// One line of the delimited report, in column order.
#[derive(Debug, Clone, Serialize)]
pub struct RewardRow<'a> {
    pub alien: &'a str,
    pub ttk: f64,
    pub raw_uri: f64,
    pub uri_per_kill: f64,
    pub uri_per_hour: f64,
}

impl<'a> From<&'a RewardResult> for RewardRow<'a> {
    fn from(result: &'a RewardResult) -> Self {
        Self {
            alien: &result.target_name,
            ttk: result.time_to_kill,
            raw_uri: result.raw_reward,
            uri_per_kill: result.net_reward_per_kill,
            uri_per_hour: result.yield_per_hour,
        }
    }
}
