//! Derived campaign estimates. Every function here is pure and cheap enough to
//! re-run on each render.

use crate::{Keyword, Publisher};

pub const WASTE_BASELINE: i64 = 2_419;
pub const WASTE_PER_FILTERED_KEYWORD: i64 = 380;
pub const BASE_DAILY_CLICKS: f64 = 85.0;
pub const BASE_DAILY_LEADS: f64 = 12.0;
pub const REFERENCE_BUDGET: f64 = 500.0;
pub const MIN_RECOMMENDED_BUDGET: u32 = 200;
pub const RECOMMENDED_PER_PUBLISHER: u32 = 100;

pub fn enabled_publisher_count(publishers: &[Publisher]) -> usize {
    publishers.iter().filter(|p| p.enabled).count()
}

pub fn active_keyword_count(keywords: &[Keyword]) -> usize {
    keywords.iter().filter(|k| k.active).count()
}

pub fn total_reach(publishers: &[Publisher]) -> u64 {
    publishers.iter().filter(|p| p.enabled).map(|p| p.reach).sum()
}

/// Baseline waste minus a fixed amount per keyword the user switched off.
/// Not floored: enough deactivated keywords drive it below zero.
pub fn waste_inventory(keywords: &[Keyword]) -> i64 {
    let filtered = (keywords.len() - active_keyword_count(keywords)) as i64;
    WASTE_BASELINE - filtered * WASTE_PER_FILTERED_KEYWORD
}

fn publisher_share(publishers: &[Publisher]) -> f64 {
    if publishers.is_empty() {
        return 0.0;
    }
    enabled_publisher_count(publishers) as f64 / publishers.len() as f64
}

pub fn estimated_clicks(publishers: &[Publisher], committed_budget: u32) -> u32 {
    let clicks = BASE_DAILY_CLICKS
        * publisher_share(publishers)
        * (f64::from(committed_budget) / REFERENCE_BUDGET);
    clicks.round() as u32
}

pub fn estimated_cost(publishers: &[Publisher], committed_budget: u32) -> u32 {
    (f64::from(committed_budget) * publisher_share(publishers)).round() as u32
}

pub fn recommended_budget(enabled_publishers: usize) -> u32 {
    let per_publisher = u32::try_from(enabled_publishers)
        .unwrap_or(u32::MAX)
        .saturating_mul(RECOMMENDED_PER_PUBLISHER);
    per_publisher.max(MIN_RECOMMENDED_BUDGET)
}

/// Click estimate for a budget still being edited, ignoring publisher share.
pub fn projected_clicks(budget: u32) -> u32 {
    (f64::from(budget) / REFERENCE_BUDGET * BASE_DAILY_CLICKS).round() as u32
}

pub fn projected_leads(budget: u32) -> u32 {
    (f64::from(budget) / REFERENCE_BUDGET * BASE_DAILY_LEADS).round() as u32
}

/// Low and high verified-job estimates for a daily budget.
pub fn verified_jobs_range(budget: u32) -> (u32, u32) {
    (budget / 60, budget.div_ceil(40))
}

/// Average cost per job, or `None` when the budget is too small to yield any.
pub fn avg_cost_per_job(budget: u32) -> Option<u32> {
    let jobs = f64::from(budget / 50 + budget.div_ceil(40)) / 2.0;
    if jobs == 0.0 {
        return None;
    }
    Some((f64::from(budget) / jobs).round() as u32)
}

/// Reach in millions with one decimal, e.g. `12.5M`.
pub fn format_reach_millions(reach: u64) -> String {
    format!("{:.1}M", reach as f64 / 1_000_000.0)
}
