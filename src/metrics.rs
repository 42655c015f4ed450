//! Derived metrics on top of an [`AgeBreakdown`]: milestone progress,
//! alternative total-unit counts, and templated fun facts. Total over any
//! valid breakdown; nothing in here can fail.
//!
//! All counts use integer arithmetic end to end so large values stay exact
//! (no float rounding near the top of the range).

use serde::Serialize;

use crate::age::{AgeBreakdown, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MilestoneUnit {
    Years,
    Days,
    Hours,
}

impl MilestoneUnit {
    pub fn label(self) -> &'static str {
        match self {
            MilestoneUnit::Years => "years",
            MilestoneUnit::Days => "days",
            MilestoneUnit::Hours => "hours",
        }
    }
}

/// A named life target with current progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub name: &'static str,
    pub target: u64,
    pub unit: MilestoneUnit,
    pub current: u64,
}

impl Milestone {
    /// Progress toward the target as a percentage, clamped at 100.
    pub fn percentage(&self) -> f64 {
        let pct = self.current as f64 / self.target as f64 * 100.0;
        if pct > 100.0 { 100.0 } else { pct }
    }
}

/// A total-elapsed count expressed in one alternative unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlternativeUnit {
    pub name: &'static str,
    pub value: u64,
}

/// The fixed, ordered milestone list.
pub fn milestones(age: &AgeBreakdown) -> Vec<Milestone> {
    let years = age.years as u64;
    let days = (age.total_elapsed_ms / MS_PER_DAY) as u64;
    let hours = (age.total_elapsed_ms / MS_PER_HOUR) as u64;

    vec![
        Milestone { name: "Teenager", target: 13, unit: MilestoneUnit::Years, current: years },
        Milestone { name: "Adult", target: 18, unit: MilestoneUnit::Years, current: years },
        Milestone { name: "Quarter Century", target: 25, unit: MilestoneUnit::Years, current: years },
        Milestone { name: "Midlife", target: 40, unit: MilestoneUnit::Years, current: years },
        Milestone { name: "Retirement", target: 65, unit: MilestoneUnit::Years, current: years },
        Milestone { name: "Days Lived", target: 10_000, unit: MilestoneUnit::Days, current: days },
        Milestone { name: "Hours Lived", target: 100_000, unit: MilestoneUnit::Hours, current: hours },
    ]
}

/// Total elapsed time in alternative units.
///
/// Heartbeats assume a constant 1.2 beats per minute-lived multiplier, an
/// illustrative approximation rather than a physiological claim. Computed as
/// `minutes × 6 / 5` so the result is exact integer floor(minutes × 1.2).
pub fn alternative_units(age: &AgeBreakdown) -> Vec<AlternativeUnit> {
    let minutes = (age.total_elapsed_ms / MS_PER_MINUTE) as u64;

    vec![
        AlternativeUnit { name: "Days Lived", value: (age.total_elapsed_ms / MS_PER_DAY) as u64 },
        AlternativeUnit { name: "Hours Lived", value: (age.total_elapsed_ms / MS_PER_HOUR) as u64 },
        AlternativeUnit { name: "Minutes Lived", value: minutes },
        AlternativeUnit { name: "Heartbeats", value: minutes * 6 / 5 },
    ]
}

/// Templated fun-fact strings derived from the breakdown.
pub fn fun_facts(age: &AgeBreakdown) -> Vec<String> {
    let days = (age.total_elapsed_ms / MS_PER_DAY) as u64;
    let minutes = (age.total_elapsed_ms / MS_PER_MINUTE) as u64;
    let heartbeats = minutes * 6 / 5;
    // 8 hours of sleep per day on average.
    let sleep_days = days * 8 / 24;
    let weeks = days / 7;

    vec![
        format!(
            "You've experienced {} sunrises and sunsets",
            group_digits(days)
        ),
        format!("You've slept approximately {} days", group_digits(sleep_days)),
        format!(
            "Earth has orbited the sun {} times since you were born",
            age.years
        ),
        format!(
            "Your heart has beaten approximately {} times",
            group_digits(heartbeats)
        ),
        format!("You've celebrated {} birthdays", age.years),
        format!("You've lived through {} weeks", group_digits(weeks)),
    ]
}

/// Groups digits with commas: 1234567 -> "1,234,567".
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
