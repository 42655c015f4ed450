//! agecalc
//!
//! Computes a person's elapsed age and the countdown to their next
//! birthday, plus derived life metrics (milestone progress, alternative
//! unit counts, fun facts).
//!
//! # Core Concepts
//!
//! - **[`compute_age`]**: birth + now -> [`AgeBreakdown`], failing with
//!   [`AgeError::FutureDate`] for birth dates after now
//! - **[`compute_countdown`]**: birth + now -> [`CountdownBreakdown`] to
//!   the next anniversary of the birth date
//! - **[`Snapshot`]**: the full per-tick output surface as plain data
//! - **[`Ticker`]**: a cancellable recurring task that recomputes a
//!   [`Snapshot`] once per period and hands it to a consumer
//!
//! The kernel functions are pure and re-entrant; all state (including the
//! displayed-value animation a UI might do) belongs to the consumer.

pub mod age;
pub mod metrics;
pub mod report;
pub mod ticker;

pub use age::{compute_age, compute_countdown, AgeBreakdown, AgeError, CountdownBreakdown};
pub use metrics::{alternative_units, fun_facts, milestones, AlternativeUnit, Milestone, MilestoneUnit};
pub use ticker::{Snapshot, Ticker};
