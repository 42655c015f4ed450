//! Periodic recomputation. A [`Ticker`] is a cancellable recurring task
//! that invokes the kernel with the current instant once per period and
//! forwards a [`Snapshot`] to a registered consumer. The consumer owns all
//! rendering concerns; nothing here keeps state between ticks.

use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::age::{self, AgeBreakdown, AgeError, CountdownBreakdown};
use crate::metrics::{self, AlternativeUnit, Milestone};

/// The full output surface for one tick: age and countdown breakdowns plus
/// every derived metric, as plain data.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub age: AgeBreakdown,
    pub countdown: CountdownBreakdown,
    pub milestones: Vec<Milestone>,
    pub alternative_units: Vec<AlternativeUnit>,
    pub fun_facts: Vec<String>,
}

impl Snapshot {
    /// Computes everything for a birth date at `now`. Pure; fails only when
    /// the birth date lies in the future.
    pub fn compute(birth: NaiveDate, now: NaiveDateTime) -> Result<Self, AgeError> {
        let age = age::compute_age(birth.and_time(NaiveTime::MIN), now)?;
        let countdown = age::compute_countdown(birth, now);

        Ok(Self {
            countdown,
            milestones: metrics::milestones(&age),
            alternative_units: metrics::alternative_units(&age),
            fun_facts: metrics::fun_facts(&age),
            age,
        })
    }
}

/// A recurring kernel invocation bound to one consumer.
///
/// The underlying task stops in one of three ways: [`Ticker::stop`] (clean
/// shutdown, awaited), dropping the handle (abort), or the kernel reporting
/// `FutureDate` (computation suspends until a valid date is supplied). The
/// task can never outlive its handle.
pub struct Ticker {
    shutdown: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the recurring task. The first tick fires immediately, then
    /// every `period` thereafter.
    pub fn spawn<C>(birth: NaiveDate, period: Duration, mut consumer: C) -> Self
    where
        C: FnMut(Snapshot) + Send + 'static,
    {
        let (shutdown, mut signal) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = ticks.tick() => {
                        match Snapshot::compute(birth, Local::now().naive_local()) {
                            Ok(snapshot) => {
                                debug!(total_elapsed_ms = snapshot.age.total_elapsed_ms, "tick");
                                consumer(snapshot);
                            }
                            Err(err) => {
                                warn!(%err, "suspending periodic age updates");
                                break;
                            }
                        }
                    }
                    _ = signal.changed() => break,
                }
            }
        });

        Self { shutdown, handle: Some(handle) }
    }

    /// Signals shutdown and waits for the task to finish.
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn snapshot_bundles_the_whole_surface() {
        let snapshot = Snapshot::compute(date(2000, 1, 1), dt(2024, 1, 1, 0, 0, 0)).unwrap();
        assert_eq!(snapshot.age.years, 24);
        assert_eq!(snapshot.milestones.len(), 7);
        assert_eq!(snapshot.alternative_units.len(), 4);
        assert_eq!(snapshot.fun_facts.len(), 6);
        // Anniversary is exactly `now`: the target moves a full year out.
        assert_eq!(snapshot.countdown.days, 366);
    }

    #[test]
    fn snapshot_propagates_future_date() {
        let result = Snapshot::compute(date(2030, 1, 1), dt(2024, 1, 1, 0, 0, 0));
        assert_eq!(result.unwrap_err(), AgeError::FutureDate);
    }

    #[test]
    fn snapshot_serializes_as_plain_data() {
        let snapshot = Snapshot::compute(date(2000, 1, 1), dt(2024, 1, 1, 0, 0, 0)).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["age"]["years"], 24);
        assert_eq!(json["age"]["total_elapsed_ms"], 757_382_400_000i64);
        assert_eq!(json["milestones"][1]["name"], "Adult");
        assert_eq!(json["countdown"]["days"], 366);
    }

    #[tokio::test]
    async fn ticker_stops_cleanly() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let birth = date(1990, 6, 15);
        let ticker = Ticker::spawn(birth, Duration::from_millis(5), move |snapshot| {
            let _ = tx.send(snapshot);
        });

        let first = rx.recv().await.expect("at least one tick");
        assert!(first.age.total_elapsed_ms > 0);
        assert_eq!(first.milestones.len(), 7);

        ticker.stop().await;
        // The consumer (and its sender) died with the task, so the channel
        // drains to None instead of hanging.
        while rx.recv().await.is_some() {}
    }

    #[tokio::test]
    async fn dropping_the_handle_aborts_the_task() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let ticker = Ticker::spawn(date(1990, 6, 15), Duration::from_millis(5), move |snapshot| {
            let _ = tx.send(snapshot);
        });

        rx.recv().await.expect("at least one tick");
        drop(ticker);
        while rx.recv().await.is_some() {}
    }
}
