//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use jobtrack::identity::domain::UserId;
use jobtrack::tracker::{
    adapters::memory::InMemoryTrackerStore,
    services::{ApplicationService, TaskService},
};
use mockable::Clock;
use rstest::fixture;
use std::sync::{Arc, Mutex, MutexGuard};

/// Clock that advances one second per reading so creation order is strict.
pub struct SteppingClock(Mutex<DateTime<Utc>>);

impl SteppingClock {
    /// Starts the clock at a fixed instant.
    ///
    /// # Panics
    ///
    /// Panics if the fixture timestamp is invalid.
    #[must_use]
    pub fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 4, 1, 8, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        Self(Mutex::new(start))
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.lock_clock();
        let current = *now;
        *now += TimeDelta::seconds(1);
        current
    }
}

/// Application and task services sharing one in-memory store.
pub struct TrackerHarness {
    /// Store shared by both services.
    pub store: Arc<InMemoryTrackerStore>,
    /// Application service under test.
    pub applications: ApplicationService<InMemoryTrackerStore, SteppingClock>,
    /// Task service under test.
    pub tasks: TaskService<InMemoryTrackerStore, SteppingClock>,
}

/// Provides services over a fresh store for each test.
#[fixture]
pub fn harness() -> TrackerHarness {
    let store = Arc::new(InMemoryTrackerStore::new());
    let clock = Arc::new(SteppingClock::new());
    TrackerHarness {
        applications: ApplicationService::new(Arc::clone(&store), Arc::clone(&clock)),
        tasks: TaskService::new(Arc::clone(&store), clock),
        store,
    }
}

/// Provides a fresh owner identifier.
#[fixture]
pub fn owner() -> UserId {
    UserId::new()
}
