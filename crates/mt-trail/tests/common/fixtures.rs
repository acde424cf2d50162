use mt_core::Clock;
use mt_store::{MemorySlotStorage, SessionRepository, SlotStorage, UserRepository};
use mt_trail::{IdentityGenerator, TrailFlow};

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 4, 10, 0, 0).unwrap()
}

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// A flow wired to in-memory slots, with handles kept for inspection
pub struct FlowHarness {
    pub flow: TrailFlow,
    pub local: Arc<dyn SlotStorage>,
    pub session: Arc<dyn SlotStorage>,
    pub clock: Arc<ManualClock>,
}

impl FlowHarness {
    pub fn new() -> Self {
        Self::with_local(Arc::new(MemorySlotStorage::new()))
    }

    pub fn with_local(local: Arc<dyn SlotStorage>) -> Self {
        let session: Arc<dyn SlotStorage> = Arc::new(MemorySlotStorage::new());
        let clock = Arc::new(ManualClock::new(start_time()));

        let flow = TrailFlow::new(
            UserRepository::new(local.clone()),
            SessionRepository::new(local.clone(), session.clone()),
            IdentityGenerator::with_rng(16, StdRng::seed_from_u64(2024)),
            clock.clone(),
            2,
        );

        Self {
            flow,
            local,
            session,
            clock,
        }
    }

    /// Registers a visitor and returns their Trail ID
    pub fn register(&mut self, name: &str, email: &str) -> String {
        self.flow
            .register(name, email)
            .unwrap()
            .trail_id
            .to_string()
    }
}
