#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{FlowHarness, ManualClock, start_time};
