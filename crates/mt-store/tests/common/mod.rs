#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{create_test_user, memory_storage};
