#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod counter;
pub mod stats;
pub mod width;

pub use config::CountConfig;
pub use counter::{Counter, count_bytes};
pub use stats::Counts;
