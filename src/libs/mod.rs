//! Core library modules for tasktime.
//!
//! ## Features
//!
//! - **Time Engine**: Parsing, interval arithmetic, working-hours and calendar calculators
//! - **Presentation**: Duration formatters, task reports, console tables
//! - **Core Infrastructure**: Configuration, data storage, messaging
//!
//! The engine modules (`time`, `schedule`, `duration`, `formatter`) are pure:
//! no I/O, no process clock, no process time zone.

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod report;
pub mod schedule;
pub mod time;
pub mod view;
