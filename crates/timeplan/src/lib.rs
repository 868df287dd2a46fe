//! timeplan: a schedule-planning engine and API for building per-semester
//! university timetables.
//!
//! The core is the schedule parser (catalog time strings to normalized
//! weekly slots) and the conflict detector (candidate placement vs. one
//! semester's existing courses); the rest is the surrounding catalog,
//! storage, and HTTP surface.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod schedule;
pub mod server;
pub mod types;
