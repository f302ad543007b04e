//! Users API - person record registration service
//!
//! Registers, edits, removes and searches person records. Registration is
//! limited to applicants older than a configured minimum age; searches select
//! records by an inclusive birth-date range.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
