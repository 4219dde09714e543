//! Visa eligibility advisor: scores a travel applicant's file, places it in a strategy band,
//! and recommends destinations.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
