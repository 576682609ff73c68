//! Orientation engine for the OrientCam student guidance service.
//!
//! The crate hosts the domain model (RIASEC interest profiles, the academic
//! program catalog) and the compatibility matching engine that scores
//! programs against a student profile. The HTTP surface in `services/api`
//! composes the routers and repositories exposed here.

pub mod config;
pub mod error;
pub mod orientation;
pub mod telemetry;
