//! Portal test support utilities
//!
//! Shared helpers for the portal's integration tests: once-only logging
//! initialization and assertions over the problem-details error contract.

pub mod logging;
pub mod problem_details;
