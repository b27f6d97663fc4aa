//! # camwatch-domain
//!
//! Pure domain model for the camwatch camera-monitoring dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **risk levels** (`baixo < medio < alto < critico`) and the
//!   transition rules used by the risk panel
//! - Define **cameras** and the status → indicator color mapping
//! - Define **detections** and their flattening into table rows
//! - Define **dashboards** and the admin form payloads
//! - Define the **wire** shapes exchanged with the monitoring backend and the
//!   page-embedded **bootstrap** data
//! - Define the client **configuration** and its validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod bootstrap;
pub mod camera;
pub mod config;
pub mod dashboard;
pub mod detection;
pub mod risk;
pub mod wire;
