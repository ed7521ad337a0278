//! # tp-core
//!
//! Core types shared across the TutorPilot client crates.
//!
//! Everything here mirrors what the tutoring backend returns. The records carry
//! no invariants of their own: they are fetched, displayed, and occasionally
//! re-submitted.
//! - Display records for students, tutors, strategies, lessons, activities,
//!   self-evaluations, content versions, and chat messages
//! - Value enums with their wire spellings
//! - Request bodies sent to the agent, chat, and versioning endpoints
//! - Response envelopes returned by those endpoints
//! - JSON Schema lookup by record name
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod requests;
pub mod responses;
pub mod schema;
