//! Domain logic for the Mashwar booking service.
//!
//! Everything in this crate is pure and synchronous: the booking draft and
//! its validation schema, the wizard step registry and state machine, catalog
//! label resolution, and the messaging handoff formatter. I/O (database,
//! object storage, HTTP) lives in the sibling crates.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod handoff;
pub mod media;
pub mod pagination;
pub mod steps;
pub mod types;
pub mod validation;
pub mod wizard;
