//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `mashwar_db` (and the object
//! store for images) and map errors via [`crate::error::AppError`].

pub mod bookings;
pub mod branding;
pub mod car_models;
pub mod car_types;
pub mod catalog;
pub mod contacts;
pub mod uploads;
pub mod wizard;
