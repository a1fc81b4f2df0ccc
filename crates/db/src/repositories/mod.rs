//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod branding_repo;
pub mod car_model_repo;
pub mod car_type_repo;
pub mod contact_repo;

pub use booking_repo::BookingRepo;
pub use branding_repo::BrandingRepo;
pub use car_model_repo::CarModelRepo;
pub use car_type_repo::CarTypeRepo;
pub use contact_repo::ContactRepo;
