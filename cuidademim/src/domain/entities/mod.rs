//! Domain entities
//!
//! Pure domain models for pets and administrative reports.

pub mod pet;
pub mod report;

pub use pet::{Pet, PetId, PetKind, PetParams};
pub use report::{Report, ReportCell, ReportOptions, ReportType};
