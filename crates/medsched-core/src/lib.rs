//! # medsched-core - Core Domain Types
//!
//! Foundation crate for medsched. Provides the appointment domain types,
//! field validation, date/time composition helpers, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, toml).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Doctor`] - A selectable doctor (id, name, specialty)
//! - [`DoctorRoster`] - The fixed, ordered doctor list a form is built with
//! - [`AppointmentDraft`] - The in-progress appointment held by the form
//! - [`AppointmentRequest`] - The plain `{ doctorId, date, notes }` record
//!
//! ### Date/Time Composition (`datetime`)
//! - [`merge_date_part()`] - Splice year/month/day into an existing timestamp
//! - [`merge_time_part()`] - Splice hour/minute into an existing timestamp
//!
//! ### Validation (`validation`)
//! - [`validate()`] - One validation pass producing [`ValidationErrors`]
//! - [`Field`] - Validated field names (`doctorId`, `date`)
//! - [`ValidationPolicy`] - Lead time required before an appointment
//!
//! ### Clock (`clock`)
//! - [`Clock`] - Source of "now" for validation
//! - [`SystemClock`], [`FixedClock`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use medsched_core::prelude::*;
//! ```

pub mod clock;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{merge_date_part, merge_time_part};
pub use error::{Error, Result, ResultExt};
pub use types::{AppointmentDraft, AppointmentRequest, Doctor, DoctorOption, DoctorRoster};
pub use validation::{validate, Field, ValidationErrors, ValidationPolicy};
