pub mod error;

pub use error::{ClinicError, ClinicResult, UnavailableReason};
