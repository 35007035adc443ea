pub mod booking;
pub mod prescription;
