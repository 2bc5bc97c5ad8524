//! Specialties Entity Module

pub mod specialty;

pub use specialty::Specialty;
