//! # Domain Models
//!
//! WOLF RPG Editor data types built on the foundation crates, plus the shared configuration
//! models. Keep it lean: no I/O or heavy logic, just declarations and simple helpers.

pub mod config;
pub mod list;
pub mod value;
