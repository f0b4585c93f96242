//! Domain Layer
//!
//! Entity, value objects, and the repository trait. No HTTP or database
//! concerns here.

pub mod entity;
pub mod repository;
pub mod value_objects;
