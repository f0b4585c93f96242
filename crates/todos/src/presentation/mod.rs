//! Presentation Layer - HTTP

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
