//! Core use-case services.
//!
//! # Responsibility
//! - Give UI/CLI callers one scheme-bound entry point into the engine.
//! - Keep callers decoupled from engine module layout.

pub mod sequence_service;
