//! Core domain logic for trello-sprint
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Card, `BoardList`, `SprintWindow`, Burndown)
//! - `services/` - Sprint membership, burndown series, grouping
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
