//! Business logic services
//!
//! Pure logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`membership`] - Decide which cards belong to the sprint
//! - [`burndown`] - Build the expected and actual weekly series
//! - [`grouping`] - Group outstanding sprint cards by list
//! - [`resolve`] - Map configured names onto board identifiers

pub mod burndown;
pub mod grouping;
pub mod membership;
pub mod resolve;

pub use burndown::{build_burndown, build_burndown_with};
pub use grouping::{ListGroup, group_remaining};
pub use membership::select_sprint_cards;
pub use resolve::{board_label_names, known_done_columns, resolve_done_list_ids};
