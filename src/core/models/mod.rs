//! Domain models for trello-sprint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Card`] - A card on the board, as seen by the burndown
//! - [`BoardList`] - A list (column) on the board
//! - [`SprintWindow`] - The sprint's calendar bounds and week arithmetic
//! - [`Burndown`] - Expected and actual remaining-work series

mod burndown;
mod card;
mod list;
mod sprint;

pub use burndown::{Burndown, BurndownPoint, IdealCurve};
pub use card::Card;
pub use list::BoardList;
pub use sprint::{DateParseError, SprintConfiguration, SprintWindow, parse_sprint_date};
