//! Command implementations

mod board;
mod burndown;
mod cards;
mod dates;
mod done;
mod fetch;
mod init;
mod labels;
mod remaining;
mod status;

pub use burndown::burndown;
pub use cards::cards;
pub use dates::dates;
pub use done::done;
pub use fetch::fetch;
pub use init::init;
pub use labels::labels;
pub use remaining::remaining;
pub use status::status;
