mod filter;
mod project;
mod row;
mod selection;
mod session;
mod stats;

pub use filter::{FilterState, StatusFilter};
pub use project::{Projection, project};
pub use row::ListRow;
pub use selection::SelectionSet;
pub use session::{ListSession, MatchReport};
pub use stats::{RosterStats, roster_stats};
