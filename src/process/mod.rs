pub mod list;
pub mod query;
pub mod state;
pub mod table;

pub use list::{ListEntry, list};
pub use query::{QueryResult, Verdict, evaluate, expand_names};
pub use state::ProcessState;
pub use table::{HR_SW_RUN_ENTRY, ProcessTable};
