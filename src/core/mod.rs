pub mod clock;
pub mod ledger;
pub mod report;
pub mod session;
pub mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ledger::HistoryLedger;
pub use report::ReportAggregator;
pub use session::SessionStateMachine;
pub use tracker::{TimeTracker, TrackerSettings};
