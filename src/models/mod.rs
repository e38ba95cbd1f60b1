pub mod break_record;
pub mod daily_record;
pub mod duration;
pub mod report;
pub mod session;

pub use break_record::BreakRecord;
pub use daily_record::DailyTimeRecord;
pub use duration::WorkDuration;
pub use report::WeeklyReport;
pub use session::{SessionSnapshot, SessionStatus};
