pub mod calendar;
pub mod requesters;
pub mod summary;

pub use calendar::ApprovedCalendar;
pub use requesters::RequesterChart;
pub use summary::PendingSummary;
