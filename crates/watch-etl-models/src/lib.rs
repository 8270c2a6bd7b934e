pub mod coerce;
pub mod content;
pub mod history;
pub mod merged;
pub mod output;

pub use coerce::coerce_i64;
pub use content::ContentRecord;
pub use history::HistoryRecord;
pub use merged::MergedRecord;
pub use output::OutputRecord;
