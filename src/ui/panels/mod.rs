mod content;
mod history;
mod stats;

pub use content::draw_content;
pub use history::draw_history;
pub use stats::draw_stats;
