pub mod app;
pub mod format;
pub mod highlight;
pub mod history;
pub mod stats;
pub mod storage;
pub mod ui;
