mod controller;
mod reader;
mod state;

pub use controller::{THEME_KEY, load_theme};
pub use state::{App, InputMode, MenuAction, Notice, NoticeKind, Preview};
