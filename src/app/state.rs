use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::format::Format;
use crate::highlight::{self, TokenKind};
use crate::history::HistoryStore;
use crate::stats::FileStats;
use crate::storage::Storage;

use super::reader::ReadEvent;

/// How long a transient notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Keyboard input target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a path into the open prompt.
    OpenPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Auto-dismissing status-line feedback (copy results, read failures).
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub expires_at: Instant,
}

/// Actions reachable from the dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CopyCode,
    ExportHtml,
    ShowHistory,
    ToggleTheme,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::CopyCode,
        MenuAction::ExportHtml,
        MenuAction::ShowHistory,
        MenuAction::ToggleTheme,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::CopyCode => "Copy code",
            MenuAction::ExportHtml => "Export HTML",
            MenuAction::ShowHistory => "Show history",
            MenuAction::ToggleTheme => "Toggle theme",
        }
    }
}

/// The file currently on screen, with its content pre-tokenized per line
/// so drawing only maps token kinds to styles.
pub struct Preview {
    pub name: String,
    pub format: Format,
    pub content: String,
    pub lines: Vec<Vec<(TokenKind, String)>>,
}

impl Preview {
    pub fn new(name: String, format: Format, content: String) -> Self {
        let lines = layout_lines(&content, format);
        Self {
            name,
            format,
            content,
            lines,
        }
    }
}

/// Split the token stream at newlines into per-line styled segments.
fn layout_lines(content: &str, format: Format) -> Vec<Vec<(TokenKind, String)>> {
    let mut lines = Vec::new();
    let mut current: Vec<(TokenKind, String)> = Vec::new();
    for token in highlight::tokenize(content, format) {
        let mut first = true;
        for part in token.text.split('\n') {
            if !first {
                lines.push(std::mem::take(&mut current));
            }
            first = false;
            if !part.is_empty() {
                current.push((token.kind, part.to_owned()));
            }
        }
    }
    lines.push(current);
    lines
}

/// Top-level application state.
pub struct App {
    pub running: bool,
    pub dark_mode: bool,

    pub input_mode: InputMode,
    pub path_input: String,

    pub show_history: bool,
    pub history_index: usize,
    pub show_menu: bool,
    pub menu_index: usize,

    pub preview: Option<Preview>,
    pub stats: Option<FileStats>,
    pub content_scroll: u16,

    pub notice: Option<Notice>,
    pub history: HistoryStore,

    /// Reads still in flight; completions apply in arrival order.
    pub pending_reads: usize,
    pub(super) reads_tx: Sender<ReadEvent>,
    pub(super) reads_rx: Receiver<ReadEvent>,

    pub(super) theme_storage: Box<dyn Storage>,
}

impl App {
    pub fn new(history: HistoryStore, theme_storage: Box<dyn Storage>) -> Self {
        let (reads_tx, reads_rx) = mpsc::channel();
        let dark_mode = super::controller::load_theme(theme_storage.as_ref());

        Self {
            running: true,
            dark_mode,
            input_mode: InputMode::Normal,
            path_input: String::new(),
            show_history: false,
            history_index: 0,
            show_menu: false,
            menu_index: 0,
            preview: None,
            stats: None,
            content_scroll: 0,
            notice: None,
            history,
            pending_reads: 0,
            reads_tx,
            reads_rx,
            theme_storage,
        }
    }

    /// Keep selection indices inside their lists after mutations.
    pub fn clamp_indices(&mut self) {
        if !self.history.is_empty() {
            self.history_index = self.history_index.min(self.history.len() - 1);
        } else {
            self.history_index = 0;
        }
        self.menu_index = self.menu_index.min(MenuAction::ALL.len() - 1);
    }

    /// Drop the notice once its deadline passes. Called every loop tick.
    pub fn tick(&mut self) {
        if let Some(notice) = &self.notice
            && Instant::now() >= notice.expires_at
        {
            self.notice = None;
        }
    }
}
