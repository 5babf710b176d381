use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::highlight;
use crate::history::HistoryEntry;
use crate::stats::{self, FileStats};
use crate::storage::Storage;

use super::reader::{self, ReadOutcome};
use super::state::{App, InputMode, MenuAction, NOTICE_TTL, Notice, NoticeKind, Preview};

/// Storage key for the persisted theme flag, independent of history.
pub const THEME_KEY: &str = "dark_mode";

/// Read the persisted theme flag; absent or malformed values mean dark.
pub fn load_theme(storage: &dyn Storage) -> bool {
    storage
        .get(THEME_KEY)
        .and_then(|v| v.parse().ok())
        .unwrap_or(true)
}

impl App {
    /// Kick off a background read of `path`.
    ///
    /// Selecting another file while a read is outstanding is allowed;
    /// completions apply in arrival order and the last write wins.
    pub fn open_path(&mut self, path: PathBuf) {
        self.pending_reads += 1;
        reader::spawn_read(path, self.reads_tx.clone());
    }

    /// Apply all completed reads without blocking.
    ///
    /// A failed read leaves the current view untouched and surfaces a
    /// notice; nothing partial is ever committed.
    pub fn drain_read_events(&mut self) {
        while let Ok(event) = self.reads_rx.try_recv() {
            self.pending_reads = self.pending_reads.saturating_sub(1);
            match event.result {
                Ok(outcome) => self.apply_read(event.name, outcome),
                Err(err) => self.notify_error(format!("Could not read {}: {err}", event.name)),
            }
        }
    }

    fn apply_read(&mut self, name: String, outcome: ReadOutcome) {
        let file_stats =
            FileStats::extract(&name, &outcome.content, outcome.size, outcome.modified);
        let format = file_stats.format;

        let entry = HistoryEntry {
            name: name.clone(),
            format,
            content: outcome.content.clone(),
            stats: file_stats.clone(),
            timestamp: stats::now_millis(),
        };
        if self.history.record(entry).is_err() {
            self.notify_error("Could not save history".to_owned());
        }

        self.preview = Some(Preview::new(name, format, outcome.content));
        self.stats = Some(file_stats);
        self.content_scroll = 0;
    }

    /// Re-display the selected history entry without re-reading the file.
    pub fn open_from_history(&mut self) {
        let Some(name) = self
            .history
            .entries()
            .get(self.history_index)
            .map(|e| e.name.clone())
        else {
            return;
        };

        match self.history.touch(&name) {
            Ok(Some(entry)) => {
                self.preview = Some(Preview::new(entry.name, entry.format, entry.content));
                self.stats = Some(entry.stats);
                self.content_scroll = 0;
                self.show_history = false;
            }
            Ok(None) => {}
            Err(_) => self.notify_error("Could not update history".to_owned()),
        }
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    pub fn toggle_menu(&mut self) {
        self.show_menu = !self.show_menu;
        self.menu_index = 0;
    }

    /// Flip dark/light and persist the flag under its own key.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        if self
            .theme_storage
            .set(THEME_KEY, if self.dark_mode { "true" } else { "false" })
            .is_err()
        {
            self.notify_error("Could not save theme".to_owned());
        }
    }

    /// Copy the raw content of the current preview to the clipboard.
    pub fn copy_content(&mut self) {
        let Some(preview) = &self.preview else {
            self.notify_error("No content to copy".to_owned());
            return;
        };

        let copied = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(preview.content.clone()));
        match copied {
            Ok(()) => self.notify_info("Code copied to clipboard".to_owned()),
            Err(e) => self.notify_error(format!("Failed to copy: {e}")),
        }
    }

    /// Write the escaped, highlighted markup of the current preview to
    /// `<name>.html` in the working directory.
    pub fn export_markup(&mut self) {
        self.export_markup_in(Path::new("."));
    }

    pub fn export_markup_in(&mut self, dir: &Path) {
        let Some(preview) = &self.preview else {
            self.notify_error("No content to export".to_owned());
            return;
        };

        let markup = highlight::highlight(&preview.content, preview.format);
        let document = format!(
            "<!DOCTYPE html>\n<html>\n<body>\n<pre>{markup}</pre>\n</body>\n</html>\n"
        );
        let target = dir.join(format!("{}.html", preview.name));
        match std::fs::write(&target, document) {
            Ok(()) => self.notify_info(format!("Exported {}", target.display())),
            Err(e) => self.notify_error(format!("Failed to export: {e}")),
        }
    }

    pub fn run_menu_action(&mut self) {
        let action = MenuAction::ALL[self.menu_index];
        self.show_menu = false;
        match action {
            MenuAction::CopyCode => self.copy_content(),
            MenuAction::ExportHtml => self.export_markup(),
            MenuAction::ShowHistory => self.show_history = true,
            MenuAction::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Submit the open prompt: leave input mode and start the read.
    pub fn submit_path_input(&mut self) {
        let typed = self.path_input.trim().to_owned();
        self.input_mode = InputMode::Normal;
        self.path_input.clear();
        if !typed.is_empty() {
            self.open_path(PathBuf::from(typed));
        }
    }

    pub fn cancel_path_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.path_input.clear();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = self
            .preview
            .as_ref()
            .map(|p| p.lines.len().saturating_sub(1) as u16)
            .unwrap_or(0);
        self.content_scroll = self.content_scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.content_scroll = self.content_scroll.saturating_sub(lines);
    }

    pub fn notify_info(&mut self, text: String) {
        self.set_notice(text, NoticeKind::Info);
    }

    pub fn notify_error(&mut self, text: String) {
        self.set_notice(text, NoticeKind::Error);
    }

    fn set_notice(&mut self, text: String, kind: NoticeKind) {
        self.notice = Some(Notice {
            text,
            kind,
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryStore;
    use crate::storage::MemoryStorage;

    fn app() -> App {
        App::new(
            HistoryStore::load(Box::new(MemoryStorage::new())),
            Box::new(MemoryStorage::new()),
        )
    }

    #[test]
    fn theme_defaults_to_dark_and_round_trips() {
        let storage = MemoryStorage::new();
        assert!(load_theme(&storage));

        storage.set(THEME_KEY, "false").unwrap();
        assert!(!load_theme(&storage));

        storage.set(THEME_KEY, "garbage").unwrap();
        assert!(load_theme(&storage));
    }

    #[test]
    fn toggle_theme_persists_the_flag() {
        let mut app = app();
        assert!(app.dark_mode);
        app.toggle_theme();
        assert!(!app.dark_mode);
        assert_eq!(app.theme_storage.get(THEME_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn copy_without_content_is_an_error_notice() {
        let mut app = app();
        app.copy_content();
        let notice = app.notice.expect("notice raised");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn submit_empty_path_starts_no_read() {
        let mut app = app();
        app.input_mode = InputMode::OpenPath;
        app.path_input = "   ".to_owned();
        app.submit_path_input();
        assert_eq!(app.pending_reads, 0);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut app = app();
        app.scroll_down(10);
        assert_eq!(app.content_scroll, 0);

        app.preview = Some(Preview::new(
            "a.txt".into(),
            crate::format::Format::Text,
            "1\n2\n3\n4".into(),
        ));
        app.scroll_down(10);
        assert_eq!(app.content_scroll, 3);
        app.scroll_up(1);
        assert_eq!(app.content_scroll, 2);
    }
}
