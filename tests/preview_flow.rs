use std::fs;
use std::thread;
use std::time::Duration;

use peekr::app::{App, NoticeKind, THEME_KEY, load_theme};
use peekr::format::Format;
use peekr::history::{HISTORY_KEY, HistoryStore};
use peekr::storage::{FileStorage, MemoryStorage, Storage};

fn fresh_app() -> App {
    App::new(
        HistoryStore::load(Box::new(MemoryStorage::new())),
        Box::new(MemoryStorage::new()),
    )
}

/// Drain read completions until the pipeline is idle.
fn wait_for_reads(app: &mut App) {
    for _ in 0..500 {
        app.drain_read_events();
        if app.pending_reads == 0 {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("file read did not complete");
}

#[test]
fn open_file_renders_stats_and_records_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.js");
    fs::write(&path, "// a\nlet x = 1;\n").unwrap();

    let mut app = fresh_app();
    app.open_path(path);
    wait_for_reads(&mut app);

    let preview = app.preview.as_ref().expect("preview loaded");
    assert_eq!(preview.name, "demo.js");
    assert_eq!(preview.format, Format::JavaScript);
    assert_eq!(preview.content, "// a\nlet x = 1;\n");
    // Trailing newline yields the extra empty display line.
    assert_eq!(preview.lines.len(), 3);

    let stats = app.stats.as_ref().expect("stats computed");
    assert_eq!(stats.lines, 3);
    assert_eq!(stats.format.label(), "JavaScript");

    assert_eq!(app.history.len(), 1);
    assert_eq!(app.history.entries()[0].name, "demo.js");
    assert_eq!(app.history.entries()[0].content, "// a\nlet x = 1;\n");
}

#[test]
fn failed_read_leaves_the_view_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    fs::write(&good, "hello\n").unwrap();

    let mut app = fresh_app();
    app.open_path(good);
    wait_for_reads(&mut app);

    app.open_path(dir.path().join("missing.txt"));
    wait_for_reads(&mut app);

    // The earlier preview is still displayed and history grew no further.
    let preview = app.preview.as_ref().expect("previous preview kept");
    assert_eq!(preview.name, "good.txt");
    assert_eq!(app.history.len(), 1);

    let notice = app.notice.as_ref().expect("read failure surfaced");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("missing.txt"));
}

#[test]
fn replay_from_history_skips_the_file_read() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("one.css");
    let second = dir.path().join("two.txt");
    fs::write(&first, "p { color: red; }\n").unwrap();
    fs::write(&second, "plain\n").unwrap();

    let mut app = fresh_app();
    app.open_path(first.clone());
    wait_for_reads(&mut app);
    app.open_path(second);
    wait_for_reads(&mut app);

    // Delete the original so a re-read would fail; replay must not care.
    fs::remove_file(&first).unwrap();

    app.show_history = true;
    app.history_index = 1; // one.css, behind the newer two.txt
    app.open_from_history();

    let preview = app.preview.as_ref().expect("replayed preview");
    assert_eq!(preview.name, "one.css");
    assert_eq!(preview.content, "p { color: red; }\n");
    assert!(!app.show_history);

    // Replay refreshed the entry but did not reorder the list.
    let names: Vec<_> = app.history.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["two.txt", "one.css"]);
    assert_eq!(app.stats.as_ref().unwrap().name, "one.css");
}

#[test]
fn history_persists_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("kept.md");
    fs::write(&file, "# kept\n").unwrap();

    {
        let history = HistoryStore::load(Box::new(FileStorage::new(dir.path().join("state"))));
        let mut app = App::new(history, Box::new(MemoryStorage::new()));
        app.open_path(file);
        wait_for_reads(&mut app);
        assert_eq!(app.history.len(), 1);
    }

    let reloaded = HistoryStore::load(Box::new(FileStorage::new(dir.path().join("state"))));
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.entries()[0].name, "kept.md");
    assert_eq!(reloaded.entries()[0].content, "# kept\n");
    assert_eq!(reloaded.entries()[0].format, Format::Markdown);
}

#[test]
fn corrupt_history_blob_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().to_path_buf());
    storage.set(HISTORY_KEY, "not json at all {{{").unwrap();

    let store = HistoryStore::load(Box::new(storage));
    assert!(store.is_empty());
}

#[test]
fn theme_flag_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut app = App::new(
            HistoryStore::load(Box::new(MemoryStorage::new())),
            Box::new(FileStorage::new(dir.path().to_path_buf())),
        );
        assert!(app.dark_mode);
        app.toggle_theme();
        assert!(!app.dark_mode);
    }

    let storage = FileStorage::new(dir.path().to_path_buf());
    assert!(!load_theme(&storage));
    assert_eq!(storage.get(THEME_KEY).as_deref(), Some("false"));

    let app = App::new(
        HistoryStore::load(Box::new(MemoryStorage::new())),
        Box::new(storage),
    );
    assert!(!app.dark_mode);
}

#[test]
fn export_writes_highlighted_markup() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("page.html");
    fs::write(&file, "<div class=\"a\">\n").unwrap();

    let mut app = fresh_app();
    app.open_path(file);
    wait_for_reads(&mut app);

    let out_dir = tempfile::tempdir().unwrap();
    app.export_markup_in(out_dir.path());

    let exported = fs::read_to_string(out_dir.path().join("page.html.html")).unwrap();
    assert!(exported.contains("<span class=\"syntax-tag\">div</span>"));
    assert!(exported.contains("&lt;"));

    let notice = app.notice.as_ref().expect("export confirmed");
    assert_eq!(notice.kind, NoticeKind::Info);
}

#[test]
fn reopening_the_same_file_keeps_one_history_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("same.txt");

    let mut app = fresh_app();
    fs::write(&path, "first\n").unwrap();
    app.open_path(path.clone());
    wait_for_reads(&mut app);

    fs::write(&path, "second\n").unwrap();
    app.open_path(path);
    wait_for_reads(&mut app);

    assert_eq!(app.history.len(), 1);
    assert_eq!(app.history.entries()[0].content, "second\n");
    assert_eq!(app.preview.as_ref().unwrap().content, "second\n");
}
