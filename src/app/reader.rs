use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::SystemTime;

/// Completion of one background file read.
pub struct ReadEvent {
    pub name: String,
    pub result: Result<ReadOutcome, String>,
}

pub struct ReadOutcome {
    pub content: String,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Read `path` on a spawned thread and report over `tx`.
///
/// The only suspension point in the pipeline: everything downstream of the
/// read runs synchronously once the event is drained. There is no
/// cancellation; an abandoned receiver just drops the event.
pub fn spawn_read(path: PathBuf, tx: Sender<ReadEvent>) {
    thread::spawn(move || {
        let name = display_name(&path);
        let result = read_file(&path);
        let _ = tx.send(ReadEvent { name, result });
    });
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_file(path: &Path) -> Result<ReadOutcome, String> {
    let metadata = fs::metadata(path).map_err(|e| e.to_string())?;
    if metadata.is_dir() {
        return Err("is a directory".to_owned());
    }
    // Content is treated as text; invalid UTF-8 is replaced, not rejected.
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    let content = String::from_utf8_lossy(&bytes).into_owned();

    Ok(ReadOutcome {
        content,
        size: metadata.len(),
        modified: metadata.modified().ok(),
    })
}
