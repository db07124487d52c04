use std::cell::Cell;
use std::fs;
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::buffer_utils::buffer_text;
use super::error::{AppError, Result};
use super::messages::Message;
use super::text_ops::extract_filename;

pub const APP_NAME: &str = "Falcon";
const UNTITLED: &str = "Untitled";

/// The single open document: an FLTK text buffer plus the bookkeeping the
/// title bar, status bar and autosave need.
pub struct Document {
    pub buffer: TextBuffer,
    pub file_path: Option<String>,
    pub has_unsaved_changes: Rc<Cell<bool>>,
    pub display_name: String,
}

impl Document {
    pub fn new_untitled() -> Self {
        let mut buffer = TextBuffer::default();
        let has_unsaved_changes = Rc::new(Cell::new(false));

        let changes = has_unsaved_changes.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
            }
        });

        Self {
            buffer,
            file_path: None,
            has_unsaved_changes,
            display_name: UNTITLED.to_string(),
        }
    }

    /// Forward every real edit to the dispatch loop so the title and status
    /// bar can follow along.
    pub fn notify_modifications(&mut self, sender: Sender<Message>) {
        self.buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                sender.send(Message::BufferModified);
            }
        });
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn mark_clean(&self) {
        self.has_unsaved_changes.set(false);
    }

    pub fn text(&self) -> String {
        buffer_text(&self.buffer)
    }

    /// Window title, prefixed with `*` while there are unsaved changes.
    pub fn title(&self) -> String {
        let prefix = if self.is_dirty() { "*" } else { "" };
        format!("{}{} - {}", prefix, self.display_name, APP_NAME)
    }

    /// Replace the buffer with the contents of `path`.
    ///
    /// The file is read before anything is touched, so a failed read leaves
    /// text, path and dirty flag as they were.
    pub fn load(&mut self, path: &str) -> Result<()> {
        let content = fs::read_to_string(path)?;
        self.buffer.set_text(&content);
        self.set_path(path);
        self.mark_clean();
        Ok(())
    }

    pub fn save(&mut self) -> Result<()> {
        let path = self.file_path.clone().ok_or(AppError::NoPath)?;
        fs::write(&path, self.text())?;
        self.mark_clean();
        Ok(())
    }

    pub fn save_as(&mut self, path: &str) -> Result<()> {
        fs::write(path, self.text())?;
        self.set_path(path);
        self.mark_clean();
        Ok(())
    }

    /// Back to an empty, clean, untitled document.
    pub fn reset(&mut self) {
        self.buffer.set_text("");
        self.file_path = None;
        self.display_name = UNTITLED.to_string();
        self.mark_clean();
    }

    fn set_path(&mut self, path: &str) {
        self.file_path = Some(path.to_string());
        self.display_name = extract_filename(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn path_in(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().to_string()
    }

    #[test]
    fn test_new_document_is_clean_and_untitled() {
        let doc = Document::new_untitled();
        assert!(!doc.is_dirty());
        assert!(doc.file_path.is_none());
        assert_eq!(doc.text(), "");
        assert_eq!(doc.title(), "Untitled - Falcon");
    }

    #[test]
    fn test_insert_and_delete_mark_dirty() {
        let mut doc = Document::new_untitled();
        doc.buffer.insert(0, "hello");
        assert!(doc.is_dirty());
        assert_eq!(doc.title(), "*Untitled - Falcon");

        doc.mark_clean();
        doc.buffer.remove(0, 2);
        assert!(doc.is_dirty());
        assert_eq!(doc.text(), "llo");
    }

    #[test]
    fn test_save_then_reload_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "notes.txt");

        let mut doc = Document::new_untitled();
        doc.buffer.set_text("line one\nline two\n\ttabbed \u{00e9}\n");
        doc.save_as(&path).unwrap();
        assert!(!doc.is_dirty());
        assert_eq!(doc.display_name, "notes.txt");

        let mut reloaded = Document::new_untitled();
        reloaded.load(&path).unwrap();
        assert_eq!(reloaded.text(), doc.text());
        assert!(!reloaded.is_dirty());
        assert_eq!(reloaded.file_path.as_deref(), Some(path.as_str()));
    }

    #[test]
    fn test_save_clears_dirty_flag() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "a.txt");

        let mut doc = Document::new_untitled();
        doc.save_as(&path).unwrap();
        doc.buffer.append("more");
        assert!(doc.is_dirty());

        doc.save().unwrap();
        assert!(!doc.is_dirty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "more");
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut doc = Document::new_untitled();
        doc.buffer.set_text("unsaved");
        assert!(matches!(doc.save(), Err(AppError::NoPath)));
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_failed_load_leaves_state_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::new_untitled();
        doc.buffer.set_text("keep me");

        let result = doc.load(&path_in(&dir, "missing.txt"));
        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(doc.text(), "keep me");
        assert!(doc.is_dirty());
        assert!(doc.file_path.is_none());
        assert_eq!(doc.display_name, "Untitled");
    }

    #[test]
    fn test_failed_save_as_keeps_previous_path() {
        let dir = TempDir::new().unwrap();
        let good = path_in(&dir, "good.txt");
        let mut doc = Document::new_untitled();
        doc.save_as(&good).unwrap();
        doc.buffer.set_text("changed");

        let bad = dir.path().join("no-such-dir").join("bad.txt");
        assert!(doc.save_as(&bad.to_string_lossy()).is_err());
        assert_eq!(doc.file_path.as_deref(), Some(good.as_str()));
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_reset_discards_everything() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "a.txt");
        let mut doc = Document::new_untitled();
        doc.buffer.set_text("text");
        doc.save_as(&path).unwrap();
        doc.buffer.append("!");

        doc.reset();
        assert_eq!(doc.text(), "");
        assert!(!doc.is_dirty());
        assert!(doc.file_path.is_none());
        assert_eq!(doc.display_name, "Untitled");
    }
}
