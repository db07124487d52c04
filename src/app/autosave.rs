use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use fltk::app::{self, Sender};

use super::document::Document;
use super::error::Result;
use super::messages::Message;

pub const AUTOSAVE_SUFFIX: &str = ".autosave";

/// Shadow copy location: the document path with `.autosave` appended.
pub fn autosave_path(path: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", path, AUTOSAVE_SUFFIX))
}

/// Write the shadow copy if there is something worth keeping.
///
/// Returns the written path, or `None` when the document is clean or has
/// never been saved. The dirty flag is left alone: the shadow file is a
/// backup, not a save.
pub fn write_autosave(doc: &Document) -> Result<Option<PathBuf>> {
    let Some(path) = doc.file_path.as_deref() else {
        return Ok(None);
    };
    if !doc.is_dirty() {
        return Ok(None);
    }

    let target = autosave_path(path);
    fs::write(&target, doc.text())?;
    Ok(Some(target))
}

/// Delete a stale shadow copy once the real file has been saved.
pub fn remove_autosave(path: &str) -> Result<()> {
    match fs::remove_file(autosave_path(path)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Post `Message::AutosaveTick` every `interval` seconds for the life of
/// the process. The timer re-arms itself from its own callback.
pub fn start_autosave_timer(interval: f64, sender: Sender<Message>) {
    log::info!("Autosave every {}s", interval);
    app::add_timeout3(interval, move |handle| {
        sender.send(Message::AutosaveTick);
        app::repeat_timeout3(interval, handle);
    });
}
