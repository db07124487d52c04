use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::file_filters::{open_filter, save_filter};

fn run_chooser(kind: FileDialogType, filter: &str, directory: Option<&str>) -> Option<String> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_filter(filter);
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            log::debug!("Ignoring dialog directory {}: {}", dir, e);
        }
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    run_chooser(FileDialogType::BrowseFile, &open_filter(), directory)
}

pub fn native_save_dialog(directory: Option<&str>) -> Option<String> {
    run_chooser(FileDialogType::BrowseSaveFile, &save_filter(), directory)
}
