use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::recent_files::RecentFiles;
use crate::app::settings::AppSettings;
use crate::app::text_ops::extract_filename;

pub const RECENT_MENU: &str = "File/Open Recent";

fn toggle_flag(on: bool) -> MenuFlag {
    if on { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle }
}

pub fn build_menu(
    menu: &mut MenuBar,
    sender: &Sender<Message>,
    settings: &AppSettings,
    initial_dark_mode: bool,
) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add(RECENT_MENU, Shortcut::None, MenuFlag::Submenu, |_| {});
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Undo", Shortcut::Ctrl | 'z', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Edit/Delete", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditDelete) });
    menu.add("Edit/Select All", Shortcut::Ctrl | 'a', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::SelectAll) });
    menu.add("Edit/Find...", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFind) });
    menu.add("Edit/Find Next", Shortcut::from_key(Key::F3), MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FindNext) });
    menu.add("Edit/Replace...", Shortcut::Ctrl | 'h', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowReplace) });

    // View
    menu.add("View/Toggle Dark Mode", Shortcut::None, toggle_flag(initial_dark_mode), { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    menu.add("View/Toggle Fullscreen", Shortcut::from_key(Key::F11), MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleFullscreen) });
    menu.add("View/Toggle Line Numbers", Shortcut::None, toggle_flag(settings.line_numbers_enabled), { let s = *s; move |_| s.send(Message::ToggleLineNumbers) });
    menu.add("View/Toggle Word Wrap", Shortcut::None, toggle_flag(settings.word_wrap_enabled), { let s = *s; move |_| s.send(Message::ToggleWordWrap) });
    menu.add("View/Toggle Status Bar", Shortcut::None, toggle_flag(settings.status_bar_visible), { let s = *s; move |_| s.send(Message::ToggleStatusBar) });

    // Help
    menu.add("Help/About", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Menu label for a recent entry: "1 notes.txt".
///
/// `add()` splits paths on `/` and treats `\` as an escape, and labels
/// render `&` as a shortcut marker, so all three are escaped.
pub fn recent_menu_label(index: usize, path: &str) -> String {
    let name = extract_filename(path)
        .replace('\\', "\\\\")
        .replace('/', "\\/")
        .replace('&', "&&");
    format!("{} {}", index + 1, name)
}

/// Replace the Open Recent submenu with the current list.
pub fn rebuild_recent_menu(menu: &mut MenuBar, sender: &Sender<Message>, recent: &RecentFiles) {
    let idx = menu.find_index(RECENT_MENU);
    if idx < 0 {
        log::warn!("Recent files menu is missing");
        return;
    }
    if let Err(e) = menu.clear_submenu(idx) {
        log::warn!("Failed to clear recent files menu: {}", e);
        return;
    }

    if recent.is_empty() {
        menu.add(&format!("{}/(empty)", RECENT_MENU), Shortcut::None, MenuFlag::Inactive, |_| {});
        return;
    }

    let last = recent.entries().len() - 1;
    for (i, path) in recent.entries().iter().enumerate() {
        let flag = if i == last { MenuFlag::MenuDivider } else { MenuFlag::Normal };
        let label = format!("{}/{}", RECENT_MENU, recent_menu_label(i, path));
        let s = *sender;
        menu.add(&label, Shortcut::None, flag, move |_| s.send(Message::OpenRecent(i)));
    }
    let s = *sender;
    menu.add(&format!("{}/Clear List", RECENT_MENU), Shortcut::None, MenuFlag::Normal, move |_| s.send(Message::ClearRecent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_label_uses_file_name() {
        assert_eq!(recent_menu_label(0, "/home/user/notes.txt"), "1 notes.txt");
        assert_eq!(recent_menu_label(4, "todo.md"), "5 todo.md");
    }

    #[test]
    fn test_recent_label_escapes_ampersand() {
        assert_eq!(recent_menu_label(1, "/tmp/a&b.txt"), "2 a&&b.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_recent_label_escapes_backslash() {
        assert_eq!(recent_menu_label(2, "/tmp/back\\slash"), "3 back\\\\slash");
    }
}
