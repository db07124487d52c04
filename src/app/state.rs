use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use fltk::{
    app::Sender,
    dialog,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextEditor, WrapMode},
    window::Window,
};

use super::autosave::{remove_autosave, write_autosave};
use super::document::Document;
use super::messages::Message;
use super::recent_files::RecentFiles;
use super::search::SearchState;
use super::settings::AppSettings;
use super::status::{cursor_line_column, status_text};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::find::{find_and_select, show_find_dialog, show_replace_dialog};
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::{MainWidgets, STATUS_BAR_HEIGHT};
use crate::ui::menu::rebuild_recent_menu;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub document: Document,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub flex: Flex,
    pub status_bar: Frame,
    pub sender: Sender<Message>,
    pub settings: AppSettings,
    pub recent: RecentFiles,
    pub search: Rc<RefCell<SearchState>>,
    pub dark_mode: bool,
    pub fullscreen: bool,
    pub show_linenumbers: bool,
    pub word_wrap: bool,
    pub show_status_bar: bool,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: AppSettings,
        recent: RecentFiles,
        dark_mode: bool,
    ) -> Self {
        let mut document = Document::new_untitled();
        document.notify_modifications(sender);

        let mut editor = widgets.text_editor;
        editor.set_buffer(document.buffer.clone());
        editor.set_text_size(settings.font_size as i32);

        let show_linenumbers = settings.line_numbers_enabled;
        let word_wrap = settings.word_wrap_enabled;
        let show_status_bar = settings.status_bar_visible;

        Self {
            document,
            editor,
            window: widgets.wind,
            menu: widgets.menu,
            flex: widgets.flex,
            status_bar: widgets.status_bar,
            sender,
            settings,
            recent,
            search: Rc::new(RefCell::new(SearchState::default())),
            dark_mode,
            fullscreen: false,
            show_linenumbers,
            word_wrap,
            show_status_bar,
            last_open_directory: None,
        }
    }

    /// Push the startup view settings onto the widgets.
    pub fn apply_initial_view(&mut self) {
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.status_bar,
            self.dark_mode,
        );
        self.apply_line_numbers();
        self.apply_word_wrap();
        self.apply_status_bar_visibility();
        rebuild_recent_menu(&mut self.menu, &self.sender, &self.recent);
        self.refresh_chrome();
    }

    /// Must run after the window is shown.
    pub fn apply_platform_theme(&self) {
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.dark_mode);
    }

    // --- Title and status bar ---

    pub fn update_window_title(&mut self) {
        self.window.set_label(&self.document.title());
    }

    pub fn update_status_bar(&mut self) {
        if !self.show_status_bar {
            return;
        }
        let (line, column) = cursor_line_column(&self.document.buffer, self.editor.insert_position());
        let label = status_text(
            line,
            column,
            &self.document.display_name,
            self.document.is_dirty(),
        );
        self.status_bar.set_label(&label);
        self.status_bar.redraw();
    }

    fn refresh_chrome(&mut self) {
        self.update_window_title();
        self.update_status_bar();
    }

    pub fn on_buffer_modified(&mut self) {
        self.refresh_chrome();
    }

    pub fn on_cursor_moved(&mut self) {
        self.update_status_bar();
    }

    // --- File operations ---

    /// Ask what to do with unsaved changes. Returns true when it is fine to
    /// throw the current buffer away.
    fn confirm_discard(&mut self) -> bool {
        if !self.document.is_dirty() {
            return true;
        }

        let choice = dialog::choice2_default(
            &format!("\"{}\" has unsaved changes.", self.document.display_name),
            "Save",
            "Discard",
            "Cancel",
        );

        match choice {
            Some(0) => {
                self.file_save();
                !self.document.is_dirty()
            }
            Some(1) => true,
            _ => false,
        }
    }

    fn remember_directory(&mut self, path: &str) {
        if let Some(parent) = Path::new(path).parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    fn remember_recent(&mut self, path: &str) {
        if let Err(e) = self.recent.push(path) {
            log::warn!("Failed to update recent files: {}", e);
        }
        rebuild_recent_menu(&mut self.menu, &self.sender, &self.recent);
    }

    pub fn file_new(&mut self) {
        if !self.confirm_discard() {
            return;
        }
        self.document.reset();
        self.editor.set_insert_position(0);
        self.refresh_chrome();
    }

    /// Load `path` into the editor, reporting failure in an alert.
    pub fn open_file(&mut self, path: &str) -> bool {
        self.remember_directory(path);
        match self.document.load(path) {
            Ok(()) => {
                log::info!("Opened {}", path);
                self.editor.set_insert_position(0);
                self.editor.show_insert_position();
                self.remember_recent(path);
                self.refresh_chrome();
                true
            }
            Err(e) => {
                log::warn!("Failed to open {}: {}", path, e);
                dialog::alert_default(&format!("Error opening file: {}", e));
                false
            }
        }
    }

    pub fn file_open(&mut self) {
        if !self.confirm_discard() {
            return;
        }
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.open_file(&path);
        }
    }

    pub fn open_recent(&mut self, index: usize) {
        let Some(path) = self.recent.get(index).map(str::to_string) else {
            return;
        };
        if !self.confirm_discard() {
            return;
        }
        if !self.open_file(&path) {
            // Stale entry: the file moved or was deleted.
            if let Err(e) = self.recent.remove(&path) {
                log::warn!("Failed to update recent files: {}", e);
            }
            rebuild_recent_menu(&mut self.menu, &self.sender, &self.recent);
        }
    }

    pub fn clear_recent(&mut self) {
        if let Err(e) = self.recent.clear() {
            log::warn!("Failed to clear recent files: {}", e);
        }
        rebuild_recent_menu(&mut self.menu, &self.sender, &self.recent);
    }

    pub fn file_save(&mut self) {
        let Some(path) = self.document.file_path.clone() else {
            self.file_save_as();
            return;
        };

        match self.document.save() {
            Ok(()) => {
                log::info!("Saved {}", path);
                self.after_save(&path);
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(path) = native_save_dialog(self.last_open_directory.as_deref()) else {
            return;
        };
        self.remember_directory(&path);

        match self.document.save_as(&path) {
            Ok(()) => {
                log::info!("Saved as {}", path);
                self.remember_recent(&path);
                self.after_save(&path);
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    fn after_save(&mut self, path: &str) {
        if let Err(e) = remove_autosave(path) {
            log::warn!("Failed to remove stale autosave for {}: {}", path, e);
        }
        self.refresh_chrome();
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        self.confirm_discard()
    }

    pub fn autosave_tick(&mut self) {
        match write_autosave(&self.document) {
            Ok(Some(path)) => log::debug!("Autosaved to {}", path.display()),
            Ok(None) => {}
            Err(e) => log::warn!("Autosave failed: {}", e),
        }
    }

    // --- Edit ---

    pub fn undo(&mut self) {
        self.editor.undo();
    }

    pub fn cut(&mut self) {
        self.editor.cut();
    }

    pub fn copy(&mut self) {
        self.editor.copy();
    }

    pub fn paste(&mut self) {
        self.editor.paste();
    }

    pub fn delete_selection(&mut self) {
        self.document.buffer.remove_selection();
    }

    pub fn select_all(&mut self) {
        let len = self.document.buffer.length();
        self.document.buffer.select(0, len);
        self.editor.set_insert_position(len);
    }

    pub fn show_find(&mut self) {
        show_find_dialog(&self.document.buffer, &self.editor, self.search.clone());
        self.update_status_bar();
    }

    /// Repeat the last search, or open the Find dialog if there is none.
    pub fn find_next(&mut self) {
        let search = self.search.borrow().clone();
        if !search.has_query() {
            self.show_find();
            return;
        }
        find_and_select(&mut self.document.buffer, &mut self.editor, &search);
        self.update_status_bar();
    }

    pub fn show_replace(&mut self) {
        show_replace_dialog(&self.document.buffer, &self.editor, self.search.clone());
        self.refresh_chrome();
    }

    // --- View toggles ---

    fn apply_line_numbers(&mut self) {
        let width = if self.show_linenumbers { 48 } else { 0 };
        self.editor.set_linenumber_width(width);
        self.editor.redraw();
    }

    fn apply_word_wrap(&mut self) {
        if self.word_wrap {
            self.editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            self.editor.wrap_mode(WrapMode::None, 0);
        }
        self.editor.redraw();
    }

    fn apply_status_bar_visibility(&mut self) {
        if self.show_status_bar {
            self.status_bar.show();
            self.flex.fixed(&self.status_bar, STATUS_BAR_HEIGHT);
        } else {
            self.status_bar.hide();
            self.flex.fixed(&self.status_bar, 0);
        }
        self.flex.layout();
        self.window.redraw();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.status_bar,
            self.dark_mode,
        );
        self.apply_platform_theme();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.window.fullscreen(self.fullscreen);
    }

    pub fn toggle_line_numbers(&mut self) {
        self.show_linenumbers = !self.show_linenumbers;
        self.apply_line_numbers();
    }

    pub fn toggle_word_wrap(&mut self) {
        self.word_wrap = !self.word_wrap;
        self.apply_word_wrap();
    }

    pub fn toggle_status_bar(&mut self) {
        self.show_status_bar = !self.show_status_bar;
        self.apply_status_bar_visibility();
        self.update_status_bar();
    }

    pub fn show_about(&mut self) {
        show_about_dialog();
    }
}
