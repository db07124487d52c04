use fltk::{app, prelude::*};

use falcon::app::autosave::start_autosave_timer;
use falcon::app::platform::detect_system_dark_mode;
use falcon::app::state::AppState;
use falcon::app::{AppSettings, Message, RecentFiles, ThemeMode};
use falcon::ui::main_window::build_main_window;
use falcon::ui::menu::build_menu;

fn main() {
    env_logger::init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let dark_mode = match settings.theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };
    let recent = RecentFiles::load(RecentFiles::default_path());

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, &settings, dark_mode);

    let autosave_interval = settings.autosave_enabled.then(|| settings.autosave_interval());
    let mut state = AppState::new(widgets, sender, settings, recent, dark_mode);
    state.apply_initial_view();

    if let Some(path) = std::env::args().nth(1) {
        state.open_file(&path);
    }

    state.window.show();
    state.apply_platform_theme();

    if let Some(interval) = autosave_interval {
        start_autosave_timer(interval, sender);
    }

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::OpenRecent(index) => state.open_recent(index),
                Message::ClearRecent => state.clear_recent(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit | Message::WindowClose => {
                    if state.file_quit() {
                        app.quit();
                    }
                }

                Message::EditUndo => state.undo(),
                Message::EditCut => state.cut(),
                Message::EditCopy => state.copy(),
                Message::EditPaste => state.paste(),
                Message::EditDelete => state.delete_selection(),
                Message::SelectAll => state.select_all(),
                Message::ShowFind => state.show_find(),
                Message::FindNext => state.find_next(),
                Message::ShowReplace => state.show_replace(),

                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ToggleFullscreen => state.toggle_fullscreen(),
                Message::ToggleLineNumbers => state.toggle_line_numbers(),
                Message::ToggleWordWrap => state.toggle_word_wrap(),
                Message::ToggleStatusBar => state.toggle_status_bar(),

                Message::ShowAbout => state.show_about(),

                Message::BufferModified => state.on_buffer_modified(),
                Message::CursorMoved => state.on_cursor_moved(),
                Message::AutosaveTick => state.autosave_tick(),
            }
        }
    }
}
