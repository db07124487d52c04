/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    OpenRecent(usize),
    ClearRecent,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Edit
    EditUndo,
    EditCut,
    EditCopy,
    EditPaste,
    EditDelete,
    SelectAll,
    ShowFind,
    FindNext,
    ShowReplace,

    // View
    ToggleDarkMode,
    ToggleFullscreen,
    ToggleLineNumbers,
    ToggleWordWrap,
    ToggleStatusBar,

    // Help
    ShowAbout,

    // Editor and timer notifications
    BufferModified,
    CursorMoved,
    AutosaveTick,
}
