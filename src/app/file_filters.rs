/// Filter for the Open dialog.
///
/// FLTK's chooser takes tab-separated "Description\tPattern" lines and
/// adds "All Files (*)" on its own.
pub fn open_filter() -> String {
    [
        "Text Files\t*.txt",
        "Markdown Files\t*.{md,markdown}",
        "Source Files\t*.{rs,c,cpp,h,py,js,ts}",
        "Config Files\t*.{json,yaml,yml,toml,ini,cfg,conf}",
    ]
    .join("\n")
}

/// Save As accepts any name.
pub fn save_filter() -> String {
    "*".to_string()
}
