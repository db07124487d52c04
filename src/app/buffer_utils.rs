use fltk::text::TextBuffer;

/// Copy the contents of a `TextBuffer` into a `String`.
///
/// `TextBuffer::text()` copies FLTK's `malloc()`'d C string but never frees
/// it, so every call leaks a buffer-sized allocation. Autosave reads the whole
/// buffer on every tick, which makes that leak grow without bound. This
/// helper goes through the C API directly and frees the copy.
pub fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live Fl_Text_Buffer owned by `buf`.
    // Fl_Text_Buffer_text returns a NUL-terminated malloc'd copy (or null),
    // which is read once and released with the matching `free`.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_text_matches_contents() {
        let mut buf = TextBuffer::default();
        assert_eq!(buffer_text(&buf), "");

        buf.set_text("first line\nsecond line");
        assert_eq!(buffer_text(&buf), "first line\nsecond line");
    }
}
