use fltk::{
    button::{Button, CheckButton},
    dialog,
    enums::CallbackTrigger,
    frame::Frame,
    input::Input,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use super::run_dialog;
use crate::app::buffer_utils::buffer_text;
use crate::app::search::SearchState;

/// Select the next match after the cursor, wrapping to the top once.
///
/// Returns false (after telling the user) when there is no match at all.
pub fn find_and_select(buffer: &mut TextBuffer, editor: &mut TextEditor, search: &SearchState) -> bool {
    let text = buffer_text(buffer);
    let cursor = editor.insert_position().max(0) as usize;

    match search.find_next(&text, cursor) {
        Some(hit) => {
            buffer.select(hit.start as i32, hit.end as i32);
            editor.set_insert_position(hit.end as i32);
            editor.show_insert_position();
            if hit.wrapped {
                log::debug!("Search for '{}' wrapped to the beginning", search.query);
            }
            true
        }
        None => {
            dialog::message_default(&format!("Cannot find '{}'", search.query));
            false
        }
    }
}

/// Replace the current selection if it is a match, then move to the next one.
pub fn replace_and_find(buffer: &mut TextBuffer, editor: &mut TextEditor, search: &SearchState) {
    if let Some(cursor) = search.replace_selection(buffer) {
        editor.set_insert_position(cursor as i32);
    }
    find_and_select(buffer, editor, search);
}

/// Replace every match in the buffer; returns how many were replaced.
pub fn replace_all(buffer: &mut TextBuffer, editor: &mut TextEditor, search: &SearchState) -> usize {
    let count = search.replace_all(buffer);
    if count > 0 {
        editor.set_insert_position(0);
    }
    count
}

struct SearchForm {
    find_input: Input,
    replace_input: Option<Input>,
    case_check: CheckButton,
}

impl SearchForm {
    /// Copy the form into the shared search state. False when the query is empty.
    fn store(&self, search: &Rc<RefCell<SearchState>>) -> bool {
        let query = self.find_input.value();
        if query.is_empty() {
            dialog::message_default("Please enter text to find");
            return false;
        }
        let mut s = search.borrow_mut();
        s.query = query;
        s.case_sensitive = self.case_check.is_checked();
        if let Some(ref input) = self.replace_input {
            s.replacement = input.value();
        }
        true
    }
}

fn build_dialog(
    label: &str,
    with_replace: bool,
    search: &Rc<RefCell<SearchState>>,
) -> (Window, SearchForm) {
    let height = if with_replace { 220 } else { 150 };
    let dialog_win = Window::default()
        .with_size(400, height)
        .with_label(label)
        .center_screen();

    let current = search.borrow();

    Frame::default().with_pos(20, 20).with_size(80, 30).with_label("Find what:");
    let mut find_input = Input::default().with_pos(110, 20).with_size(270, 30);
    find_input.set_value(&current.query);

    let replace_input = if with_replace {
        Frame::default().with_pos(20, 60).with_size(80, 30).with_label("Replace:");
        let mut input = Input::default().with_pos(110, 60).with_size(270, 30);
        input.set_value(&current.replacement);
        Some(input)
    } else {
        None
    };

    let check_y = if with_replace { 100 } else { 60 };
    let mut case_check = CheckButton::default()
        .with_pos(110, check_y).with_size(200, 25).with_label("Match case");
    case_check.set_checked(current.case_sensitive);

    (
        dialog_win,
        SearchForm {
            find_input,
            replace_input,
            case_check,
        },
    )
}

fn wire_close(dialog_win: &mut Window, close_btn: &mut Button) {
    let mut dialog_close = dialog_win.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    let mut dialog_x = dialog_win.clone();
    dialog_win.set_callback(move |_| {
        dialog_x.hide();
    });
}

/// Show Find dialog
pub fn show_find_dialog(buffer: &TextBuffer, editor: &TextEditor, search: Rc<RefCell<SearchState>>) {
    let (mut dialog_win, form) = build_dialog("Find", false, &search);

    let mut find_btn = Button::default()
        .with_pos(200, 100).with_size(90, 30).with_label("Find Next");
    let mut close_btn = Button::default()
        .with_pos(300, 100).with_size(90, 30).with_label("Close");

    dialog_win.end();
    dialog_win.make_resizable(false);
    dialog_win.show();

    let mut find_input = form.find_input.clone();
    let form = Rc::new(form);
    let mut tb = buffer.clone();
    let mut te = editor.clone();
    let st = search.clone();
    find_btn.set_callback(move |_| {
        if form.store(&st) {
            let s = st.borrow().clone();
            find_and_select(&mut tb, &mut te, &s);
        }
    });

    // Enter in the query field triggers Find Next
    let mut find_btn2 = find_btn.clone();
    find_input.set_trigger(CallbackTrigger::EnterKey);
    find_input.set_callback(move |_| {
        find_btn2.do_callback();
    });

    wire_close(&mut dialog_win, &mut close_btn);
    run_dialog(&dialog_win);
}

/// Show Find & Replace dialog
pub fn show_replace_dialog(buffer: &TextBuffer, editor: &TextEditor, search: Rc<RefCell<SearchState>>) {
    let (mut dialog_win, form) = build_dialog("Find & Replace", true, &search);

    let mut find_btn = Button::default()
        .with_pos(20, 140).with_size(90, 30).with_label("Find Next");
    let mut replace_btn = Button::default()
        .with_pos(120, 140).with_size(90, 30).with_label("Replace");
    let mut replace_all_btn = Button::default()
        .with_pos(220, 140).with_size(100, 30).with_label("Replace All");
    let mut close_btn = Button::default()
        .with_pos(300, 180).with_size(90, 30).with_label("Close");

    dialog_win.end();
    dialog_win.make_resizable(false);
    dialog_win.show();

    let form = Rc::new(form);

    let (f1, st1, mut tb1, mut te1) = (form.clone(), search.clone(), buffer.clone(), editor.clone());
    find_btn.set_callback(move |_| {
        if f1.store(&st1) {
            let s = st1.borrow().clone();
            find_and_select(&mut tb1, &mut te1, &s);
        }
    });

    let (f2, st2, mut tb2, mut te2) = (form.clone(), search.clone(), buffer.clone(), editor.clone());
    replace_btn.set_callback(move |_| {
        if f2.store(&st2) {
            let s = st2.borrow().clone();
            replace_and_find(&mut tb2, &mut te2, &s);
        }
    });

    let (f3, st3, mut tb3, mut te3) = (form.clone(), search.clone(), buffer.clone(), editor.clone());
    replace_all_btn.set_callback(move |_| {
        if f3.store(&st3) {
            let s = st3.borrow().clone();
            let count = replace_all(&mut tb3, &mut te3, &s);
            if count > 0 {
                dialog::message_default(&format!("Replaced {} occurrence(s)", count));
            } else {
                dialog::message_default(&format!("Cannot find '{}'", s.query));
            }
        }
    });

    wire_close(&mut dialog_win, &mut close_btn);
    run_dialog(&dialog_win);
}
