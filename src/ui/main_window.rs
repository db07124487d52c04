use fltk::{
    app::{self, Sender},
    enums::{Align, Color, Event, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::document::APP_NAME;
use crate::app::messages::Message;

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_BAR_HEIGHT: i32 = 22;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub status_bar: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1000, 700, None);
    wind.set_label(&format!("Untitled - {}", APP_NAME));
    wind.set_xclass("falcon");

    let mut flex = Flex::new(0, 0, 1000, 700, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    text_editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

    // Key and mouse releases are where the cursor settles; the editor still
    // handles the event itself.
    let s = *sender;
    text_editor.handle(move |_, ev| {
        if matches!(ev, Event::KeyUp | Event::Released) {
            s.send(Message::CursorMoved);
        }
        false
    });

    let mut status_bar = Frame::default();
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_align(Align::Left | Align::Inside);
    status_bar.set_label_size(12);
    flex.fixed(&status_bar, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Only a real close request quits; Escape would otherwise close the window.
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        status_bar,
    }
}
