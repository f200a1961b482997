use std::time::Duration;

use iced::Subscription;
use muda::accelerator::{Accelerator, Code, Modifiers};
use muda::{Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu};

use crate::app::Message;

pub struct AppMenu {
    _menu: Menu,
}

pub fn build() -> muda::Result<AppMenu> {
    let menu = Menu::new();

    // macOS uses the first submenu as the app menu (title replaced with app name)
    let app_menu = Submenu::with_items(
        "albumen",
        true,
        &[
            &PredefinedMenuItem::about(None, None),
            &PredefinedMenuItem::separator(),
            &PredefinedMenuItem::hide(None),
            &PredefinedMenuItem::hide_others(None),
            &PredefinedMenuItem::show_all(None),
            &PredefinedMenuItem::separator(),
            &PredefinedMenuItem::quit(None),
        ],
    )?;

    let file_menu = Submenu::with_id_and_items(
        "file",
        "File",
        true,
        &[
            &MenuItem::with_id(
                "new-album",
                "New Album",
                true,
                Some(Accelerator::new(Some(Modifiers::META), Code::KeyN)),
            ),
            &MenuItem::with_id(
                "add-photos",
                "Add Photos...",
                true,
                Some(Accelerator::new(Some(Modifiers::META), Code::KeyO)),
            ),
            &PredefinedMenuItem::separator(),
            &MenuItem::with_id(
                "print-album",
                "Print Album",
                true,
                Some(Accelerator::new(Some(Modifiers::META), Code::KeyP)),
            ),
        ],
    )?;

    menu.append_items(&[&app_menu, &file_menu])?;

    #[cfg(target_os = "macos")]
    menu.init_for_nsapp();

    Ok(AppMenu { _menu: menu })
}

pub fn subscription() -> Subscription<Message> {
    iced::time::every(Duration::from_millis(50)).map(|_| match MenuEvent::receiver().try_recv() {
        Ok(event) if event.id == "new-album" => Message::NewAlbum,
        Ok(event) if event.id == "add-photos" => Message::AddPhotos,
        Ok(event) if event.id == "print-album" => Message::PrintAlbum,
        _ => Message::Noop,
    })
}
