use iced::Color;

pub mod album;
pub mod albums;
pub mod gallery;

pub const CANVAS_BG: Color = Color::from_rgb(0.08, 0.08, 0.08);

/// "1 photo", "3 photos".
pub fn plural(count: usize, one: &str, many: &str) -> String {
    match count {
        1 => format!("1 {one}"),
        n => format!("{n} {many}"),
    }
}
