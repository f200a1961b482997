use crate::models::Photo;

pub const DEFAULT_FILE_STEM: &str = "photo";
pub const DEFAULT_EXTENSION: &str = "jpg";

const KNOWN_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "avif", "heic",
];

/// Suggested file name for saving a photo: its title with unsafe characters
/// replaced, plus the source's image extension.
pub fn download_file_name(photo: &Photo) -> String {
    format!("{}.{}", file_stem(&photo.title), source_extension(&photo.src))
}

fn file_stem(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if cleaned.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        cleaned.to_string()
    }
}

fn source_extension(src: &str) -> String {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let last_segment = path.rsplit(['/', '\\']).next().unwrap_or(path);
    last_segment
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| KNOWN_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}
