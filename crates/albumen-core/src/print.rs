//! Printable HTML documents for a single photo or a whole album.
//!
//! The documents start printing themselves from a script that waits for every
//! image to finish loading (or fail), instead of guessing with a timer.

use quick_xml::escape::escape;

use crate::error::{Error, Result};
use crate::models::Photo;
use crate::orientation::Orientation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintDocument {
    pub title: String,
    pub html: String,
}

const PRINT_WHEN_LOADED: &str = r#"<script>
(function () {
  var images = Array.prototype.slice.call(document.images);
  var pending = images.length;
  function settle() {
    pending -= 1;
    if (pending <= 0) { window.print(); }
  }
  if (pending === 0) { window.addEventListener("load", function () { window.print(); }); return; }
  images.forEach(function (img) {
    if (img.complete) { settle(); return; }
    img.addEventListener("load", settle);
    img.addEventListener("error", settle);
  });
})();
</script>"#;

/// Columns on the printed page. Landscape photos need the wider cells.
pub fn print_columns(orientation: Orientation) -> usize {
    match orientation {
        Orientation::Portrait => 3,
        Orientation::Landscape => 2,
    }
}

pub fn photo_document(photo: &Photo) -> PrintDocument {
    let title = escape(photo.title.as_str());
    let url = photo.source_url();
    let src = escape(url.as_str());
    let alt = escape(photo.alt.as_str());
    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n\
         body {{ margin: 0; display: flex; justify-content: center; align-items: center; min-height: 100vh; }}\n\
         img {{ max-width: 100%; max-height: 100vh; object-fit: contain; }}\n\
         @media print {{ @page {{ margin: 0.5cm; }} }}\n\
         </style>\n</head>\n<body>\n<img src=\"{src}\" alt=\"{alt}\">\n{PRINT_WHEN_LOADED}\n</body>\n</html>\n"
    );
    PrintDocument {
        title: photo.title.clone(),
        html,
    }
}

/// Lay out every photo of an album on printable pages. Refuses to build an
/// empty document.
pub fn album_document(
    title: &str,
    photos: &[Photo],
    orientation: Orientation,
) -> Result<PrintDocument> {
    if photos.is_empty() {
        return Err(Error::NothingToPrint);
    }

    let columns = print_columns(orientation);
    let aspect = match orientation {
        Orientation::Portrait => "3 / 4",
        Orientation::Landscape => "4 / 3",
    };

    let mut figures = String::new();
    for photo in photos {
        figures.push_str(&format!(
            "<figure><img src=\"{}\" alt=\"{}\"><figcaption>{}</figcaption></figure>\n",
            escape(photo.source_url().as_str()),
            escape(photo.alt.as_str()),
            escape(photo.title.as_str()),
        ));
    }

    let escaped_title = escape(title);
    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{escaped_title}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 1cm; }}\n\
         h1 {{ text-align: center; }}\n\
         .grid {{ display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 0.5cm; }}\n\
         figure {{ margin: 0; break-inside: avoid; }}\n\
         img {{ width: 100%; aspect-ratio: {aspect}; object-fit: cover; }}\n\
         figcaption {{ font-size: 10pt; text-align: center; }}\n\
         @media print {{ @page {{ margin: 1cm; }} }}\n\
         </style>\n</head>\n<body>\n<h1>{escaped_title}</h1>\n<div class=\"grid\">\n{figures}</div>\n\
         {PRINT_WHEN_LOADED}\n</body>\n</html>\n"
    );

    Ok(PrintDocument {
        title: title.to_string(),
        html,
    })
}
