use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Portrait, Orientation::Landscape];

    /// Strictly wider than tall is landscape; square images count as portrait.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("Portrait"),
            Orientation::Landscape => f.write_str("Landscape"),
        }
    }
}

/// Result of measuring an image on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    pub orientation: Orientation,
    pub dimensions: Option<(u32, u32)>,
}

/// Read the image header to classify its orientation. Unreadable files
/// resolve to portrait rather than failing the caller.
pub fn probe(path: &Path) -> Probe {
    match image::image_dimensions(path) {
        Ok((width, height)) => {
            let orientation = Orientation::from_dimensions(width, height);
            debug!(?path, width, height, %orientation, "probed image");
            Probe {
                orientation,
                dimensions: Some((width, height)),
            }
        }
        Err(err) => {
            warn!(?path, %err, "could not read image dimensions, assuming portrait");
            Probe {
                orientation: Orientation::default(),
                dimensions: None,
            }
        }
    }
}
