//! Embedded gallery manifest

use gallery_common::Gallery;
use tracing::{error, info};

const MANIFEST: &str = include_str!("../gallery.yaml");

/// Parse the embedded manifest. A broken manifest leaves the gallery empty
/// rather than taking the page down.
pub fn load_gallery() -> Gallery {
    match Gallery::from_yaml(MANIFEST) {
        Ok(gallery) => {
            info!(projects = gallery.registry.len(), "Loaded gallery manifest");
            gallery
        }
        Err(e) => {
            error!("Invalid gallery manifest, starting empty: {e}");
            Gallery::default()
        }
    }
}
