mod demo;
mod gallery;
mod project;

pub use demo::InlineDemo;
pub use gallery::{select_project, GalleryRoot};
pub use project::ProjectPane;
