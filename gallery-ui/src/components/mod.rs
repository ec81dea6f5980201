//! Shared UI components

pub mod button;
pub mod demo;
pub mod helpers;
pub mod icons;
pub mod layout;
pub mod markdown_view;
pub mod mode_switch;
pub mod project_detail;
pub mod project_nav;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use demo::{FrameDemoView, InlineDemoState, InlineDemoView};
pub use helpers::LoadingSpinner;
pub use icons::{AlertTriangleIcon, ExternalLinkIcon, FileTextIcon, PlayIcon};
pub use layout::GalleryLayoutView;
pub use markdown_view::MarkdownView;
pub use mode_switch::ModeSwitch;
pub use project_detail::ProjectDetailView;
pub use project_nav::ProjectNavView;
