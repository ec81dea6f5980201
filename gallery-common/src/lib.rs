//! gallery-common - Pure portfolio logic shared by the views and the web shell
//!
//! Nothing in here touches the DOM or the network, so the whole selection
//! cycle can be exercised on the host.

pub mod fetch_error;
pub mod manifest;
pub mod markdown;
pub mod project;
pub mod project_detail;
pub mod site;

pub use fetch_error::FetchError;
pub use manifest::Gallery;
pub use markdown::{MarkdownRenderer, RenderedMarkdown};
pub use project::{resolve_activation, ProjectDescriptor, Registry, RegistryError};
pub use project_detail::{
    DemoMount, DisplayMode, ProjectDetail, ReadmeRequest, ReadmeState, SelectionTicket,
};
pub use site::SiteConfig;
