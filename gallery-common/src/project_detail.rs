//! Project detail lifecycle
//!
//! `ProjectDetail` owns the current selection and everything the detail pane
//! shows for it. A selection cycle is a synchronous reset followed by
//! population; the README arrives later through [`ProjectDetail::apply_readme`],
//! tagged with the [`SelectionTicket`] it was requested under. Results whose
//! ticket is no longer current are dropped.

use crate::fetch_error::FetchError;
use crate::project::ProjectDescriptor;
use crate::site::SiteConfig;
use tracing::{debug, info, warn};

/// Link target used while no repository applies
pub const REPO_LINK_PLACEHOLDER: &str = "#";

/// Which half of the content area is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Readme,
    Demo,
}

/// Identifies the selection cycle a fetch was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket(u64);

/// README fetch the caller must perform for a new selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeRequest {
    pub ticket: SelectionTicket,
    pub url: String,
}

/// README content for the current selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReadmeState {
    /// Nothing selected
    #[default]
    Idle,
    Loading,
    /// README text, or the failure message shown in its place
    Loaded(String),
}

/// The single demo mounted in the demo region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoMount {
    /// Same-origin page fetched and injected
    Inline { project_id: String, path: String },
    /// External page shown in an isolated frame
    Frame { project_id: String, src: String },
}

/// State of the project detail pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    project: Option<ProjectDescriptor>,
    generation: u64,
    mode: DisplayMode,
    controls_visible: bool,
    content_visible: bool,
    repo_url: String,
    demo: Option<DemoMount>,
    readme: ReadmeState,
}

impl Default for ProjectDetail {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectDetail {
    pub fn new() -> Self {
        Self {
            project: None,
            generation: 0,
            mode: DisplayMode::Readme,
            controls_visible: false,
            content_visible: false,
            repo_url: REPO_LINK_PLACEHOLDER.to_string(),
            demo: None,
            readme: ReadmeState::Idle,
        }
    }

    /// Replace the selection and rebuild.
    ///
    /// Returns the README fetch to run when a project was selected. Passing
    /// `None` clears the pane and invalidates any fetch still in flight.
    pub fn select(
        &mut self,
        project: Option<ProjectDescriptor>,
        site: &SiteConfig,
    ) -> Option<ReadmeRequest> {
        self.generation += 1;
        self.project = project;
        self.reset();

        let project = self.project.as_ref()?;
        info!(
            project = project.identifier(),
            external = project.is_externally_hosted(),
            "Selected project"
        );

        if !project.hide_controls() {
            let id = project.identifier();
            let external = project.is_externally_hosted();
            self.controls_visible = true;
            self.repo_url = site.repo_url(id, external);
            self.demo = Some(if external {
                DemoMount::Frame {
                    project_id: id.to_string(),
                    src: site.frame_url(id),
                }
            } else {
                DemoMount::Inline {
                    project_id: id.to_string(),
                    path: site.inline_demo_path(id),
                }
            });
        }
        self.content_visible = true;
        self.mode = DisplayMode::Readme;
        self.readme = ReadmeState::Loading;

        Some(ReadmeRequest {
            ticket: self.ticket(),
            url: site.readme_url(project.identifier(), project.is_externally_hosted()),
        })
    }

    fn reset(&mut self) {
        self.controls_visible = false;
        self.content_visible = false;
        self.mode = DisplayMode::Readme;
        self.demo = None;
        self.repo_url = REPO_LINK_PLACEHOLDER.to_string();
        self.readme = ReadmeState::Idle;
    }

    /// Apply a finished README fetch. Failures are shown as their message.
    ///
    /// Returns `false` when the result belongs to a superseded selection and
    /// was discarded.
    pub fn apply_readme(
        &mut self,
        ticket: SelectionTicket,
        result: Result<String, FetchError>,
    ) -> bool {
        if ticket != self.ticket() {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "Discarding README for a superseded selection"
            );
            return false;
        }

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    project = self.project.as_ref().map(|p| p.identifier()),
                    "README fetch failed: {e}"
                );
                e.to_string()
            }
        };
        self.readme = ReadmeState::Loaded(text);
        true
    }

    pub fn show_readme(&mut self) {
        self.mode = DisplayMode::Readme;
    }

    /// Switch to the demo. Ignored when controls are hidden, since there is
    /// nothing mounted to show.
    pub fn show_demo(&mut self) {
        if !self.controls_visible {
            debug!("Demo requested with controls hidden, ignoring");
            return;
        }
        self.mode = DisplayMode::Demo;
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        match mode {
            DisplayMode::Readme => self.show_readme(),
            DisplayMode::Demo => self.show_demo(),
        }
    }

    pub fn ticket(&self) -> SelectionTicket {
        SelectionTicket(self.generation)
    }

    /// Bumped on every selection; used to key the mounted demo view.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn project(&self) -> Option<&ProjectDescriptor> {
        self.project.as_ref()
    }

    /// Heading text; empty when nothing is selected.
    pub fn title(&self) -> &str {
        self.project.as_ref().map(|p| p.title()).unwrap_or_default()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn readme_visible(&self) -> bool {
        self.mode == DisplayMode::Readme
    }

    pub fn demo_visible(&self) -> bool {
        self.mode == DisplayMode::Demo
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    pub fn demo(&self) -> Option<&DemoMount> {
        self.demo.as_ref()
    }

    pub fn readme(&self) -> &ReadmeState {
        &self.readme
    }
}
