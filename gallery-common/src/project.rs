use serde::Deserialize;
use std::collections::HashSet;
use std::rc::Rc;

/// One portfolio entry.
///
/// Only constructible through [`ProjectDescriptor::new`] (or deserialization,
/// which goes through the same checks), so a descriptor in hand always has a
/// non-empty title and a path-safe identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawProjectDescriptor")]
pub struct ProjectDescriptor {
    title: String,
    identifier: String,
    externally_hosted: bool,
    hide_controls: bool,
}

/// Wire shape of a registry entry. Accepts the older camelCase keys too.
#[derive(Deserialize)]
struct RawProjectDescriptor {
    title: String,
    #[serde(alias = "projectName")]
    identifier: String,
    #[serde(default, alias = "external")]
    externally_hosted: bool,
    #[serde(default, alias = "hideMenu")]
    hide_controls: bool,
}

impl TryFrom<RawProjectDescriptor> for ProjectDescriptor {
    type Error = RegistryError;

    fn try_from(raw: RawProjectDescriptor) -> Result<Self, Self::Error> {
        let mut descriptor = ProjectDescriptor::new(raw.title, raw.identifier)?;
        descriptor.externally_hosted = raw.externally_hosted;
        descriptor.hide_controls = raw.hide_controls;
        Ok(descriptor)
    }
}

impl ProjectDescriptor {
    pub fn new(
        title: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let title = title.into();
        let identifier = identifier.into();

        if title.trim().is_empty() {
            return Err(RegistryError::EmptyTitle { identifier });
        }
        validate_identifier(&identifier)?;

        Ok(Self {
            title,
            identifier,
            externally_hosted: false,
            hide_controls: false,
        })
    }

    /// Marks the project as living in its own repository with its own pages site.
    pub fn externally_hosted(mut self) -> Self {
        self.externally_hosted = true;
        self
    }

    /// Suppresses the repo link, the README/Demo toggle and the demo mount.
    pub fn with_hidden_controls(mut self) -> Self {
        self.hide_controls = true;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_externally_hosted(&self) -> bool {
        self.externally_hosted
    }

    pub fn hide_controls(&self) -> bool {
        self.hide_controls
    }
}

fn validate_identifier(identifier: &str) -> Result<(), RegistryError> {
    if identifier.trim().is_empty() {
        return Err(RegistryError::EmptyIdentifier);
    }
    let path_unsafe = identifier == "."
        || identifier == ".."
        || identifier
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\' || c == '?' || c == '#');
    if path_unsafe {
        return Err(RegistryError::InvalidIdentifier(identifier.to_string()));
    }
    Ok(())
}

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("project '{identifier}' has an empty title")]
    EmptyTitle { identifier: String },
    #[error("project identifier must not be empty")]
    EmptyIdentifier,
    #[error("project identifier '{0}' is not usable in a path")]
    InvalidIdentifier(String),
    #[error("project identifier '{0}' appears more than once")]
    DuplicateIdentifier(String),
    #[error("invalid gallery manifest: {0}")]
    Manifest(String),
}

/// Ordered, immutable list of projects consumed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    projects: Rc<[ProjectDescriptor]>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            projects: Rc::from(Vec::new()),
        }
    }
}

impl Registry {
    pub fn new(projects: Vec<ProjectDescriptor>) -> Result<Self, RegistryError> {
        {
            let mut seen = HashSet::new();
            if let Some(dup) = projects.iter().find(|p| !seen.insert(p.identifier())) {
                return Err(RegistryError::DuplicateIdentifier(
                    dup.identifier().to_string(),
                ));
            }
        }
        Ok(Self {
            projects: projects.into(),
        })
    }

    pub fn projects(&self) -> &[ProjectDescriptor] {
        &self.projects
    }

    /// Handle to the same list, for views that hold it across renders
    pub fn shared(&self) -> Rc<[ProjectDescriptor]> {
        Rc::clone(&self.projects)
    }

    pub fn get(&self, index: usize) -> Option<&ProjectDescriptor> {
        self.projects.get(index)
    }

    /// The entry selected automatically at startup.
    pub fn first(&self) -> Option<&ProjectDescriptor> {
        self.projects.first()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Resolve a navigation entry's correlation token back to its descriptor.
///
/// Tokens are registry indices rendered as text. Anything that doesn't parse
/// or falls outside the list resolves to `None`, and the activation is dropped.
pub fn resolve_activation<'a>(
    projects: &'a [ProjectDescriptor],
    token: &str,
) -> Option<&'a ProjectDescriptor> {
    let index: usize = token.trim().parse().ok()?;
    projects.get(index)
}
