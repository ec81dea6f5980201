//! Site configuration and the addressing rules derived from it

use serde::Deserialize;

/// Where projects, their READMEs and their demos live.
///
/// Every field has a default, so the `site:` block of the manifest may be
/// omitted entirely or only partially overridden.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Code hosting host, e.g. `github.com`
    pub code_host: String,
    /// Account that owns the gallery and every external repository
    pub owner: String,
    /// Repository holding the inline projects
    pub gallery_repo: String,
    /// Branch used for tree links and raw README downloads
    pub branch: String,
    /// Host serving raw repository files
    pub raw_content_host: String,
    /// Origin that external demos are served from; identifiers are appended verbatim
    pub pages_base_url: String,
    /// Directory (relative to the page) holding inline projects
    pub projects_dir: String,
    /// Convert READMEs to HTML. When off, READMEs are shown verbatim.
    pub render_markdown: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            code_host: "github.com".to_string(),
            owner: "robopro".to_string(),
            gallery_repo: "gallery".to_string(),
            branch: "main".to_string(),
            raw_content_host: "raw.githubusercontent.com".to_string(),
            pages_base_url: "https://robopro.github.io/".to_string(),
            projects_dir: "projects".to_string(),
            render_markdown: true,
        }
    }
}

impl SiteConfig {
    /// Link to a project's source.
    pub fn repo_url(&self, identifier: &str, external: bool) -> String {
        if external {
            format!("https://{}/{}/{}", self.code_host, self.owner, identifier)
        } else {
            format!(
                "https://{}/{}/{}/tree/{}/{}/{}",
                self.code_host,
                self.owner,
                self.gallery_repo,
                self.branch,
                self.projects_dir,
                identifier
            )
        }
    }

    /// Same-origin page injected by the inline demo.
    pub fn inline_demo_path(&self, identifier: &str) -> String {
        format!("{}/{identifier}/{identifier}.html", self.projects_dir)
    }

    /// Address the frame demo points at.
    pub fn frame_url(&self, identifier: &str) -> String {
        format!("{}{identifier}", self.pages_base_url)
    }

    pub fn readme_url(&self, identifier: &str, external: bool) -> String {
        if external {
            format!(
                "https://{}/{}/{}/{}/README.md",
                self.raw_content_host, self.owner, identifier, self.branch
            )
        } else {
            format!("{}/{identifier}/README.md", self.projects_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_url_inline_project() {
        let site = SiteConfig::default();
        assert_eq!(
            site.repo_url("foo", false),
            "https://github.com/robopro/gallery/tree/main/projects/foo"
        );
    }

    #[test]
    fn test_repo_url_external_project() {
        let site = SiteConfig::default();
        assert_eq!(site.repo_url("foo", true), "https://github.com/robopro/foo");
    }

    #[test]
    fn test_inline_demo_path() {
        let site = SiteConfig::default();
        assert_eq!(site.inline_demo_path("snake"), "projects/snake/snake.html");
    }

    #[test]
    fn test_frame_url_appends_identifier() {
        let site = SiteConfig::default();
        assert_eq!(site.frame_url("weather"), "https://robopro.github.io/weather");
    }

    #[test]
    fn test_readme_urls() {
        let site = SiteConfig::default();
        assert_eq!(site.readme_url("snake", false), "projects/snake/README.md");
        assert_eq!(
            site.readme_url("weather", true),
            "https://raw.githubusercontent.com/robopro/weather/main/README.md"
        );
    }

    #[test]
    fn test_overrides_flow_into_urls() {
        let site = SiteConfig {
            owner: "someone".into(),
            branch: "trunk".into(),
            ..SiteConfig::default()
        };
        assert_eq!(
            site.repo_url("x", false),
            "https://github.com/someone/gallery/tree/trunk/projects/x"
        );
        assert_eq!(
            site.readme_url("x", true),
            "https://raw.githubusercontent.com/someone/x/trunk/README.md"
        );
    }
}
