//! Selection cycles driven the way the web shell drives them: registry
//! activation, selection, README arrival and tab toggles.

use gallery_common::{
    resolve_activation, DemoMount, DisplayMode, FetchError, Gallery, MarkdownRenderer,
    ProjectDetail, ReadmeState, RenderedMarkdown,
};

const MANIFEST: &str = r#"
site:
  owner: robopro
projects:
  - title: About
    identifier: about
    hide_controls: true
  - title: Snake
    identifier: snake
  - title: Weather
    projectName: weather
    external: true
"#;

fn gallery() -> Gallery {
    Gallery::from_yaml(MANIFEST).expect("manifest parses")
}

fn activate(gallery: &Gallery, detail: &mut ProjectDetail, token: &str) -> bool {
    match resolve_activation(gallery.registry.projects(), token) {
        Some(project) => {
            detail.select(Some(project.clone()), &gallery.site);
            true
        }
        None => false,
    }
}

#[test]
fn test_startup_selects_first_entry() {
    let gallery = gallery();
    let mut detail = ProjectDetail::new();
    let request = detail
        .select(gallery.registry.first().cloned(), &gallery.site)
        .expect("first entry selected");

    assert_eq!(detail.title(), "About");
    assert!(!detail.controls_visible());
    assert!(detail.demo().is_none());
    assert_eq!(request.url, "projects/about/README.md");
}

#[test]
fn test_every_project_mounts_expected_demo() {
    let gallery = gallery();
    for project in gallery.registry.projects() {
        let mut detail = ProjectDetail::new();
        detail.select(Some(project.clone()), &gallery.site);

        let id = project.identifier();
        match (project.hide_controls(), project.is_externally_hosted()) {
            (true, _) => assert!(detail.demo().is_none()),
            (false, true) => assert_eq!(
                detail.demo(),
                Some(&DemoMount::Frame {
                    project_id: id.to_string(),
                    src: format!("{}{id}", gallery.site.pages_base_url),
                })
            ),
            (false, false) => assert_eq!(
                detail.demo(),
                Some(&DemoMount::Inline {
                    project_id: id.to_string(),
                    path: format!("projects/{id}/{id}.html"),
                })
            ),
        }
    }
}

#[test]
fn test_selection_resets_display_mode() {
    let gallery = gallery();
    let mut detail = ProjectDetail::new();

    assert!(activate(&gallery, &mut detail, "1"));
    detail.show_demo();
    assert_eq!(detail.mode(), DisplayMode::Demo);

    assert!(activate(&gallery, &mut detail, "2"));
    assert_eq!(detail.mode(), DisplayMode::Readme);
    assert!(detail.readme_visible());
    assert!(!detail.demo_visible());
}

#[test]
fn test_reselecting_same_project_is_idempotent() {
    let gallery = gallery();
    let mut once = ProjectDetail::new();
    let mut twice = ProjectDetail::new();

    activate(&gallery, &mut once, "1");
    activate(&gallery, &mut twice, "1");
    twice.show_demo();
    activate(&gallery, &mut twice, "1");

    assert_eq!(once.title(), twice.title());
    assert_eq!(once.mode(), twice.mode());
    assert_eq!(once.controls_visible(), twice.controls_visible());
    assert_eq!(once.content_visible(), twice.content_visible());
    assert_eq!(once.repo_url(), twice.repo_url());
    assert_eq!(once.demo(), twice.demo());
    assert_eq!(once.readme(), twice.readme());
}

#[test]
fn test_out_of_range_activation_is_noop() {
    let gallery = gallery();
    let mut detail = ProjectDetail::new();
    activate(&gallery, &mut detail, "1");
    let before = detail.clone();

    assert!(!activate(&gallery, &mut detail, "7"));
    assert_eq!(detail, before);
}

#[test]
fn test_failed_readme_displays_status_text() {
    let gallery = gallery();
    let mut detail = ProjectDetail::new();
    let request = detail
        .select(gallery.registry.get(1).cloned(), &gallery.site)
        .unwrap();
    detail.apply_readme(request.ticket, Err(FetchError::Status(404)));

    let ReadmeState::Loaded(text) = detail.readme() else {
        panic!("README should be loaded");
    };
    let renderer = MarkdownRenderer::new(gallery.site.render_markdown);
    let RenderedMarkdown::Html(html) = renderer.render(text) else {
        panic!("conversion is enabled");
    };
    assert!(html.contains("HTTP error, status = 404"));
}

#[test]
fn test_late_readme_from_previous_selection_is_ignored() {
    let gallery = gallery();
    let mut detail = ProjectDetail::new();
    let snake = detail
        .select(gallery.registry.get(1).cloned(), &gallery.site)
        .unwrap();
    let weather = detail
        .select(gallery.registry.get(2).cloned(), &gallery.site)
        .unwrap();

    assert!(!detail.apply_readme(snake.ticket, Ok("# Snake".into())));
    assert_eq!(detail.readme(), &ReadmeState::Loading);
    assert!(detail.apply_readme(weather.ticket, Ok("# Weather".into())));
    assert_eq!(detail.readme(), &ReadmeState::Loaded("# Weather".into()));
}
