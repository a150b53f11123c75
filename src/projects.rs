use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

pub const PROJECTS_FILE: &str = "projects.json";

pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| match load_projects() {
    Ok(projects) => projects,
    Err(e) => {
        log::error!("couldn't load projects: {e}");
        Vec::new()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
}

impl Project {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse projects: {0}")]
    ParseError(String),
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
}

pub fn parse_projects(raw: &str) -> Result<Vec<Project>, ProjectError> {
    let mut projects = serde_json::from_str::<Vec<Project>>(raw)
        .map_err(|e| ProjectError::ParseError(e.to_string()))?;

    let mut ids = HashSet::new();
    for project in projects.iter_mut() {
        if !ids.insert(project.id.clone()) {
            return Err(ProjectError::DuplicateId(project.id.clone()));
        }
        // technologies are a set keyed by name, first one wins
        let mut seen = HashSet::new();
        project.technologies.retain(|t| seen.insert(t.name.clone()));
    }
    Ok(projects)
}

pub fn load_projects() -> Result<Vec<Project>, ProjectError> {
    let file =
        Content::get(PROJECTS_FILE).ok_or(ProjectError::NotFound(PROJECTS_FILE.to_string()))?;
    let raw = String::from_utf8(file.data.into())
        .map_err(|e| ProjectError::ParseError(e.to_string()))?;
    parse_projects(&raw)
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    projects().iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_projects() {
        let raw = r##"[
            {
                "id": "alpha",
                "title": "Alpha",
                "description": "short",
                "longDescription": "long",
                "images": ["/a/1.png", "/a/2.png"],
                "technologies": [{ "name": "Rust", "color": "#dea584" }],
                "liveUrl": "https://alpha.example.com"
            },
            {
                "id": "beta",
                "title": "Beta",
                "description": "short",
                "longDescription": "long"
            }
        ]"##;
        let projects = parse_projects(raw).expect("projects should parse");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "alpha");
        assert_eq!(projects[0].long_description, "long");
        assert_eq!(projects[0].image(1), Some("/a/2.png"));
        assert_eq!(projects[0].image(2), None);
        assert_eq!(
            projects[0].live_url.as_deref(),
            Some("https://alpha.example.com")
        );
        assert_eq!(projects[0].github_url, None);

        // missing images and technologies default to empty
        assert_eq!(projects[1].image_count(), 0);
        assert!(projects[1].technologies.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"[
            { "id": "same", "title": "A", "description": "", "longDescription": "" },
            { "id": "same", "title": "B", "description": "", "longDescription": "" }
        ]"#;
        assert_eq!(
            parse_projects(raw),
            Err(ProjectError::DuplicateId("same".to_string()))
        );
    }

    #[test]
    fn test_technologies_deduplicated() {
        let raw = r##"[
            {
                "id": "alpha",
                "title": "Alpha",
                "description": "",
                "longDescription": "",
                "technologies": [
                    { "name": "Rust", "color": "#dea584" },
                    { "name": "Leptos", "color": "#ef3939" },
                    { "name": "Rust", "color": "#000000" }
                ]
            }
        ]"##;
        let projects = parse_projects(raw).expect("projects should parse");
        let names = projects[0]
            .technologies
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Rust", "Leptos"]);
        assert_eq!(projects[0].technologies[0].color, "#dea584");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_projects("{ not json"),
            Err(ProjectError::ParseError(_))
        ));
    }

    #[test]
    fn test_embedded_projects() {
        let projects = load_projects().expect("embedded projects should load");
        assert!(!projects.is_empty());

        let recello = find_project("recello").expect("recello should be in the catalogue");
        assert_eq!(recello.image_count(), 7);
        assert!(find_project("does-not-exist").is_none());
    }
}
