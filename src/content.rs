use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Static site content, embedded at build time and parsed exactly once.
pub static SITE_CONTENT: LazyLock<SiteContent> =
    LazyLock::new(|| load_site_content().expect("Should be able to load site content"));

const SITE_CONTENT_FILE: &str = "site.json";

#[derive(Embed)]
#[folder = "content"]
struct Assets;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub number: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMethod {
    pub label: String,
    pub value: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub contacts: Vec<ContactMethod>,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(&'static str),
    #[error("couldn't parse site content: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_site_content() -> Result<SiteContent, ContentError> {
    let file = Assets::get(SITE_CONTENT_FILE).ok_or(ContentError::NotFound(SITE_CONTENT_FILE))?;
    Ok(serde_json::from_slice(&file.data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_content_parses() {
        let content = load_site_content().expect("embedded site content should parse");
        assert!(!content.projects.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.contacts.is_empty());
    }

    #[test]
    fn projects_are_numbered_in_order() {
        let content = load_site_content().expect("embedded site content should parse");
        for (i, project) in content.projects.iter().enumerate() {
            assert_eq!(project.number, format!("{:02}", i + 1));
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
        }
    }

    #[test]
    fn project_links_are_external() {
        let content = load_site_content().expect("embedded site content should parse");
        for project in &content.projects {
            assert!(
                project.link.starts_with("https://"),
                "{} link should be an absolute https url",
                project.title
            );
        }
    }

    #[test]
    fn contact_hrefs_use_known_schemes() {
        let content = load_site_content().expect("embedded site content should parse");
        for contact in &content.contacts {
            assert!(
                contact.href.starts_with("https://")
                    || contact.href.starts_with("mailto:")
                    || contact.href.starts_with("tel:"),
                "{} href has unexpected scheme: {}",
                contact.label,
                contact.href
            );
        }
    }
}
