//! Static portfolio content and its process-wide read accessor.
//!
//! Content is authored as TOML under `content/`, validated by `build.rs`, and embedded as JSON.
//! [`portfolio`] decodes it once and hands out the same `&'static` reference for the rest of the
//! session.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod model;

use std::sync::OnceLock;

use serde::Deserialize;

pub use model::{
    BlogPost, ContactInfo, EducationEntry, ExperienceEntry, PersonalDetails, Portfolio, Profile,
    Project, ProjectReference, RecentFile, ShowcaseProject, SkillCategory, SocialLink,
    EXPERIENCE_PROJECT_STACK,
};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/content_generated.rs"));
}

#[derive(Deserialize)]
struct PortfolioDocument {
    profile: Profile,
    #[serde(default)]
    skills: Vec<SkillCategory>,
    #[serde(default)]
    experience: Vec<ExperienceEntry>,
    #[serde(default)]
    education: Vec<EducationEntry>,
    #[serde(default)]
    certifications: Vec<String>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    recent_files: Vec<RecentFile>,
    #[serde(default)]
    wallpapers: Vec<String>,
}

#[derive(Deserialize)]
struct BlogDocument {
    #[serde(default)]
    posts: Vec<BlogPost>,
}

/// Decodes a content bundle from its portfolio and blog JSON documents.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] when either document does not match the content
/// model.
pub fn decode_portfolio(portfolio_json: &str, blog_json: &str) -> serde_json::Result<Portfolio> {
    let document: PortfolioDocument = serde_json::from_str(portfolio_json)?;
    let blog: BlogDocument = serde_json::from_str(blog_json)?;
    Ok(Portfolio {
        profile: document.profile,
        skills: document.skills,
        experience: document.experience,
        education: document.education,
        certifications: document.certifications,
        projects: document.projects,
        recent_files: document.recent_files,
        wallpapers: document.wallpapers,
        posts: blog.posts,
    })
}

static PORTFOLIO: OnceLock<Portfolio> = OnceLock::new();

/// Returns the embedded content bundle.
///
/// # Panics
///
/// Panics if the embedded JSON does not decode, which `build.rs` rules out for checked-in content.
pub fn portfolio() -> &'static Portfolio {
    PORTFOLIO.get_or_init(|| {
        decode_portfolio(
            generated::PORTFOLIO_CONTENT_JSON,
            generated::BLOG_CONTENT_JSON,
        )
        .unwrap_or_else(|err| panic!("embedded portfolio content failed to decode: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn repeated_reads_return_the_same_bundle() {
        let first = portfolio();
        let second = portfolio();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(
            first.profile.name.as_str(),
            second.profile.name.as_str()
        ));
        assert_eq!(first.profile.name, "Yash Anil Gedia");
    }

    #[test]
    fn blog_ids_are_unique_and_lookup_by_id_works() {
        let content = portfolio();
        let mut ids: Vec<u32> = content.posts.iter().map(|post| post.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.posts.len());

        let post = content.post(2).expect("post 2");
        assert_eq!(post.title, "Migrating from Wix to Custom Code");
        assert!(content.post(999).is_none());
    }

    #[test]
    fn showcase_lists_experience_projects_before_standalone_projects() {
        let content = portfolio();
        let cards = content.showcase_projects();
        assert_eq!(
            cards.len(),
            content.experience[0].projects.len() + content.projects.len()
        );
        assert_eq!(cards[0].title, "recruitment.dhiiyo.in");
        assert_eq!(cards[0].stack, EXPERIENCE_PROJECT_STACK);
        assert_eq!(cards[0].url, Some("https://recruitment.dhiiyo.in"));
        let first_standalone = &cards[content.experience[0].projects.len()];
        assert_eq!(first_standalone.title, content.projects[0].title);
        assert_eq!(first_standalone.url, None);
    }

    #[test]
    fn skill_categories_keep_source_order() {
        let names: Vec<&str> = portfolio()
            .skills
            .iter()
            .map(|category| category.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Languages",
                "Backend",
                "Frontend",
                "Database",
                "Tools",
                "Deployment",
                "Additional"
            ]
        );
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let portfolio_json = r#"{
            "profile": {
                "name": "A", "role": "R", "location": "L", "avatar": "",
                "objective": "",
                "contact": { "email": "a@example.com", "phone": "" },
                "personal_details": { "date_of_birth": "", "nationality": "" }
            },
            "projects": [{ "title": "P", "stack": "S", "description": "D" }]
        }"#;
        let decoded = decode_portfolio(portfolio_json, "{}").expect("decode");
        assert!(decoded.profile.contact.social.is_empty());
        assert!(decoded.posts.is_empty());
        assert!(!decoded.projects[0].has_link());
        assert!(decoded.showcase_projects()[0].url.is_none());
        assert_eq!(decoded.wallpaper(3), None);
    }

    #[test]
    fn blank_project_url_is_not_a_link() {
        let project = Project {
            title: "P".to_string(),
            stack: "S".to_string(),
            description: "D".to_string(),
            url: Some("   ".to_string()),
        };
        assert!(!project.has_link());
    }

    #[test]
    fn project_reference_link_ignores_missing_and_blank_urls() {
        let mut reference = ProjectReference {
            name: "internal tool".to_string(),
            url: None,
            description: "D".to_string(),
        };
        assert_eq!(reference.link(), None);
        reference.url = Some(" ".to_string());
        assert_eq!(reference.link(), None);
        reference.url = Some("https://example.com".to_string());
        assert_eq!(reference.link(), Some("https://example.com"));
    }

    #[test]
    fn wallpaper_index_wraps() {
        let content = portfolio();
        let count = content.wallpapers.len();
        assert_eq!(content.wallpaper(count), content.wallpaper(0));
    }
}
