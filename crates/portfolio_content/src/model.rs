//! Read-only content model for the portfolio desktop.

use serde::{Deserialize, Serialize};

/// Stack label used for experience project references that carry no stack of their own.
pub const EXPERIENCE_PROJECT_STACK: &str = "Full Stack";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One social profile link.
pub struct SocialLink {
    /// Platform display name (for example `GitHub`).
    pub platform: String,
    /// Profile URL.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Contact block shown in the Finder overview and contact tabs.
pub struct ContactInfo {
    /// Mail address used by the composer and `mailto:` links.
    pub email: String,
    /// Phone number as displayed.
    pub phone: String,
    /// Social links in display order.
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Personal details block.
pub struct PersonalDetails {
    /// Date of birth as displayed.
    pub date_of_birth: String,
    /// Nationality label.
    pub nationality: String,
    /// Spoken languages.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Soft skills.
    #[serde(default)]
    pub soft_skills: Vec<String>,
    /// Hobbies.
    #[serde(default)]
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Owner profile.
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Job title.
    pub role: String,
    /// Location line.
    pub location: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Contact block.
    pub contact: ContactInfo,
    /// Free-text objective.
    pub objective: String,
    /// Personal details block.
    pub personal_details: PersonalDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Project delivered as part of an experience entry.
pub struct ProjectReference {
    /// Project name.
    pub name: String,
    /// External URL when the project is publicly reachable.
    #[serde(default)]
    pub url: Option<String>,
    /// Short description.
    pub description: String,
}

impl ProjectReference {
    /// Returns the URL to open, or `None` when the reference is not navigable.
    pub fn link(&self) -> Option<&str> {
        link_of(self.url.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One employment entry.
pub struct ExperienceEntry {
    /// Role held.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Office location.
    pub location: String,
    /// Free-text date range.
    pub duration: String,
    /// Responsibilities in display order.
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Project references in display order.
    #[serde(default)]
    pub projects: Vec<ProjectReference>,
    /// Achievements in display order.
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Standalone portfolio project.
pub struct Project {
    /// Project title.
    pub title: String,
    /// Technology stack label.
    pub stack: String,
    /// Short description.
    pub description: String,
    /// External URL when the project is publicly reachable.
    #[serde(default)]
    pub url: Option<String>,
}

impl Project {
    /// Returns whether the project can be opened in a browser window.
    pub fn has_link(&self) -> bool {
        link_of(self.url.as_deref()).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One education entry.
pub struct EducationEntry {
    /// School or college.
    pub institution: String,
    /// Degree title.
    pub degree: String,
    /// Year range.
    pub years: String,
    /// Coursework description.
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Named bucket of skill labels.
pub struct SkillCategory {
    /// Category name (for example `Backend`).
    pub name: String,
    /// Skill labels in display order.
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Decorative recent-file entry.
pub struct RecentFile {
    /// File name.
    pub name: String,
    /// Type label (for example `pdf`).
    pub kind: String,
    /// Date label.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Blog post shown in the Blog app.
pub struct BlogPost {
    /// Unique stable id.
    pub id: u32,
    /// Post title.
    pub title: String,
    /// Publication date label.
    pub date: String,
    /// Category tag.
    pub category: String,
    /// Read-time label.
    pub read_time: String,
    /// List preview text.
    pub preview: String,
    /// Full body text.
    pub content: String,
}

/// Project card view-model merging experience project references and standalone projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseProject<'a> {
    /// Card title.
    pub title: &'a str,
    /// Stack label.
    pub stack: &'a str,
    /// Card description.
    pub description: &'a str,
    /// External URL, absent when the card is not navigable.
    pub url: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Complete immutable content bundle.
pub struct Portfolio {
    /// Owner profile.
    pub profile: Profile,
    /// Skill categories in display order.
    pub skills: Vec<SkillCategory>,
    /// Experience entries in display order.
    pub experience: Vec<ExperienceEntry>,
    /// Education entries in display order.
    pub education: Vec<EducationEntry>,
    /// Certification labels.
    pub certifications: Vec<String>,
    /// Standalone projects in display order.
    pub projects: Vec<Project>,
    /// Decorative recent files.
    pub recent_files: Vec<RecentFile>,
    /// Desktop wallpaper URLs.
    pub wallpapers: Vec<String>,
    /// Blog posts in display order.
    pub posts: Vec<BlogPost>,
}

impl Portfolio {
    /// Looks up a blog post by id.
    pub fn post(&self, id: u32) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Returns project cards: the first experience entry's projects followed by standalone ones.
    pub fn showcase_projects(&self) -> Vec<ShowcaseProject<'_>> {
        let from_experience = self
            .experience
            .first()
            .into_iter()
            .flat_map(|entry| entry.projects.iter())
            .map(|project| ShowcaseProject {
                title: &project.name,
                stack: EXPERIENCE_PROJECT_STACK,
                description: &project.description,
                url: project.link(),
            });
        let standalone = self.projects.iter().map(|project| ShowcaseProject {
            title: &project.title,
            stack: &project.stack,
            description: &project.description,
            url: link_of(project.url.as_deref()),
        });
        from_experience.chain(standalone).collect()
    }

    /// Returns the wallpaper at `index`, wrapping around the list.
    pub fn wallpaper(&self, index: usize) -> Option<&str> {
        if self.wallpapers.is_empty() {
            return None;
        }
        self.wallpapers
            .get(index % self.wallpapers.len())
            .map(String::as_str)
    }
}

fn link_of(url: Option<&str>) -> Option<&str> {
    url.filter(|url| !url.trim().is_empty())
}
