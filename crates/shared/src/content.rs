//! Static page content: owner details, projects, links.
//!
//! The built-in defaults describe the sample portfolio; a TOML or JSON file
//! with the same shape can replace them at startup.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{ProjectId, SectionId},
    error::ContentError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub section: SectionId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    pub owner_name: String,
    pub headline: String,
    pub tagline: String,
    pub bio: String,
    pub call_to_action: String,
    pub projects_heading: String,
    pub projects_blurb: String,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
    pub nav_links: Vec<NavLink>,
    pub contact_heading: String,
    pub contact_blurb: String,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            owner_name: "John Doe".into(),
            headline: "Hi, I'm John Doe.".into(),
            tagline: "A Creative Full-Stack Developer.".into(),
            bio: "I specialize in building exceptional, high-quality websites and applications. \
                  With a passion for clean code and user-centric design, I transform complex \
                  problems into elegant, intuitive digital solutions."
                .into(),
            call_to_action: "Get in Touch".into(),
            projects_heading: "My Portfolio".into(),
            projects_blurb:
                "A selection of my best work. Each project is a unique piece of development."
                    .into(),
            projects: vec![
                Project {
                    id: ProjectId(1),
                    title: "AI-Powered SaaS Platform".into(),
                    description: "A comprehensive enterprise solution leveraging machine learning \
                                  to automate business intelligence and data analytics."
                        .into(),
                    image_url: Some(
                        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=2070&q=80"
                            .into(),
                    ),
                    tags: tags(&["React", "Node.js", "Python", "AWS"]),
                },
                Project {
                    id: ProjectId(2),
                    title: "Mobile E-Commerce App".into(),
                    description: "A cross-platform mobile application for a seamless shopping \
                                  experience with AR-powered product previews."
                        .into(),
                    image_url: Some(
                        "https://images.unsplash.com/photo-1607082348824-0a96f2a4b9da?auto=format&fit=crop&w=2070&q=80"
                            .into(),
                    ),
                    tags: tags(&["React Native", "Firebase", "Stripe"]),
                },
                Project {
                    id: ProjectId(3),
                    title: "Interactive Data Visualization".into(),
                    description: "A web-based tool for visualizing complex scientific data, \
                                  featuring real-time updates and custom charting."
                        .into(),
                    image_url: Some(
                        "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&w=2070&q=80"
                            .into(),
                    ),
                    tags: tags(&["D3.js", "React", "WebSocket"]),
                },
            ],
            social_links: vec![
                SocialLink {
                    name: "GitHub".into(),
                    href: "#".into(),
                },
                SocialLink {
                    name: "LinkedIn".into(),
                    href: "#".into(),
                },
                SocialLink {
                    name: "Twitter".into(),
                    href: "#".into(),
                },
            ],
            nav_links: vec![
                NavLink {
                    section: SectionId::About,
                    label: "About".into(),
                },
                NavLink {
                    section: SectionId::Projects,
                    label: "Projects".into(),
                },
                NavLink {
                    section: SectionId::Contact,
                    label: "Contact".into(),
                },
            ],
            contact_heading: "Let's Build Something Amazing".into(),
            contact_blurb:
                "Have a project in mind? I'd love to hear from you. Fill out the form below."
                    .into(),
        }
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl PortfolioContent {
    /// Loads content from `path`, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&raw).map_err(|source| ContentError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            Some("json") => {
                serde_json::from_str::<Self>(&raw).map_err(|source| ContentError::Json {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => return Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        };

        content.check()?;
        Ok(content)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Every section must be reachable from the navigation bar.
    pub fn check(&self) -> Result<(), ContentError> {
        for section in SectionId::ALL {
            if !self.nav_links.iter().any(|link| link.section == section) {
                return Err(ContentError::MissingNavLink(section.to_string()));
            }
        }
        Ok(())
    }

    /// Label shown in the nav bar; falls back to the section id.
    pub fn nav_label(&self, section: SectionId) -> &str {
        self.nav_links
            .iter()
            .find(|link| link.section == section)
            .map(|link| link.label.as_str())
            .unwrap_or_else(|| section.as_str())
    }
}
