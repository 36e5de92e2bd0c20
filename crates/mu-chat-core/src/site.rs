//! Site content — routes, navigation, footer, home page cards.
//! Pure data shared by the static server and both front ends.

use serde::{Deserialize, Serialize};

// ── Routes ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Chatbot,
}

impl Route {
    pub const ALL: &'static [Route] = &[Route::Home, Route::Chatbot];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Chatbot => "/chatbot",
        }
    }

    /// Resolve a request path; `None` means not found.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.iter().copied().find(|r| r.path() == normalized)
    }
}

// ── Navigation ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "to", rename_all = "lowercase")]
pub enum LinkTarget {
    Internal(Route),
    /// Absolute URL, opened in a new browsing context
    External(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub target: LinkTarget,
}

impl NavLink {
    fn internal(name: &str, route: Route) -> Self {
        Self {
            name: name.to_string(),
            target: LinkTarget::Internal(route),
        }
    }

    fn external(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            target: LinkTarget::External(url.to_string()),
        }
    }

    pub fn href(&self) -> &str {
        match &self.target {
            LinkTarget::Internal(route) => route.path(),
            LinkTarget::External(url) => url,
        }
    }

    pub fn opens_new_context(&self) -> bool {
        matches!(self.target, LinkTarget::External(_))
    }
}

pub const UNIVERSITY_WEBSITE: &str = "https://www.mut.ac.ke/";
pub const MASOMO_PORTAL: &str = "https://elearning.mut.ac.ke/";
pub const STUDENT_PORTAL: &str = "https://studentportal.mut.ac.ke/";

/// Links shown in the navigation bar and the footer's quick links.
pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::internal("Home", Route::Home),
        NavLink::internal("Chatbot", Route::Chatbot),
        NavLink::external("University Website", UNIVERSITY_WEBSITE),
        NavLink::external("Masomo Portal", MASOMO_PORTAL),
        NavLink::external("Student Portal", STUDENT_PORTAL),
    ]
}

// ── Footer + home page ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Address,
    Phone,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLine {
    pub kind: ContactKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
}

pub const FEATURES: &[(&str, &str)] = &[
    (
        "Admissions & Applications",
        "Get guidance on admission requirements, application processes, and deadlines.",
    ),
    (
        "Academic Programs",
        "Learn about courses, departments, faculty, and curriculum details.",
    ),
    (
        "Campus Life",
        "Discover facilities, clubs, events, and student activities.",
    ),
    (
        "Student Services",
        "Access information about support services, resources, and assistance.",
    ),
    (
        "Financial Information",
        "Learn about fees, scholarships, and financial aid opportunities.",
    ),
    (
        "Technical Support",
        "Get help with online portals, systems, and digital resources.",
    ),
];

/// Everything the front ends render outside the chat itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub university_name: String,
    pub tagline: String,
    pub about: String,
    pub nav_links: Vec<NavLink>,
    pub contacts: Vec<ContactLine>,
    pub features: Vec<FeatureCard>,
    pub copyright: String,
}

impl SiteInfo {
    pub fn new(university_name: &str) -> Self {
        Self {
            university_name: university_name.to_string(),
            tagline: "Chatbot Assistant".into(),
            about: format!(
                "Your intelligent assistant for navigating {} services and information. \
                 Get instant help with admissions, academics, and campus life.",
                university_name
            ),
            nav_links: nav_links(),
            contacts: vec![
                ContactLine {
                    kind: ContactKind::Address,
                    text: "P.O. Box 75-01000, Murang'a, Kenya".into(),
                },
                ContactLine {
                    kind: ContactKind::Phone,
                    text: "+254 (0) 60 30721".into(),
                },
                ContactLine {
                    kind: ContactKind::Email,
                    text: "info@mut.ac.ke".into(),
                },
            ],
            features: FEATURES
                .iter()
                .map(|(title, description)| FeatureCard {
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect(),
            copyright: format!("© 2024 {}. All rights reserved.", university_name),
        }
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self::new("Murang'a University")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/chatbot"), Some(Route::Chatbot));
        assert_eq!(Route::from_path("/chatbot/"), Some(Route::Chatbot));
        assert_eq!(Route::from_path("/admissions"), None);
        assert_eq!(Route::from_path("/chatbot/extra"), None);
    }

    #[test]
    fn test_nav_links() {
        let links = nav_links();
        let names: Vec<&str> = links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            ["Home", "Chatbot", "University Website", "Masomo Portal", "Student Portal"]
        );

        for link in &links {
            if link.opens_new_context() {
                assert!(link.href().starts_with("https://"));
            } else {
                assert!(Route::from_path(link.href()).is_some());
            }
        }
        assert_eq!(links.iter().filter(|l| l.opens_new_context()).count(), 3);
    }

    #[test]
    fn test_link_target_json() {
        let json = serde_json::to_value(&nav_links()[1]).unwrap();
        assert_eq!(json["target"]["kind"], "internal");
        assert_eq!(json["target"]["to"], "chatbot");

        let json = serde_json::to_value(&nav_links()[2]).unwrap();
        assert_eq!(json["target"]["kind"], "external");
        assert_eq!(json["target"]["to"], UNIVERSITY_WEBSITE);
    }

    #[test]
    fn test_site_info_content() {
        let site = SiteInfo::default();
        assert_eq!(site.features.len(), 6);
        assert_eq!(site.contacts.len(), 3);
        assert!(site.copyright.contains("Murang'a University"));
    }
}
