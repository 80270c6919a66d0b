//! Studio/about page content.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The studio page document.
///
/// When the store has no such document, [`StudioPage::fallback`] supplies
/// the static copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioPage {
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub body: Option<Vec<String>>,
    #[serde(default)]
    pub team: Option<Vec<TeamMember>>,
    #[serde(default)]
    pub clients: Option<Vec<String>>,
}

impl StudioPage {
    pub fn fallback() -> Self {
        Self {
            title: "Studio".to_string(),
            intro: Some(
                "We are a small film and video production studio making commercials, \
                 music videos and documentaries."
                    .to_string(),
            ),
            body: None,
            team: None,
            clients: None,
        }
    }

    pub fn paragraphs(&self) -> &[String] {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn team(&self) -> &[TeamMember] {
        self.team.as_deref().unwrap_or_default()
    }

    pub fn clients(&self) -> &[String] {
        self.clients.as_deref().unwrap_or_default()
    }
}
