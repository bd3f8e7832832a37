use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the copy-email confirmation stays on the button.
pub(crate) const COPIED_VISIBLE_FOR: Duration = Duration::from_secs(2);

/// A titled blurb shown in the about grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FocusCard {
    pub(crate) title: String,
    pub(crate) body: String,
}

impl FocusCard {
    fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_owned(),
            body: body.to_owned(),
        }
    }
}

/// All user-editable page copy. Every field falls back to the built-in
/// defaults, so a partial profile file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ProfileData {
    pub(crate) name: String,
    pub(crate) role: String,
    pub(crate) tagline: String,
    pub(crate) bio: String,
    pub(crate) status_text: String,
    pub(crate) about_heading: String,
    pub(crate) about_body: String,
    pub(crate) focus_cards: Vec<FocusCard>,
    pub(crate) skills: Vec<String>,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) location: String,
    pub(crate) github_url: String,
    pub(crate) contact_prompt: String,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            name: String::from("Alex Romero"),
            role: String::from("Mobile Developer"),
            tagline: String::from(
                "I build mobile apps that turn real-world problems into \
                 clear, usable products.",
            ),
            bio: String::from(
                "Focused on clean design and products that feel intuitive.",
            ),
            status_text: String::from("Available"),
            about_heading: String::from(
                "Building products that solve real problems.",
            ),
            about_body: String::from(
                "I focus on turning real-world pain points into practical \
                 mobile solutions, with clear UX, strong fundamentals, and \
                 consistent iteration from idea to launch.",
            ),
            focus_cards: vec![
                FocusCard::new(
                    "What I'm Learning",
                    "Cross-platform mobile development with a focus on \
                     smooth UX and scalable structure.",
                ),
                FocusCard::new(
                    "Strengths",
                    "Problem solving, clear UI thinking, and reliable, \
                     maintainable code.",
                ),
                FocusCard::new(
                    "Current Goal",
                    "Ship a product built around a real market need.",
                ),
                FocusCard::new(
                    "Leadership",
                    "Organizing teams and initiatives that help peers grow \
                     in tech.",
                ),
            ],
            skills: vec![
                String::from("Rust"),
                String::from("Flutter"),
                String::from("TypeScript"),
                String::from("Python"),
            ],
            email: String::from("hello@alexromero.dev"),
            phone: String::from("+1 555 014 2580"),
            location: String::from("Portland, OR"),
            github_url: String::from("https://github.com/alexromero"),
            contact_prompt: String::from(
                "Interested in collaborating, chatting about tech, or just \
                 saying hi? Send me a message below!",
            ),
        }
    }
}
