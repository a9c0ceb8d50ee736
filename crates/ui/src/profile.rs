use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileSection {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub photo_caption: Vec<String>,
    #[serde(default)]
    pub sections: Vec<ProfileSection>,
    #[serde(default)]
    pub walk_intro: String,
    #[serde(default)]
    pub footer: String,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile file: {0}")]
    Io(#[from] io::Error),
    #[error("profile file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("profile name must not be empty")]
    EmptyName,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Yiming Wei".to_owned(),
            headline: "Financial Engineering, UIBE".to_owned(),
            photo_caption: vec![
                "me @MoMA the other day".to_owned(),
                "with an awkward smile".to_owned(),
            ],
            sections: vec![
                ProfileSection {
                    title: String::new(),
                    body: "You might have heard of the University of International Business and Economics (my home uni) from the Study Abroad Fair. It's located in Chaoyang, Beijing.".to_owned(),
                },
                ProfileSection {
                    title: "Exchange Student at Baruch".to_owned(),
                    body: "I am an exchange student at Baruch College this semester, it's my first time in NYC, loving it so far!".to_owned(),
                },
            ],
            walk_intro: "This is a simple simulation of a 1D random walk. You can adjust the number of steps and choose to fix the random seed for reproducibility. Hope you get one that goes up all the way!".to_owned(),
            footer: "Built with Rust & axum".to_owned(),
        }
    }
}

impl Profile {
    pub fn from_json_str(raw: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(raw)?;
        if profile.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(profile)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
