//! The portfolio document shared by the display and editor pages.
//!
//! Both pages work on one JSON document: the display page renders it, the
//! editor mutates it field by field and rewrites the whole document on
//! every change. Field names match the deployed JSON (`finalNote` and
//! friends) and every field is defaulted, so documents written by earlier
//! versions or trimmed by hand keep loading.
//!
//! The cropped profile photo lands here too: `profile.image` holds the
//! crop session's output frame as a JPEG data URI.

mod store;

pub use store::{
    load_document, reset_document, save_document, KeyValueStore, MemoryStore, STORAGE_KEY,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crop::OutputRaster;

/// Errors from document (de)serialization.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The whole portfolio document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub strengths: Vec<Strength>,
    pub final_note: String,
}

/// Name, title, summary and photo shown in the hero section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    /// Cropped profile photo as a JPEG data URI; empty when unset.
    pub image: String,
}

/// One work-experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub period: String,
    pub role: String,
    pub description: String,
}

/// One project entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub period: String,
    pub description: String,
    pub tech: Vec<String>,
}

/// Skill lists, one per editor field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub programming: Vec<String>,
    pub tools: Vec<String>,
    pub languages: Vec<String>,
}

/// One strength card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strength {
    pub title: String,
    pub description: String,
}

impl PortfolioDocument {
    /// Parse a stored or fetched document.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for storage (compact).
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize for the "Export JSON" download (2-space indent).
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Store an applied crop as the profile photo.
    pub fn set_profile_image(&mut self, raster: &OutputRaster) {
        self.profile.image = raster.to_data_uri();
    }

    /// Remove the profile photo.
    pub fn clear_profile_image(&mut self) {
        self.profile.image.clear();
    }

    /// Append a blank experience entry for the editor to fill in.
    pub fn add_experience(&mut self) {
        self.experience.push(Experience::default());
    }

    /// Remove an experience entry; returns false if the index is gone.
    pub fn remove_experience(&mut self, index: usize) -> bool {
        if index < self.experience.len() {
            self.experience.remove(index);
            true
        } else {
            false
        }
    }

    /// Append a blank project entry.
    pub fn add_project(&mut self) {
        self.projects.push(Project::default());
    }

    /// Remove a project entry; returns false if the index is gone.
    pub fn remove_project(&mut self, index: usize) -> bool {
        if index < self.projects.len() {
            self.projects.remove(index);
            true
        } else {
            false
        }
    }

    /// Append a blank strength card.
    pub fn add_strength(&mut self) {
        self.strengths.push(Strength::default());
    }

    /// Remove a strength card; returns false if the index is gone.
    pub fn remove_strength(&mut self, index: usize) -> bool {
        if index < self.strengths.len() {
            self.strengths.remove(index);
            true
        } else {
            false
        }
    }
}

/// Parse a comma-separated editor field into trimmed, non-empty entries.
///
/// This is how the skills inputs are edited: one text field per list,
/// split on commas on every keystroke.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}
