//! Profile Types
//!
//! The profile record and one struct per nesting level. Field names are the
//! JSON contract read by the front end (e.g. `profile["personal_info"]["email"]`).

use serde::{Deserialize, Serialize};

// ============================================================
// PROFILE
// ============================================================

/// A professional profile as stored in session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub personal_info: PersonalInfo,
    pub skills: Skills,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub languages: Vec<Language>,
    pub interests: Vec<String>,
}

impl Profile {
    /// Display name of the profile owner
    pub fn name(&self) -> &str {
        &self.personal_info.name
    }
}

/// Contact details. Links are display strings only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub portfolio: String,
}

// ============================================================
// SKILLS
// ============================================================

/// Skill groups, each in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft_skills: Vec<String>,
    pub certifications: Vec<String>,
}

// ============================================================
// EDUCATION / EXPERIENCE
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub graduation_date: String,
    /// Omitted from JSON when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    pub relevant_coursework: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

// ============================================================
// PROJECTS / LANGUAGES
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

impl Language {
    pub fn new(language: &str, proficiency: &str) -> Self {
        Self {
            language: language.to_string(),
            proficiency: proficiency.to_string(),
        }
    }
}
