use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Rejected,
    Offer,
    Withdrawn,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Withdrawn => "withdrawn",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Naukri,
    Linkedin,
    Instahyre,
    Internshala,
    Angellist,
    Referral,
    CompanyWebsite,
    Other,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Source::Naukri => "naukri",
            Source::Linkedin => "linkedin",
            Source::Instahyre => "instahyre",
            Source::Internshala => "internshala",
            Source::Angellist => "angellist",
            Source::Referral => "referral",
            Source::CompanyWebsite => "company-website",
            Source::Other => "other",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    pub applied_date: String,
    pub last_update: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl Application {
    pub fn validate(&self) -> Result<()> {
        if self.company.trim().is_empty() {
            bail!("application is missing a company");
        }
        if self.position.trim().is_empty() {
            bail!("application is missing a position");
        }
        if self.applied_date.trim().is_empty() {
            bail!("application is missing an applied date");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Resume => f.write_str("resume"),
            DocumentKind::CoverLetter => f.write_str("cover-letter"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub content: String,
    pub created_date: String,
    pub last_modified: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl Document {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("document is missing a name");
        }
        if self.content.trim().is_empty() {
            bail!("document is missing content");
        }
        Ok(())
    }

    pub fn is_default(&self) -> bool {
        self.is_default.unwrap_or(false)
    }

    /// Normalize and append a tag: lowercase, trimmed, skipped if already present.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Difficult,
    Tough,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Difficult => "difficult",
            Mood::Tough => "tough",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Reflection,
    Rejection,
    Success,
    Milestone,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::Reflection => "reflection",
            EntryKind::Rejection => "rejection",
            EntryKind::Success => "success",
            EntryKind::Milestone => "milestone",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: String,
    pub mood: Mood,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl JournalEntry {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            bail!("journal entry is missing a title");
        }
        if self.content.trim().is_empty() {
            bail!("journal entry is missing content");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Application,
    PhoneScreen,
    Technical,
    FinalRound,
    OfferStage,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Application => "Application",
            Stage::PhoneScreen => "Phone Screen",
            Stage::Technical => "Technical Round",
            Stage::FinalRound => "Final Round",
            Stage::OfferStage => "Offer Stage",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Application => "application",
            Stage::PhoneScreen => "phone-screen",
            Stage::Technical => "technical",
            Stage::FinalRound => "final-round",
            Stage::OfferStage => "offer-stage",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub date: String,
    pub stage: Stage,
    pub learnings: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<String>,
}

impl RejectionEntry {
    pub fn validate(&self) -> Result<()> {
        if self.company.trim().is_empty() {
            bail!("rejection entry is missing a company");
        }
        if self.role.trim().is_empty() {
            bail!("rejection entry is missing a role");
        }
        if self.learnings.trim().is_empty() {
            bail!("rejection entry is missing learnings");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_application() -> Application {
        Application {
            id: "1".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            status: ApplicationStatus::Applied,
            applied_date: "2024-01-10".to_string(),
            last_update: "2024-01-10".to_string(),
            salary: None,
            location: None,
            job_url: None,
            notes: None,
            interview_date: None,
            follow_up_date: None,
            source: None,
        }
    }

    #[test]
    fn test_application_validation() {
        assert!(sample_application().validate().is_ok());

        let mut app = sample_application();
        app.company = "  ".to_string();
        assert!(app.validate().is_err());

        let mut app = sample_application();
        app.position.clear();
        assert!(app.validate().is_err());
    }

    #[test]
    fn test_tag_normalization() {
        let mut doc = Document {
            id: "1".to_string(),
            name: "Main Resume".to_string(),
            kind: DocumentKind::Resume,
            content: "...".to_string(),
            created_date: "2024-01-01".to_string(),
            last_modified: "2024-01-01".to_string(),
            tags: Vec::new(),
            is_default: None,
        };

        doc.add_tag("  Backend ");
        doc.add_tag("backend");
        doc.add_tag("RUST");
        doc.add_tag("");

        assert_eq!(doc.tags, vec!["backend", "rust"]);
    }

    #[test]
    fn test_enum_wire_names() {
        let json = serde_json::to_string(&ApplicationStatus::Interview).unwrap();
        assert_eq!(json, "\"interview\"");

        let json = serde_json::to_string(&Source::CompanyWebsite).unwrap();
        assert_eq!(json, "\"company-website\"");

        let json = serde_json::to_string(&Stage::PhoneScreen).unwrap();
        assert_eq!(json, "\"phone-screen\"");

        let stage: Stage = serde_json::from_str("\"final-round\"").unwrap();
        assert_eq!(stage, Stage::FinalRound);
    }

    #[test]
    fn test_application_json_field_names() {
        let app = sample_application();
        let value = serde_json::to_value(&app).unwrap();
        assert!(value.get("appliedDate").is_some());
        assert!(value.get("lastUpdate").is_some());
        assert!(value.get("salary").is_none());
    }
}
