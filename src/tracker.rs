use anyhow::Result;
use tracing::error;

use crate::models::{
    Application, ApplicationStatus, Document, DocumentKind, EntryKind, JournalEntry, Mood,
    RejectionEntry, Source, Stage,
};
use crate::store::{self, SlotStore};

/// Application state: the four collections plus their write-through store.
/// In-memory state is the source of truth during a session; every mutation is
/// followed by a full-collection save of the touched slot.
pub struct Tracker {
    store: SlotStore,
    applications: Vec<Application>,
    rejections: Vec<RejectionEntry>,
    documents: Vec<Document>,
    journal: Vec<JournalEntry>,
    last_id: i64,
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

impl Tracker {
    pub fn open(store: SlotStore) -> Self {
        let applications: Vec<Application> = store.load(store::APPLICATIONS);
        let rejections: Vec<RejectionEntry> = store.load(store::REJECTIONS);
        let documents: Vec<Document> = store.load(store::DOCUMENTS);
        let journal: Vec<JournalEntry> = store.load(store::JOURNAL);

        // Seed the id counter past anything already stored so a restart
        // within the same millisecond cannot collide.
        let last_id = applications
            .iter()
            .map(|a| a.id.as_str())
            .chain(rejections.iter().map(|r| r.id.as_str()))
            .chain(documents.iter().map(|d| d.id.as_str()))
            .chain(journal.iter().map(|j| j.id.as_str()))
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            store,
            applications,
            rejections,
            documents,
            journal,
            last_id,
        }
    }

    pub fn store_path(&self) -> Option<&std::path::Path> {
        self.store.path()
    }

    /// Time-based id, bumped monotonically on collision within a process.
    fn next_id(&mut self) -> String {
        let mut id = chrono::Utc::now().timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id.to_string()
    }

    /// Write-through save. Persistence failures never take the session down:
    /// the store already retried once, so log and keep the in-memory state.
    fn persist<T: serde::Serialize>(store: &SlotStore, key: &str, items: &[T]) {
        if let Err(e) = store.save(key, items) {
            error!(slot = key, error = %e, "could not persist collection; in-memory state kept");
        }
    }

    // --- Application operations ---

    pub fn add_application(&mut self, mut app: Application) -> Result<Application> {
        app.validate()?;
        app.id = self.next_id();
        app.last_update = today();
        self.applications.push(app.clone());
        Self::persist(&self.store, store::APPLICATIONS, &self.applications);
        Ok(app)
    }

    pub fn update_application(&mut self, mut app: Application) -> Result<bool> {
        app.validate()?;
        let Some(slot) = self.applications.iter_mut().find(|a| a.id == app.id) else {
            return Ok(false);
        };
        app.last_update = today();
        *slot = app;
        Self::persist(&self.store, store::APPLICATIONS, &self.applications);
        Ok(true)
    }

    pub fn delete_application(&mut self, id: &str) -> bool {
        let before = self.applications.len();
        self.applications.retain(|a| a.id != id);
        if self.applications.len() == before {
            return false;
        }
        Self::persist(&self.store, store::APPLICATIONS, &self.applications);
        true
    }

    pub fn application(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    pub fn all_applications(&self) -> &[Application] {
        &self.applications
    }

    /// Filtered view, most recently updated first.
    pub fn applications(&self, filter: &ApplicationFilter) -> Vec<&Application> {
        let mut matched: Vec<&Application> = self
            .applications
            .iter()
            .filter(|a| filter.matches(a))
            .collect();
        matched.sort_by(|a, b| b.last_update.cmp(&a.last_update));
        matched
    }

    // --- Rejection operations ---

    pub fn add_rejection(&mut self, mut rejection: RejectionEntry) -> Result<RejectionEntry> {
        rejection.validate()?;
        rejection.id = self.next_id();
        self.rejections.push(rejection.clone());
        Self::persist(&self.store, store::REJECTIONS, &self.rejections);
        Ok(rejection)
    }

    pub fn update_rejection(&mut self, rejection: RejectionEntry) -> Result<bool> {
        rejection.validate()?;
        let Some(slot) = self.rejections.iter_mut().find(|r| r.id == rejection.id) else {
            return Ok(false);
        };
        *slot = rejection;
        Self::persist(&self.store, store::REJECTIONS, &self.rejections);
        Ok(true)
    }

    pub fn delete_rejection(&mut self, id: &str) -> bool {
        let before = self.rejections.len();
        self.rejections.retain(|r| r.id != id);
        if self.rejections.len() == before {
            return false;
        }
        Self::persist(&self.store, store::REJECTIONS, &self.rejections);
        true
    }

    pub fn rejection(&self, id: &str) -> Option<&RejectionEntry> {
        self.rejections.iter().find(|r| r.id == id)
    }

    pub fn all_rejections(&self) -> &[RejectionEntry] {
        &self.rejections
    }

    /// Filtered view, most recent first.
    pub fn rejections(&self, filter: &RejectionFilter) -> Vec<&RejectionEntry> {
        let mut matched: Vec<&RejectionEntry> = self
            .rejections
            .iter()
            .filter(|r| filter.matches(r))
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }

    // --- Document operations ---

    pub fn add_document(&mut self, mut doc: Document) -> Result<Document> {
        doc.validate()?;
        doc.id = self.next_id();
        let now = today();
        doc.created_date = now.clone();
        doc.last_modified = now;
        let tags = std::mem::take(&mut doc.tags);
        for tag in &tags {
            doc.add_tag(tag);
        }
        if doc.is_default() {
            let kind = doc.kind;
            self.clear_default_for_kind(kind);
        }
        self.documents.push(doc.clone());
        Self::persist(&self.store, store::DOCUMENTS, &self.documents);
        Ok(doc)
    }

    pub fn update_document(&mut self, mut doc: Document) -> Result<bool> {
        doc.validate()?;
        doc.last_modified = today();
        let tags = std::mem::take(&mut doc.tags);
        for tag in &tags {
            doc.add_tag(tag);
        }
        let Some(pos) = self.documents.iter().position(|d| d.id == doc.id) else {
            return Ok(false);
        };
        self.documents[pos] = doc;
        Self::persist(&self.store, store::DOCUMENTS, &self.documents);
        Ok(true)
    }

    pub fn delete_document(&mut self, id: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        if self.documents.len() == before {
            return false;
        }
        Self::persist(&self.store, store::DOCUMENTS, &self.documents);
        true
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn all_documents(&self) -> &[Document] {
        &self.documents
    }

    /// Filtered view, collection order.
    pub fn documents(&self, filter: &DocumentFilter) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| filter.matches(d))
            .collect()
    }

    /// Make document `id` the single default of its kind. Every other
    /// document of the same kind loses its flag in the same write, so at most
    /// one default per kind can exist. Repeating the call changes nothing.
    pub fn set_default_document(&mut self, id: &str) -> bool {
        let Some(kind) = self.document(id).map(|d| d.kind) else {
            return false;
        };
        for doc in self.documents.iter_mut().filter(|d| d.kind == kind) {
            doc.is_default = if doc.id == id { Some(true) } else { None };
        }
        Self::persist(&self.store, store::DOCUMENTS, &self.documents);
        true
    }

    /// Remove the default flag from document `id`, leaving its kind with no
    /// default.
    pub fn unset_default_document(&mut self, id: &str) -> bool {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        doc.is_default = None;
        Self::persist(&self.store, store::DOCUMENTS, &self.documents);
        true
    }

    pub fn default_document(&self, kind: DocumentKind) -> Option<&Document> {
        self.documents
            .iter()
            .find(|d| d.kind == kind && d.is_default())
    }

    fn clear_default_for_kind(&mut self, kind: DocumentKind) {
        for doc in self.documents.iter_mut().filter(|d| d.kind == kind) {
            doc.is_default = None;
        }
    }

    // --- Journal operations ---

    pub fn add_journal_entry(&mut self, mut entry: JournalEntry) -> Result<JournalEntry> {
        entry.validate()?;
        entry.id = self.next_id();
        self.journal.push(entry.clone());
        Self::persist(&self.store, store::JOURNAL, &self.journal);
        Ok(entry)
    }

    pub fn update_journal_entry(&mut self, entry: JournalEntry) -> Result<bool> {
        entry.validate()?;
        let Some(slot) = self.journal.iter_mut().find(|j| j.id == entry.id) else {
            return Ok(false);
        };
        *slot = entry;
        Self::persist(&self.store, store::JOURNAL, &self.journal);
        Ok(true)
    }

    pub fn delete_journal_entry(&mut self, id: &str) -> bool {
        let before = self.journal.len();
        self.journal.retain(|j| j.id != id);
        if self.journal.len() == before {
            return false;
        }
        Self::persist(&self.store, store::JOURNAL, &self.journal);
        true
    }

    pub fn journal_entry(&self, id: &str) -> Option<&JournalEntry> {
        self.journal.iter().find(|j| j.id == id)
    }

    pub fn all_journal_entries(&self) -> &[JournalEntry] {
        &self.journal
    }

    /// Filtered view, most recent first.
    pub fn journal_entries(&self, filter: &JournalFilter) -> Vec<&JournalEntry> {
        let mut matched: Vec<&JournalEntry> = self
            .journal
            .iter()
            .filter(|j| filter.matches(j))
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }
}

// --- Filters ---

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[derive(Debug, Default, Clone)]
pub struct ApplicationFilter {
    pub search: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub source: Option<Source>,
}

impl ApplicationFilter {
    fn matches(&self, app: &Application) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !contains_ci(&app.company, &needle) && !contains_ci(&app.position, &needle) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if app.status != status {
                return false;
            }
        }
        if let Some(source) = self.source {
            if app.source != Some(source) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Default, Clone)]
pub struct RejectionFilter {
    pub search: Option<String>,
    pub stage: Option<Stage>,
}

impl RejectionFilter {
    fn matches(&self, rejection: &RejectionEntry) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !contains_ci(&rejection.company, &needle)
                && !contains_ci(&rejection.role, &needle)
                && !contains_ci(&rejection.learnings, &needle)
            {
                return false;
            }
        }
        if let Some(stage) = self.stage {
            if rejection.stage != stage {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Default, Clone)]
pub struct DocumentFilter {
    pub search: Option<String>,
    pub kind: Option<DocumentKind>,
}

impl DocumentFilter {
    fn matches(&self, doc: &Document) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !contains_ci(&doc.name, &needle)
                && !doc.tags.iter().any(|tag| contains_ci(tag, &needle))
            {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if doc.kind != kind {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Default, Clone)]
pub struct JournalFilter {
    pub search: Option<String>,
    pub kind: Option<EntryKind>,
    pub mood: Option<Mood>,
}

impl JournalFilter {
    fn matches(&self, entry: &JournalEntry) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !contains_ci(&entry.title, &needle) && !contains_ci(&entry.content, &needle) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        if let Some(mood) = self.mood {
            if entry.mood != mood {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SlotStore;

    fn tracker() -> Tracker {
        Tracker::open(SlotStore::open_in_memory().unwrap())
    }

    fn application(company: &str, position: &str, status: ApplicationStatus) -> Application {
        Application {
            id: String::new(),
            company: company.to_string(),
            position: position.to_string(),
            status,
            applied_date: "2024-01-10".to_string(),
            last_update: String::new(),
            salary: None,
            location: None,
            job_url: None,
            notes: None,
            interview_date: None,
            follow_up_date: None,
            source: None,
        }
    }

    fn document(name: &str, kind: DocumentKind) -> Document {
        Document {
            id: String::new(),
            name: name.to_string(),
            kind,
            content: "content".to_string(),
            created_date: String::new(),
            last_modified: String::new(),
            tags: Vec::new(),
            is_default: None,
        }
    }

    #[test]
    fn test_create_then_list_contains_record() {
        let mut t = tracker();
        let id = t
            .add_application(application("Acme", "Engineer", ApplicationStatus::Applied))
            .unwrap()
            .id
            .clone();

        let apps = t.applications(&ApplicationFilter::default());
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].id, id);
        assert_eq!(apps[0].company, "Acme");
        assert!(!apps[0].last_update.is_empty());
    }

    #[test]
    fn test_create_rejects_missing_required_fields() {
        let mut t = tracker();
        let result = t.add_application(application("", "Engineer", ApplicationStatus::Applied));
        assert!(result.is_err());
        assert!(t.all_applications().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut t = tracker();
        let a = t
            .add_application(application("Acme", "Engineer", ApplicationStatus::Applied))
            .unwrap()
            .id
            .clone();
        let b = t
            .add_application(application("Globex", "Engineer", ApplicationStatus::Applied))
            .unwrap()
            .id
            .clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_replaces_and_preserves_length() {
        let mut t = tracker();
        let id = t
            .add_application(application("Acme", "Engineer", ApplicationStatus::Applied))
            .unwrap()
            .id
            .clone();
        t.add_application(application("Globex", "Analyst", ApplicationStatus::Applied))
            .unwrap();

        let mut updated = t.application(&id).unwrap().clone();
        updated.status = ApplicationStatus::Interview;
        assert!(t.update_application(updated).unwrap());

        assert_eq!(t.all_applications().len(), 2);
        assert_eq!(
            t.application(&id).unwrap().status,
            ApplicationStatus::Interview
        );
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut t = tracker();
        t.add_application(application("Acme", "Engineer", ApplicationStatus::Applied))
            .unwrap();

        let mut ghost = application("Ghost", "Engineer", ApplicationStatus::Applied);
        ghost.id = "does-not-exist".to_string();
        assert!(!t.update_application(ghost).unwrap());
        assert_eq!(t.all_applications().len(), 1);
        assert_eq!(t.all_applications()[0].company, "Acme");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut t = tracker();
        let id = t
            .add_application(application("Acme", "Engineer", ApplicationStatus::Applied))
            .unwrap()
            .id
            .clone();
        t.add_application(application("Globex", "Analyst", ApplicationStatus::Applied))
            .unwrap();

        assert!(t.delete_application(&id));
        assert_eq!(t.all_applications().len(), 1);
        assert_eq!(t.all_applications()[0].company, "Globex");

        // deleting a missing id is a no-op
        assert!(!t.delete_application(&id));
        assert_eq!(t.all_applications().len(), 1);
    }

    #[test]
    fn test_set_default_keeps_single_default_per_kind() {
        let mut t = tracker();
        let a = t
            .add_document(document("Resume A", DocumentKind::Resume))
            .unwrap()
            .id
            .clone();
        let b = t
            .add_document(document("Resume B", DocumentKind::Resume))
            .unwrap()
            .id
            .clone();
        let letter = t
            .add_document(document("Letter", DocumentKind::CoverLetter))
            .unwrap()
            .id
            .clone();

        assert!(t.set_default_document(&a));
        assert!(t.set_default_document(&letter));
        assert!(t.set_default_document(&b));

        let defaults: Vec<&Document> = t
            .all_documents()
            .iter()
            .filter(|d| d.kind == DocumentKind::Resume && d.is_default())
            .collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, b);

        // the other kind keeps its own default
        assert_eq!(
            t.default_document(DocumentKind::CoverLetter).unwrap().id,
            letter
        );

        // idempotent: repeating the call leaves the same single default
        assert!(t.set_default_document(&b));
        let defaults: Vec<&Document> = t
            .all_documents()
            .iter()
            .filter(|d| d.kind == DocumentKind::Resume && d.is_default())
            .collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, b);
    }

    #[test]
    fn test_unset_default() {
        let mut t = tracker();
        let id = t
            .add_document(document("Resume", DocumentKind::Resume))
            .unwrap()
            .id
            .clone();
        t.set_default_document(&id);
        assert!(t.default_document(DocumentKind::Resume).is_some());

        assert!(t.unset_default_document(&id));
        assert!(t.default_document(DocumentKind::Resume).is_none());
    }

    #[test]
    fn test_filter_dimensions_commute() {
        let mut t = tracker();
        t.add_application(application("Acme", "Backend Engineer", ApplicationStatus::Applied))
            .unwrap();
        t.add_application(application(
            "Acme",
            "Frontend Engineer",
            ApplicationStatus::Interview,
        ))
        .unwrap();
        t.add_application(application("Globex", "Backend Engineer", ApplicationStatus::Applied))
            .unwrap();

        let status_then_search = ApplicationFilter {
            search: Some("acme".to_string()),
            status: Some(ApplicationStatus::Applied),
            source: None,
        };

        // the filter is one conjunction, so dimension order cannot matter;
        // check against composing the dimensions by hand in both orders
        let by_status: Vec<&Application> = t
            .all_applications()
            .iter()
            .filter(|a| a.status == ApplicationStatus::Applied)
            .filter(|a| a.company.to_lowercase().contains("acme"))
            .collect();
        let by_search: Vec<&Application> = t
            .all_applications()
            .iter()
            .filter(|a| a.company.to_lowercase().contains("acme"))
            .filter(|a| a.status == ApplicationStatus::Applied)
            .collect();

        let combined = t.applications(&status_then_search);
        assert_eq!(combined.len(), 1);
        assert_eq!(by_status.len(), combined.len());
        assert_eq!(by_search.len(), combined.len());
        assert_eq!(combined[0].position, "Backend Engineer");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut t = tracker();
        t.add_application(application("Razorpay", "SDE-1", ApplicationStatus::Applied))
            .unwrap();

        let filter = ApplicationFilter {
            search: Some("RAZOR".to_string()),
            ..Default::default()
        };
        assert_eq!(t.applications(&filter).len(), 1);

        let filter = ApplicationFilter {
            search: Some("zebra".to_string()),
            ..Default::default()
        };
        assert!(t.applications(&filter).is_empty());
    }

    #[test]
    fn test_journal_filters() {
        let mut t = tracker();
        t.add_journal_entry(JournalEntry {
            id: String::new(),
            date: "2024-02-01".to_string(),
            mood: Mood::Good,
            title: "First interview".to_string(),
            content: "Went okay".to_string(),
            kind: EntryKind::Reflection,
            application_id: None,
        })
        .unwrap();
        t.add_journal_entry(JournalEntry {
            id: String::new(),
            date: "2024-02-02".to_string(),
            mood: Mood::Tough,
            title: "Rejected again".to_string(),
            content: "Hard day".to_string(),
            kind: EntryKind::Rejection,
            application_id: None,
        })
        .unwrap();

        let filter = JournalFilter {
            mood: Some(Mood::Tough),
            ..Default::default()
        };
        let entries = t.journal_entries(&filter);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Rejected again");

        let filter = JournalFilter {
            search: Some("interview".to_string()),
            kind: Some(EntryKind::Reflection),
            mood: None,
        };
        assert_eq!(t.journal_entries(&filter).len(), 1);
    }

    #[test]
    fn test_rejection_crud_and_search() {
        let mut t = tracker();
        let id = t
            .add_rejection(RejectionEntry {
                id: String::new(),
                company: "Flipkart".to_string(),
                role: "SDE-2".to_string(),
                date: "2024-03-01".to_string(),
                stage: Stage::Technical,
                learnings: "Need more system design practice".to_string(),
                rejection_reason: None,
                feedback: None,
                application_id: None,
                ai_response: None,
            })
            .unwrap()
            .id
            .clone();

        let filter = RejectionFilter {
            search: Some("system design".to_string()),
            stage: None,
        };
        assert_eq!(t.rejections(&filter).len(), 1);

        let mut updated = t.rejection(&id).unwrap().clone();
        updated.ai_response = Some("Keep going".to_string());
        assert!(t.update_rejection(updated).unwrap());
        assert!(t.rejection(&id).unwrap().ai_response.is_some());

        assert!(t.delete_rejection(&id));
        assert!(t.all_rejections().is_empty());
    }

    #[test]
    fn test_collections_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("khoj.db");

        {
            let mut t = Tracker::open(SlotStore::open_at(&path).unwrap());
            t.add_application(application("Acme", "Engineer", ApplicationStatus::Applied))
                .unwrap();
        }

        let t = Tracker::open(SlotStore::open_at(&path).unwrap());
        assert_eq!(t.all_applications().len(), 1);
        assert_eq!(t.all_applications()[0].company, "Acme");
    }
}
