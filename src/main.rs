mod mentor;
mod models;
mod stats;
mod store;
mod templates;
mod tracker;
mod tui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::io::Write;
use std::path::PathBuf;

use mentor::{Mentor, MentorContext};
use models::{
    Application, ApplicationStatus, Document, DocumentKind, EntryKind, JournalEntry, Mood,
    RejectionEntry, Source, Stage,
};
use store::SlotStore;
use tracker::{ApplicationFilter, DocumentFilter, JournalFilter, RejectionFilter, Tracker};

#[derive(Parser)]
#[command(name = "khoj")]
#[command(about = "Job search companion - track applications, learn from rejections, stay motivated")]
struct Cli {
    /// Override the data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the store and print its location
    Init,

    /// Track job applications
    App {
        #[command(subcommand)]
        command: AppCommands,
    },

    /// Log rejections and get support
    Reject {
        #[command(subcommand)]
        command: RejectCommands,
    },

    /// Manage resumes and cover letters
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },

    /// Keep a job-search journal
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },

    /// Show the dashboard
    Dash,

    /// Talk to the career mentor
    Chat {
        /// One-shot question; without it an interactive session starts
        message: Option<String>,

        /// Seed the mentor's variety for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the simulated thinking pause
        #[arg(long)]
        no_delay: bool,
    },

    /// Browse applications interactively
    Browse {
        /// Filter by status
        #[arg(short, long, value_enum)]
        status: Option<ApplicationStatus>,

        /// Filter by source
        #[arg(long, value_enum)]
        source: Option<Source>,

        /// Search company and position
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
enum AppCommands {
    /// Add an application
    Add {
        /// Company name
        company: String,

        /// Position title
        position: String,

        /// Current status
        #[arg(short, long, value_enum, default_value_t = ApplicationStatus::Applied)]
        status: ApplicationStatus,

        /// Date applied (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Where you found the role
        #[arg(long, value_enum)]
        source: Option<Source>,

        #[arg(long)]
        salary: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Job posting URL
        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List applications
    List {
        /// Filter by status
        #[arg(short, long, value_enum)]
        status: Option<ApplicationStatus>,

        /// Filter by source
        #[arg(long, value_enum)]
        source: Option<Source>,

        /// Search company and position
        #[arg(long)]
        search: Option<String>,
    },

    /// Show application details
    Show {
        /// Application ID
        id: String,
    },

    /// Update an application
    Update {
        /// Application ID
        id: String,

        #[arg(short, long, value_enum)]
        status: Option<ApplicationStatus>,

        #[arg(long, value_enum)]
        source: Option<Source>,

        #[arg(long)]
        salary: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Scheduled interview date (YYYY-MM-DD)
        #[arg(long)]
        interview_date: Option<String>,

        /// Follow-up reminder date (YYYY-MM-DD)
        #[arg(long)]
        follow_up_date: Option<String>,
    },

    /// Delete an application
    Delete {
        /// Application ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum RejectCommands {
    /// Log a rejection
    Log {
        /// Company name
        company: String,

        /// Role you were rejected for
        role: String,

        /// What you learned from it
        learnings: String,

        /// Pipeline stage where it happened
        #[arg(short, long, value_enum, default_value_t = Stage::Application)]
        stage: Stage,

        /// Date of the rejection (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Reason they gave, if any
        #[arg(long)]
        reason: Option<String>,

        /// Specific feedback they shared
        #[arg(long)]
        feedback: Option<String>,

        /// Link to a tracked application ID
        #[arg(long)]
        application: Option<String>,
    },

    /// List rejections
    List {
        /// Filter by stage
        #[arg(short, long, value_enum)]
        stage: Option<Stage>,

        /// Search company, role and learnings
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a rejection entry
    Show {
        /// Rejection ID
        id: String,
    },

    /// Generate an encouraging mentor response for a rejection
    Support {
        /// Rejection ID
        id: String,

        /// Seed the mentor's variety for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Delete a rejection entry
    Delete {
        /// Rejection ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DocCommands {
    /// Add a document from a file
    Add {
        /// Name for this document
        name: String,

        /// Path to the content file
        file: PathBuf,

        /// Document type
        #[arg(short, long, value_enum, default_value_t = DocumentKind::Resume)]
        kind: DocumentKind,

        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Make this the default of its type
        #[arg(long)]
        default: bool,
    },

    /// List documents
    List {
        /// Filter by type
        #[arg(short, long, value_enum)]
        kind: Option<DocumentKind>,

        /// Search names and tags
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a document
    Show {
        /// Document ID or name
        name: String,
    },

    /// Update a document's name, content or tags
    Update {
        /// Document ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// Re-read content from this file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Replace tags with this comma-separated list
        #[arg(short, long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },

    /// Make a document the default of its type
    SetDefault {
        /// Document ID
        id: String,

        /// Clear the flag instead of setting it
        #[arg(long)]
        unset: bool,
    },

    /// Export a document's content to a text file
    Export {
        /// Document ID or name
        name: String,

        /// Output path (defaults to <name>.txt)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Delete a document
    Delete {
        /// Document ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum JournalCommands {
    /// Add a journal entry
    Add {
        /// Entry title
        title: String,

        /// Entry body
        content: String,

        /// How the day felt
        #[arg(short, long, value_enum, default_value_t = Mood::Okay)]
        mood: Mood,

        /// Kind of entry
        #[arg(short, long, value_enum, default_value_t = EntryKind::Reflection)]
        kind: EntryKind,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Link to a tracked application ID
        #[arg(long)]
        application: Option<String>,
    },

    /// List journal entries
    List {
        /// Filter by kind
        #[arg(short, long, value_enum)]
        kind: Option<EntryKind>,

        /// Filter by mood
        #[arg(short, long, value_enum)]
        mood: Option<Mood>,

        /// Search titles and content
        #[arg(long)]
        search: Option<String>,
    },

    /// Update a journal entry
    Update {
        /// Entry ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(short, long, value_enum)]
        mood: Option<Mood>,

        #[arg(short, long, value_enum)]
        kind: Option<EntryKind>,
    },

    /// Delete a journal entry
    Delete {
        /// Entry ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = match &cli.data_dir {
        Some(dir) => SlotStore::open_at(&dir.join("khoj.db"))?,
        None => SlotStore::open()?,
    };
    let mut tracker = Tracker::open(store);

    match cli.command {
        Commands::Init => {
            match tracker.store_path() {
                Some(path) => println!("Store initialized at {}", path.display()),
                None => println!("Store initialized in memory"),
            }
        }

        Commands::App { command } => run_app_command(&mut tracker, command)?,
        Commands::Reject { command } => run_reject_command(&mut tracker, command)?,
        Commands::Doc { command } => run_doc_command(&mut tracker, command)?,
        Commands::Journal { command } => run_journal_command(&mut tracker, command)?,

        Commands::Dash => print_dashboard(&tracker),

        Commands::Chat {
            message,
            seed,
            no_delay,
        } => run_chat(&tracker, message, seed, no_delay)?,

        Commands::Browse {
            status,
            source,
            search,
        } => {
            let filter = ApplicationFilter {
                search,
                status,
                source,
            };
            tui::run_browse(&mut tracker, &filter)?;
        }
    }

    Ok(())
}

// --- Application commands ---

fn run_app_command(tracker: &mut Tracker, command: AppCommands) -> Result<()> {
    match command {
        AppCommands::Add {
            company,
            position,
            status,
            date,
            source,
            salary,
            location,
            url,
            notes,
        } => {
            let app = Application {
                id: String::new(),
                company,
                position,
                status,
                applied_date: date.unwrap_or_else(tracker::today),
                last_update: String::new(),
                salary,
                location,
                job_url: url,
                notes,
                interview_date: None,
                follow_up_date: None,
                source,
            };
            let created = tracker.add_application(app)?;
            println!(
                "Added application #{} - {} at {}",
                created.id, created.position, created.company
            );
        }

        AppCommands::List {
            status,
            source,
            search,
        } => {
            let filter = ApplicationFilter {
                search,
                status,
                source,
            };
            let apps = tracker.applications(&filter);
            if apps.is_empty() {
                println!("No applications found.");
                return Ok(());
            }
            println!(
                "{:<15} {:<10} {:<22} {:<26} {:<16} {:<10}",
                "ID", "STATUS", "COMPANY", "POSITION", "SOURCE", "UPDATED"
            );
            println!("{}", "-".repeat(103));
            for app in apps {
                let source = app
                    .source
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<15} {:<10} {:<22} {:<26} {:<16} {:<10}",
                    app.id,
                    app.status.to_string(),
                    truncate(&app.company, 20),
                    truncate(&app.position, 24),
                    source,
                    app.last_update
                );
            }
        }

        AppCommands::Show { id } => match tracker.application(&id) {
            Some(app) => {
                println!("Application #{}", app.id);
                println!("Position: {}", app.position);
                println!("Company: {}", app.company);
                println!("Status: {}", app.status);
                if let Some(source) = app.source {
                    println!("Source: {}", source);
                }
                if let Some(salary) = &app.salary {
                    println!("Salary: {}", salary);
                }
                if let Some(location) = &app.location {
                    println!("Location: {}", location);
                }
                if let Some(url) = &app.job_url {
                    println!("URL: {}", url);
                }
                println!("Applied: {}", app.applied_date);
                println!("Last update: {}", app.last_update);
                if let Some(date) = &app.interview_date {
                    println!("Interview: {}", date);
                }
                if let Some(date) = &app.follow_up_date {
                    println!("Follow up: {}", date);
                }
                if let Some(notes) = &app.notes {
                    println!("\n{}", textwrap::fill(notes, 78));
                }
            }
            None => println!("Application #{} not found.", id),
        },

        AppCommands::Update {
            id,
            status,
            source,
            salary,
            location,
            url,
            notes,
            interview_date,
            follow_up_date,
        } => {
            let Some(mut app) = tracker.application(&id).cloned() else {
                println!("Application #{} not found.", id);
                return Ok(());
            };
            if let Some(status) = status {
                app.status = status;
            }
            if let Some(source) = source {
                app.source = Some(source);
            }
            if salary.is_some() {
                app.salary = salary;
            }
            if location.is_some() {
                app.location = location;
            }
            if url.is_some() {
                app.job_url = url;
            }
            if notes.is_some() {
                app.notes = notes;
            }
            if interview_date.is_some() {
                app.interview_date = interview_date;
            }
            if follow_up_date.is_some() {
                app.follow_up_date = follow_up_date;
            }
            tracker.update_application(app)?;
            println!("Updated application #{}", id);
        }

        AppCommands::Delete { id, yes } => {
            if tracker.application(&id).is_none() {
                println!("Application #{} not found.", id);
                return Ok(());
            }
            if !yes && !confirm("Delete this application?")? {
                println!("Cancelled.");
                return Ok(());
            }
            tracker.delete_application(&id);
            println!("Deleted application #{}", id);
        }
    }
    Ok(())
}

// --- Rejection commands ---

fn run_reject_command(tracker: &mut Tracker, command: RejectCommands) -> Result<()> {
    match command {
        RejectCommands::Log {
            company,
            role,
            learnings,
            stage,
            date,
            reason,
            feedback,
            application,
        } => {
            let rejection = RejectionEntry {
                id: String::new(),
                company,
                role,
                date: date.unwrap_or_else(tracker::today),
                stage,
                learnings,
                rejection_reason: reason,
                feedback,
                application_id: application,
                ai_response: None,
            };
            let created = tracker.add_rejection(rejection)?;
            println!(
                "Logged rejection #{} - {} at {} ({})",
                created.id,
                created.role,
                created.company,
                created.stage.label()
            );
            println!("Run 'khoj reject support {}' for a word of encouragement.", created.id);
        }

        RejectCommands::List { stage, search } => {
            let filter = RejectionFilter { search, stage };
            let rejections = tracker.rejections(&filter);
            if rejections.is_empty() {
                println!("No rejections logged.");
                return Ok(());
            }
            println!(
                "{:<15} {:<12} {:<20} {:<24} {:<14}",
                "ID", "DATE", "COMPANY", "ROLE", "STAGE"
            );
            println!("{}", "-".repeat(88));
            for rejection in rejections {
                println!(
                    "{:<15} {:<12} {:<20} {:<24} {:<14}",
                    rejection.id,
                    rejection.date,
                    truncate(&rejection.company, 18),
                    truncate(&rejection.role, 22),
                    rejection.stage.to_string()
                );
            }
        }

        RejectCommands::Show { id } => match tracker.rejection(&id) {
            Some(rejection) => {
                println!("Rejection #{}", rejection.id);
                println!("Role: {}", rejection.role);
                println!("Company: {}", rejection.company);
                println!("Date: {}", rejection.date);
                println!("Stage: {}", rejection.stage.label());
                if let Some(reason) = &rejection.rejection_reason {
                    println!("Reason: {}", reason);
                }
                if let Some(feedback) = &rejection.feedback {
                    println!("Feedback: {}", feedback);
                }
                println!("\nLearnings:\n{}", textwrap::fill(&rejection.learnings, 78));
                if let Some(response) = &rejection.ai_response {
                    println!("\nMentor says:\n{}", textwrap::fill(response, 78));
                }
            }
            None => println!("Rejection #{} not found.", id),
        },

        RejectCommands::Support { id, seed } => {
            let Some(mut rejection) = tracker.rejection(&id).cloned() else {
                println!("Rejection #{} not found.", id);
                return Ok(());
            };
            let mut mentor = match seed {
                Some(seed) => Mentor::with_seed(seed),
                None => Mentor::new(),
            };
            let message = mentor.support_message(
                rejection.stage,
                rejection.rejection_reason.as_deref(),
                &rejection.company,
            );
            println!("{}", textwrap::fill(&message, 78));
            rejection.ai_response = Some(message);
            tracker.update_rejection(rejection)?;
        }

        RejectCommands::Delete { id, yes } => {
            if tracker.rejection(&id).is_none() {
                println!("Rejection #{} not found.", id);
                return Ok(());
            }
            if !yes && !confirm("Delete this rejection entry?")? {
                println!("Cancelled.");
                return Ok(());
            }
            tracker.delete_rejection(&id);
            println!("Deleted rejection #{}", id);
        }
    }
    Ok(())
}

// --- Document commands ---

fn run_doc_command(tracker: &mut Tracker, command: DocCommands) -> Result<()> {
    match command {
        DocCommands::Add {
            name,
            file,
            kind,
            tags,
            default,
        } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read document file: {}", file.display()))?;
            let doc = Document {
                id: String::new(),
                name,
                kind,
                content,
                created_date: String::new(),
                last_modified: String::new(),
                tags,
                is_default: default.then_some(true),
            };
            let created = tracker.add_document(doc)?;
            println!("Added {} '{}' (ID: {})", created.kind, created.name, created.id);
        }

        DocCommands::List { kind, search } => {
            let filter = DocumentFilter { search, kind };
            let docs = tracker.documents(&filter);
            if docs.is_empty() {
                println!("No documents found.");
                return Ok(());
            }
            println!(
                "{:<15} {:<14} {:<24} {:<8} {:<12} {}",
                "ID", "TYPE", "NAME", "DEFAULT", "MODIFIED", "TAGS"
            );
            println!("{}", "-".repeat(92));
            for doc in docs {
                println!(
                    "{:<15} {:<14} {:<24} {:<8} {:<12} {}",
                    doc.id,
                    doc.kind.to_string(),
                    truncate(&doc.name, 22),
                    if doc.is_default() { "*" } else { "" },
                    doc.last_modified,
                    doc.tags.join(", ")
                );
            }
        }

        DocCommands::Show { name } => match find_document(tracker, &name) {
            Some(doc) => {
                println!("{} '{}' (ID: {})", doc.kind, doc.name, doc.id);
                if !doc.tags.is_empty() {
                    println!("Tags: {}", doc.tags.join(", "));
                }
                if doc.is_default() {
                    println!("Default {} for new applications", doc.kind);
                }
                println!("Created: {}", doc.created_date);
                println!("Modified: {}", doc.last_modified);
                println!("\n--- Content ---\n{}", doc.content);
            }
            None => println!("Document '{}' not found.", name),
        },

        DocCommands::Update {
            id,
            name,
            file,
            tags,
        } => {
            let Some(mut doc) = tracker.document(&id).cloned() else {
                println!("Document #{} not found.", id);
                return Ok(());
            };
            if let Some(name) = name {
                doc.name = name;
            }
            if let Some(file) = file {
                doc.content = std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read document file: {}", file.display()))?;
            }
            if let Some(tags) = tags {
                doc.tags = tags;
            }
            tracker.update_document(doc)?;
            println!("Updated document #{}", id);
        }

        DocCommands::SetDefault { id, unset } => {
            let changed = if unset {
                tracker.unset_default_document(&id)
            } else {
                tracker.set_default_document(&id)
            };
            if changed {
                if unset {
                    println!("Cleared default flag on document #{}", id);
                } else {
                    println!("Document #{} is now the default of its type.", id);
                }
            } else {
                println!("Document #{} not found.", id);
            }
        }

        DocCommands::Export { name, out } => {
            let Some(doc) = find_document(tracker, &name) else {
                println!("Document '{}' not found.", name);
                return Ok(());
            };
            let out_path = out.unwrap_or_else(|| PathBuf::from(format!("{}.txt", doc.name)));
            std::fs::write(&out_path, &doc.content)
                .with_context(|| format!("Failed to write to {}", out_path.display()))?;
            println!("Exported '{}' to {}", doc.name, out_path.display());
        }

        DocCommands::Delete { id, yes } => {
            if tracker.document(&id).is_none() {
                println!("Document #{} not found.", id);
                return Ok(());
            }
            if !yes && !confirm("Delete this document?")? {
                println!("Cancelled.");
                return Ok(());
            }
            tracker.delete_document(&id);
            println!("Deleted document #{}", id);
        }
    }
    Ok(())
}

fn find_document<'a>(tracker: &'a Tracker, name_or_id: &str) -> Option<&'a Document> {
    tracker.document(name_or_id).or_else(|| {
        tracker
            .all_documents()
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name_or_id))
    })
}

// --- Journal commands ---

fn run_journal_command(tracker: &mut Tracker, command: JournalCommands) -> Result<()> {
    match command {
        JournalCommands::Add {
            title,
            content,
            mood,
            kind,
            date,
            application,
        } => {
            let entry = JournalEntry {
                id: String::new(),
                date: date.unwrap_or_else(tracker::today),
                mood,
                title,
                content,
                kind,
                application_id: application,
            };
            let created = tracker.add_journal_entry(entry)?;
            println!("Added journal entry #{} - {}", created.id, created.title);
        }

        JournalCommands::List { kind, mood, search } => {
            let filter = JournalFilter { search, kind, mood };
            let entries = tracker.journal_entries(&filter);
            if entries.is_empty() {
                println!("No journal entries found.");
                return Ok(());
            }
            println!(
                "{:<15} {:<12} {:<11} {:<10} {}",
                "ID", "DATE", "KIND", "MOOD", "TITLE"
            );
            println!("{}", "-".repeat(80));
            for entry in entries {
                println!(
                    "{:<15} {:<12} {:<11} {:<10} {}",
                    entry.id,
                    entry.date,
                    entry.kind.to_string(),
                    entry.mood.to_string(),
                    truncate(&entry.title, 30)
                );
            }
        }

        JournalCommands::Update {
            id,
            title,
            content,
            mood,
            kind,
        } => {
            let Some(mut entry) = tracker.journal_entry(&id).cloned() else {
                println!("Journal entry #{} not found.", id);
                return Ok(());
            };
            if let Some(title) = title {
                entry.title = title;
            }
            if let Some(content) = content {
                entry.content = content;
            }
            if let Some(mood) = mood {
                entry.mood = mood;
            }
            if let Some(kind) = kind {
                entry.kind = kind;
            }
            tracker.update_journal_entry(entry)?;
            println!("Updated journal entry #{}", id);
        }

        JournalCommands::Delete { id, yes } => {
            if tracker.journal_entry(&id).is_none() {
                println!("Journal entry #{} not found.", id);
                return Ok(());
            }
            if !yes && !confirm("Delete this journal entry?")? {
                println!("Cancelled.");
                return Ok(());
            }
            tracker.delete_journal_entry(&id);
            println!("Deleted journal entry #{}", id);
        }
    }
    Ok(())
}

// --- Dashboard ---

fn print_dashboard(tracker: &Tracker) {
    let counts = stats::status_counts(tracker.all_applications());
    let rate = stats::response_rate(tracker.all_applications());
    let today = chrono::Local::now().date_naive();

    println!("Job search dashboard");
    if let Some(path) = tracker.store_path() {
        println!("Store: {}", path.display());
    }

    println!("\nApplications");
    println!("  Total:       {}", counts.total);
    println!("  Pending:     {}", counts.applied);
    println!("  Interviews:  {}", counts.interviews);
    println!("  Offers:      {}", counts.offers);
    println!("  Rejected:    {}", counts.rejected);
    println!("  Withdrawn:   {}", counts.withdrawn);
    println!("  Success rate: {}%", rate);

    let top = stats::top_sources(tracker.all_applications(), 3);
    if !top.is_empty() {
        let summary: Vec<String> = top
            .iter()
            .map(|(source, count)| format!("{} ({})", source, count))
            .collect();
        println!("  Top sources: {}", summary.join(", "));
    }

    println!("\nRejections");
    println!("  Logged:      {}", tracker.all_rejections().len());
    println!(
        "  This week:   {}",
        stats::rejections_this_week(tracker.all_rejections(), today)
    );
    match stats::most_common_stage(tracker.all_rejections()) {
        Some(stage) => println!("  Most common stage: {}", stage.label()),
        None => println!("  Most common stage: -"),
    }

    println!("\nJournal entries: {}", tracker.all_journal_entries().len());
    println!("Documents:       {}", tracker.all_documents().len());
    if let Some(doc) = tracker.default_document(DocumentKind::Resume) {
        println!("  Default resume:       {}", doc.name);
    }
    if let Some(doc) = tracker.default_document(DocumentKind::CoverLetter) {
        println!("  Default cover letter: {}", doc.name);
    }

    let recent = stats::recent_applications(tracker.all_applications(), 5);
    if !recent.is_empty() {
        println!("\nRecent applications");
        for app in recent {
            println!(
                "  #{} {} at {} [{}]",
                app.id, app.position, app.company, app.status
            );
        }
    }

    let recent = stats::recent_rejections(tracker.all_rejections(), 3);
    if !recent.is_empty() {
        println!("\nRecent rejections");
        for rejection in recent {
            println!(
                "  #{} {} at {} ({})",
                rejection.id,
                rejection.role,
                rejection.company,
                rejection.stage.label()
            );
        }
    }

    let recent = stats::recent_journal_entries(tracker.all_journal_entries(), 3);
    if !recent.is_empty() {
        println!("\nRecent journal entries");
        for entry in recent {
            println!("  #{} [{}] {}", entry.id, entry.mood, entry.title);
        }
    }
}

// --- Chat ---

fn mentor_context(tracker: &Tracker) -> MentorContext {
    let counts = stats::status_counts(tracker.all_applications());
    MentorContext {
        total: counts.total,
        applied: counts.applied,
        interviews: counts.interviews,
        offers: counts.offers,
        rejected: counts.rejected,
        resume_count: tracker
            .all_documents()
            .iter()
            .filter(|d| d.kind == DocumentKind::Resume)
            .count(),
    }
}

fn run_chat(
    tracker: &Tracker,
    message: Option<String>,
    seed: Option<u64>,
    no_delay: bool,
) -> Result<()> {
    let mentor = match seed {
        Some(seed) => Mentor::with_seed(seed),
        None => Mentor::new(),
    };
    let ctx = mentor_context(tracker);

    // one-shot mode answers immediately, for scripts and tests
    if let Some(message) = message {
        println!("{}", mentor.reply(&message, &ctx));
        return Ok(());
    }

    println!(
        "Namaste! I'm your career mentor for the Indian job market. Ask me about\n\
         companies like TCS, Infosys, Flipkart or Razorpay, resumes, interviews,\n\
         or just how the search is going. Type 'quit' to leave."
    );

    let stdin = std::io::stdin();
    loop {
        print!("\nyou> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        if !no_delay {
            // the pause is pure theater
            let millis = rand::thread_rng().gen_range(600..=1800);
            std::thread::sleep(std::time::Duration::from_millis(millis));
        }

        println!("\n{}", mentor.reply(line, &ctx));
    }

    Ok(())
}

// --- Shared helpers ---

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} (y/N): ", prompt);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string here", 10), "a longe...");
    }
}
