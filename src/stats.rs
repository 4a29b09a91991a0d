use chrono::{Duration, NaiveDate};

use crate::models::{Application, ApplicationStatus, JournalEntry, RejectionEntry, Source, Stage};

/// Read-side aggregation over the collections. Everything here is recomputed
/// on each call from whatever snapshot the caller holds.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub applied: usize,
    pub interviews: usize,
    pub offers: usize,
    pub rejected: usize,
    pub withdrawn: usize,
}

pub fn status_counts(applications: &[Application]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: applications.len(),
        ..Default::default()
    };
    for app in applications {
        match app.status {
            ApplicationStatus::Applied => counts.applied += 1,
            ApplicationStatus::Interview => counts.interviews += 1,
            ApplicationStatus::Offer => counts.offers += 1,
            ApplicationStatus::Rejected => counts.rejected += 1,
            ApplicationStatus::Withdrawn => counts.withdrawn += 1,
        }
    }
    counts
}

/// (interviews + offers) / total as a rounded percentage, 0 for an empty
/// collection.
pub fn response_rate(applications: &[Application]) -> u32 {
    let counts = status_counts(applications);
    if counts.total == 0 {
        return 0;
    }
    let rate = (counts.interviews + counts.offers) as f64 / counts.total as f64 * 100.0;
    rate.round() as u32
}

/// Applications per source, top `n` by count. A missing source counts as
/// `other`. Ties keep first-encountered order.
pub fn top_sources(applications: &[Application], n: usize) -> Vec<(Source, usize)> {
    let mut counts: Vec<(Source, usize)> = Vec::new();
    for app in applications {
        let source = app.source.unwrap_or(Source::Other);
        match counts.iter_mut().find(|(s, _)| *s == source) {
            Some((_, count)) => *count += 1,
            None => counts.push((source, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Rejections dated within the 7 days ending `today`. Entries with a date
/// that does not parse are skipped.
pub fn rejections_this_week(rejections: &[RejectionEntry], today: NaiveDate) -> usize {
    let week_ago = today - Duration::days(7);
    rejections
        .iter()
        .filter_map(|r| NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").ok())
        .filter(|d| *d >= week_ago && *d <= today)
        .count()
}

/// Stage with the highest rejection count; ties go to the stage encountered
/// first in collection order.
pub fn most_common_stage(rejections: &[RejectionEntry]) -> Option<Stage> {
    let mut counts: Vec<(Stage, usize)> = Vec::new();
    for rejection in rejections {
        match counts.iter_mut().find(|(s, _)| *s == rejection.stage) {
            Some((_, count)) => *count += 1,
            None => counts.push((rejection.stage, 1)),
        }
    }

    let mut best: Option<(Stage, usize)> = None;
    for (stage, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((stage, count)),
        }
    }
    best.map(|(stage, _)| stage)
}

// --- Recent activity for the dashboard ---

pub fn recent_applications(applications: &[Application], n: usize) -> Vec<&Application> {
    let mut apps: Vec<&Application> = applications.iter().collect();
    apps.sort_by(|a, b| b.last_update.cmp(&a.last_update));
    apps.truncate(n);
    apps
}

pub fn recent_rejections(rejections: &[RejectionEntry], n: usize) -> Vec<&RejectionEntry> {
    let mut entries: Vec<&RejectionEntry> = rejections.iter().collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(n);
    entries
}

pub fn recent_journal_entries(entries: &[JournalEntry], n: usize) -> Vec<&JournalEntry> {
    let mut entries: Vec<&JournalEntry> = entries.iter().collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationStatus, Source};
    use crate::store::SlotStore;
    use crate::tracker::Tracker;

    fn app(company: &str, status: ApplicationStatus, source: Option<Source>) -> Application {
        Application {
            id: String::new(),
            company: company.to_string(),
            position: "Engineer".to_string(),
            status,
            applied_date: "2024-01-10".to_string(),
            last_update: "2024-01-10".to_string(),
            salary: None,
            location: None,
            job_url: None,
            notes: None,
            interview_date: None,
            follow_up_date: None,
            source,
        }
    }

    fn rejection(date: &str, stage: Stage) -> RejectionEntry {
        RejectionEntry {
            id: String::new(),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            date: date.to_string(),
            stage,
            learnings: "learned".to_string(),
            rejection_reason: None,
            feedback: None,
            application_id: None,
            ai_response: None,
        }
    }

    #[test]
    fn test_response_rate_empty_is_zero() {
        assert_eq!(response_rate(&[]), 0);
    }

    #[test]
    fn test_response_rate_rounds_percentage() {
        // 10 applications, 3 interviews + 1 offer = 40%
        let mut apps = Vec::new();
        for _ in 0..3 {
            apps.push(app("A", ApplicationStatus::Interview, None));
        }
        apps.push(app("B", ApplicationStatus::Offer, None));
        for _ in 0..6 {
            apps.push(app("C", ApplicationStatus::Applied, None));
        }
        assert_eq!(response_rate(&apps), 40);

        // 1 interview out of 3 = 33.3..% rounds to 33
        let apps = vec![
            app("A", ApplicationStatus::Interview, None),
            app("B", ApplicationStatus::Applied, None),
            app("C", ApplicationStatus::Applied, None),
        ];
        assert_eq!(response_rate(&apps), 33);
    }

    #[test]
    fn test_status_counts() {
        let apps = vec![
            app("A", ApplicationStatus::Applied, None),
            app("B", ApplicationStatus::Interview, None),
            app("C", ApplicationStatus::Rejected, None),
            app("D", ApplicationStatus::Withdrawn, None),
            app("E", ApplicationStatus::Offer, None),
            app("F", ApplicationStatus::Applied, None),
        ];
        let counts = status_counts(&apps);
        assert_eq!(counts.total, 6);
        assert_eq!(counts.applied, 2);
        assert_eq!(counts.interviews, 1);
        assert_eq!(counts.offers, 1);
        assert_eq!(counts.rejected, 1);
        assert_eq!(counts.withdrawn, 1);
    }

    #[test]
    fn test_top_sources_counts_and_order() {
        let apps = vec![
            app("A", ApplicationStatus::Applied, Some(Source::Linkedin)),
            app("B", ApplicationStatus::Applied, Some(Source::Naukri)),
            app("C", ApplicationStatus::Applied, Some(Source::Linkedin)),
            app("D", ApplicationStatus::Applied, None),
            app("E", ApplicationStatus::Applied, Some(Source::Referral)),
        ];

        let top = top_sources(&apps, 3);
        assert_eq!(top[0], (Source::Linkedin, 2));
        // naukri, other and referral all have one entry; ties keep
        // first-encountered order and the list is capped at n
        assert_eq!(top[1], (Source::Naukri, 1));
        assert_eq!(top[2], (Source::Other, 1));
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn test_rejections_this_week_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let rejections = vec![
            rejection("2024-03-15", Stage::Technical), // today
            rejection("2024-03-08", Stage::Technical), // exactly 7 days ago
            rejection("2024-03-07", Stage::Technical), // 8 days ago, outside
            rejection("2024-03-16", Stage::Technical), // future, outside
            rejection("not-a-date", Stage::Technical), // skipped
        ];
        assert_eq!(rejections_this_week(&rejections, today), 2);
    }

    #[test]
    fn test_most_common_stage_ties_keep_first() {
        assert_eq!(most_common_stage(&[]), None);

        let rejections = vec![
            rejection("2024-03-01", Stage::PhoneScreen),
            rejection("2024-03-02", Stage::Technical),
            rejection("2024-03-03", Stage::Technical),
        ];
        assert_eq!(most_common_stage(&rejections), Some(Stage::Technical));

        // tie between phone-screen and technical: first encountered wins
        let rejections = vec![
            rejection("2024-03-01", Stage::PhoneScreen),
            rejection("2024-03-02", Stage::Technical),
        ];
        assert_eq!(most_common_stage(&rejections), Some(Stage::PhoneScreen));
    }

    #[test]
    fn test_recent_applications_ordering() {
        let mut a = app("Old", ApplicationStatus::Applied, None);
        a.last_update = "2024-01-01".to_string();
        let mut b = app("New", ApplicationStatus::Applied, None);
        b.last_update = "2024-02-01".to_string();
        let mut c = app("Mid", ApplicationStatus::Applied, None);
        c.last_update = "2024-01-15".to_string();

        let apps = vec![a, b, c];
        let recent = recent_applications(&apps, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].company, "New");
        assert_eq!(recent[1].company, "Mid");
    }

    #[test]
    fn test_rate_follows_status_changes_end_to_end() {
        let mut t = Tracker::open(SlotStore::open_in_memory().unwrap());

        let id = t
            .add_application(app("Acme", ApplicationStatus::Applied, None))
            .unwrap()
            .id
            .clone();
        let counts = status_counts(t.all_applications());
        assert_eq!(counts.total, 1);
        assert_eq!(counts.applied, 1);
        assert_eq!(response_rate(t.all_applications()), 0);

        let mut updated = t.application(&id).unwrap().clone();
        updated.status = ApplicationStatus::Interview;
        t.update_application(updated).unwrap();
        assert_eq!(status_counts(t.all_applications()).interviews, 1);
        assert_eq!(response_rate(t.all_applications()), 100);

        t.add_application(app("Globex", ApplicationStatus::Rejected, None))
            .unwrap();
        let counts = status_counts(t.all_applications());
        assert_eq!(counts.total, 2);
        assert_eq!(response_rate(t.all_applications()), 50);
    }
}
