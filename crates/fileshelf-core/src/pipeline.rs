//! The two-stage filter pipeline: date window first, then free text.
//!
//! Every recompute starts from the full raw store. Filtering a previously
//! filtered result compounds predicates across UI interactions and makes the
//! outcome depend on click order; starting from the store keeps the result a
//! pure function of `(store, window, query)`.

use crate::models::FileRecord;
use crate::window::DateWindow;

/// Computes the filtered set. Total over all inputs: never panics, never
/// fails, at worst returns an empty vector.
#[must_use]
pub fn filter_records(
    store: &[FileRecord],
    window: Option<&DateWindow>,
    query: &str,
) -> Vec<FileRecord> {
    store
        .iter()
        .filter(|record| matches_window(record, window) && matches_query(record, query))
        .cloned()
        .collect()
}

/// Date predicate. A record with an unparseable `createdDate` fails every
/// bounded window but passes the unbounded one.
fn matches_window(record: &FileRecord, window: Option<&DateWindow>) -> bool {
    match window {
        None => true,
        Some(window) => record.created_day().is_some_and(|day| window.contains(day)),
    }
}

/// Text predicate: case-insensitive substring over the title and the owner's
/// full name. An empty query matches everything.
fn matches_query(record: &FileRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.owner.full_name().to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::{FileRecord, RecordOwner};
    use crate::window::NamedFilter;

    use super::*;

    fn record(id: i64, title: &str, created: &str, first: &str, last: &str) -> FileRecord {
        FileRecord {
            id,
            title: title.to_string(),
            description: None,
            file_path: format!("uploads/{id}"),
            file_url: None,
            created_date: created.to_string(),
            owner: RecordOwner {
                id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: None,
            },
        }
    }

    fn sample_store() -> Vec<FileRecord> {
        vec![
            record(1, "Budget2023", "2023-01-05T08:00:00Z", "Ada", "Byron"),
            record(2, "Notes", "2024-06-01T08:00:00Z", "Grace", "Hopper"),
            record(3, "Minutes", "broken-timestamp", "Ada", "Byron"),
        ]
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn all_filter_with_empty_query_returns_the_full_store() {
        let store = sample_store();
        let filtered = filter_records(&store, None, "");
        assert_eq!(filtered.len(), store.len());
        let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn this_year_filter_keeps_only_records_created_this_year() {
        let store = sample_store();
        let window = NamedFilter::ThisYear.resolve(day(2024, 6, 15)).unwrap();
        let filtered = filter_records(&store, Some(&window), "");
        let titles: Vec<&str> = filtered.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Notes"]);
    }

    #[test]
    fn unparseable_created_date_is_excluded_from_bounded_windows_only() {
        let store = sample_store();
        let window = NamedFilter::ThisYear.resolve(day(2024, 6, 15)).unwrap();
        assert!(
            filter_records(&store, Some(&window), "minutes").is_empty(),
            "bounded window must drop the record with a broken timestamp"
        );
        let by_text = filter_records(&store, None, "minutes");
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].id, 3);
    }

    #[test]
    fn query_matches_title_and_owner_full_name_case_insensitively() {
        let store = sample_store();

        let by_title = filter_records(&store, None, "bUdGeT");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 1);

        // "ada byron" only exists as a substring of the joined full name.
        let by_name = filter_records(&store, None, "ada byron");
        let ids: Vec<i64> = by_name.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn recompute_is_idempotent_for_identical_inputs() {
        let store = sample_store();
        let window = NamedFilter::ThisYear.resolve(day(2024, 6, 15)).unwrap();
        let first = filter_records(&store, Some(&window), "notes");
        let second = filter_records(&store, Some(&window), "notes");
        let a: Vec<i64> = first.iter().map(|r| r.id).collect();
        let b: Vec<i64> = second.iter().map(|r| r.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn result_does_not_depend_on_prior_interaction_history() {
        let store = sample_store();
        let today = day(2024, 6, 15);

        // Path one: All -> ThisYear -> query.
        let window = NamedFilter::ThisYear.resolve(today).unwrap();
        let direct = filter_records(&store, Some(&window), "notes");

        // Path two: ThisYear -> All -> ThisYear -> query, each step a fresh
        // recompute from the raw store.
        let _ = filter_records(&store, Some(&window), "");
        let _ = filter_records(&store, None, "");
        let detour = filter_records(&store, Some(&window), "notes");

        let a: Vec<i64> = direct.iter().map(|r| r.id).collect();
        let b: Vec<i64> = detour.iter().map(|r| r.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_store_yields_empty_result_for_any_inputs() {
        let window = NamedFilter::Today.resolve(day(2024, 6, 15)).unwrap();
        assert!(filter_records(&[], Some(&window), "anything").is_empty());
        assert!(filter_records(&[], None, "").is_empty());
    }
}
