use std::cmp::Ordering;

use crate::{FilterCriteria, Job, JobCollection, SortKey};

/// Filters and optionally sorts `jobs`, returning indices into the collection.
///
/// The collection itself is never reordered; sorting is stable.
pub fn select_indices(
    jobs: &JobCollection,
    criteria: &FilterCriteria,
    sort: Option<SortKey>,
) -> Vec<usize> {
    let mut selected: Vec<usize> = jobs
        .iter()
        .enumerate()
        .filter(|(_, job)| criteria.matches(job))
        .map(|(index, _)| index)
        .collect();

    if let Some(key) = sort {
        let slice = jobs.as_slice();
        selected.sort_by(|&a, &b| compare(key, &slice[a], &slice[b]));
    }
    selected
}

/// Same as [`select_indices`] but yields the jobs themselves.
pub fn select_jobs<'a>(
    jobs: &'a JobCollection,
    criteria: &FilterCriteria,
    sort: Option<SortKey>,
) -> Vec<&'a Job> {
    select_indices(jobs, criteria, sort)
        .into_iter()
        .filter_map(|index| jobs.get(index))
        .collect()
}

pub fn compare(key: SortKey, a: &Job, b: &Job) -> Ordering {
    match key {
        SortKey::TitleAscending => compare_titles(a.title(), b.title()),
        SortKey::TitleDescending => compare_titles(b.title(), a.title()),
        SortKey::PostedNewestFirst => compare_posted(a, b, false),
        SortKey::PostedOldestFirst => compare_posted(a, b, true),
    }
}

// Case-insensitive first, exact text breaks ties so the order is total.
fn compare_titles(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

// Unknown ages go last in both directions.
fn compare_posted(a: &Job, b: &Job, oldest_first: bool) -> Ordering {
    let (a, b) = (a.elapsed_minutes(), b.elapsed_minutes());
    match (a.is_unknown(), b.is_unknown()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if oldest_first => b.cmp(&a),
        (false, false) => a.cmp(&b),
    }
}
