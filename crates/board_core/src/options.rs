use std::collections::HashSet;

use crate::{Job, JobCollection};

/// Distinct values offered by the level, type and skill filters.
///
/// Values keep first-seen order. An empty value is a choice of its own: it
/// selects jobs that leave the field blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub levels: Vec<String>,
    pub types: Vec<String>,
    pub skills: Vec<String>,
}

impl FilterOptions {
    pub fn from_jobs(jobs: &JobCollection) -> Self {
        Self {
            levels: distinct(jobs, Job::level),
            types: distinct(jobs, Job::job_type),
            skills: distinct(jobs, Job::skill),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() && self.types.is_empty() && self.skills.is_empty()
    }
}

fn distinct(jobs: &JobCollection, field: fn(&Job) -> &str) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .map(field)
        .filter(|value| seen.insert(*value))
        .map(ToOwned::to_owned)
        .collect()
}
