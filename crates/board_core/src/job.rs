use std::fmt;

use crate::posted::{self, ElapsedMinutes};

/// Opaque posting identifier as found in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JobNo {
    Text(String),
    Number(i64),
}

impl Default for JobNo {
    fn default() -> Self {
        JobNo::Text(String::new())
    }
}

impl fmt::Display for JobNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobNo::Text(text) => f.write_str(text),
            JobNo::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Unvalidated field values used to build a [`Job`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobFields {
    pub job_no: JobNo,
    pub title: String,
    pub job_page_link: String,
    pub posted_time: String,
    pub job_type: String,
    pub level: String,
    pub estimated_time: String,
    pub skill: String,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidJob {
    #[error("job is missing a title")]
    MissingTitle,
    #[error("job is missing a posted time")]
    MissingPosted,
}

/// A validated job posting. Title and posted time are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    fields: JobFields,
}

impl Job {
    pub fn new(fields: JobFields) -> Result<Self, InvalidJob> {
        if fields.title.is_empty() {
            return Err(InvalidJob::MissingTitle);
        }
        if fields.posted_time.is_empty() {
            return Err(InvalidJob::MissingPosted);
        }
        Ok(Self { fields })
    }

    pub fn job_no(&self) -> &JobNo {
        &self.fields.job_no
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn job_page_link(&self) -> &str {
        &self.fields.job_page_link
    }

    pub fn posted_time(&self) -> &str {
        &self.fields.posted_time
    }

    pub fn job_type(&self) -> &str {
        &self.fields.job_type
    }

    pub fn level(&self) -> &str {
        &self.fields.level
    }

    pub fn estimated_time(&self) -> &str {
        &self.fields.estimated_time
    }

    pub fn skill(&self) -> &str {
        &self.fields.skill
    }

    pub fn detail(&self) -> &str {
        &self.fields.detail
    }

    /// Posted time rendered as `"<n> <unit>(s) ago"` or `"Unknown time"`.
    pub fn formatted_posted_time(&self) -> String {
        posted::to_display_string(&self.fields.posted_time)
    }

    pub fn elapsed_minutes(&self) -> ElapsedMinutes {
        posted::to_minutes(&self.fields.posted_time)
    }
}

/// The jobs of one loaded file, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobCollection {
    jobs: Vec<Job>,
}

impl JobCollection {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn as_slice(&self) -> &[Job] {
        &self.jobs
    }
}

impl FromIterator<Job> for JobCollection {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a JobCollection {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidJob, Job, JobFields, JobNo};

    #[test]
    fn rejects_empty_title_and_posted() {
        let missing_title = JobFields {
            posted_time: "1 day ago".into(),
            ..JobFields::default()
        };
        assert_eq!(Job::new(missing_title), Err(InvalidJob::MissingTitle));

        let missing_posted = JobFields {
            title: "Rust dev".into(),
            ..JobFields::default()
        };
        assert_eq!(Job::new(missing_posted), Err(InvalidJob::MissingPosted));
    }

    #[test]
    fn job_no_displays_both_forms() {
        assert_eq!(JobNo::Number(42).to_string(), "42");
        assert_eq!(JobNo::Text("A-7".into()).to_string(), "A-7");
        assert_eq!(JobNo::default().to_string(), "");
    }
}
