use crate::{FilterCriteria, FilterOptions, Job, SortKey};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardViewModel {
    pub file_label: String,
    pub job_count: usize,
    pub options: FilterOptions,
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub rows: Vec<JobRowView>,
    pub details: Option<JobDetailsView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    /// Index into the loaded collection, used for [`crate::Msg::JobSelected`].
    pub index: usize,
    pub title: String,
    pub posted: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailsView {
    pub job_no: String,
    pub title: String,
    pub job_type: String,
    pub level: String,
    pub skill: String,
    pub estimated_time: String,
    pub detail: String,
    pub posted: String,
    pub link: String,
}

impl JobDetailsView {
    pub fn from_job(job: &Job) -> Self {
        Self {
            job_no: job.job_no().to_string(),
            title: job.title().to_string(),
            job_type: job.job_type().to_string(),
            level: job.level().to_string(),
            skill: job.skill().to_string(),
            estimated_time: job.estimated_time().to_string(),
            detail: job.detail().to_string(),
            posted: job.formatted_posted_time(),
            link: job.job_page_link().to_string(),
        }
    }
}
