use std::path::Path;

use crate::view_model::{BoardViewModel, JobDetailsView, JobRowView};
use crate::{
    select_indices, FieldFilter, FilterCriteria, FilterField, FilterOptions, JobCollection, SortKey,
};

pub const NO_FILE_CHOSEN: &str = "No file chosen";

/// Everything the board shows. Owned by the presentation layer and only
/// changed through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    jobs: JobCollection,
    options: FilterOptions,
    criteria: FilterCriteria,
    sort: SortKey,
    /// Collection indices currently on screen, in display order.
    visible: Vec<usize>,
    selected: Option<usize>,
    file_label: String,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            jobs: JobCollection::default(),
            options: FilterOptions::default(),
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            visible: Vec::new(),
            selected: None,
            file_label: NO_FILE_CHOSEN.to_string(),
        }
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &JobCollection {
        &self.jobs
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn view(&self) -> BoardViewModel {
        let rows = self
            .visible
            .iter()
            .filter_map(|&index| {
                self.jobs.get(index).map(|job| JobRowView {
                    index,
                    title: job.title().to_string(),
                    posted: job.formatted_posted_time(),
                })
            })
            .collect();

        BoardViewModel {
            file_label: self.file_label.clone(),
            job_count: self.jobs.len(),
            options: self.options.clone(),
            criteria: self.criteria.clone(),
            sort: self.sort,
            rows,
            details: self
                .selected
                .and_then(|index| self.jobs.get(index))
                .map(JobDetailsView::from_job),
        }
    }

    pub(crate) fn set_file_label(&mut self, path: Option<&Path>) {
        self.file_label = path
            .map(|p| {
                p.file_name()
                    .unwrap_or(p.as_os_str())
                    .to_string_lossy()
                    .into_owned()
            })
            .unwrap_or_else(|| NO_FILE_CHOSEN.to_string());
    }

    /// Replaces the collection wholesale and shows it in file order.
    pub(crate) fn load_jobs(&mut self, jobs: JobCollection) {
        self.options = FilterOptions::from_jobs(&jobs);
        self.visible = (0..jobs.len()).collect();
        self.jobs = jobs;
        self.criteria = FilterCriteria::default();
        self.selected = None;
    }

    pub(crate) fn clear_jobs(&mut self) {
        self.jobs = JobCollection::default();
        self.options = FilterOptions::default();
        self.criteria = FilterCriteria::default();
        self.visible.clear();
        self.selected = None;
    }

    pub(crate) fn set_filter(&mut self, field: FilterField, value: FieldFilter) {
        self.criteria.set(field, value);
    }

    pub(crate) fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub(crate) fn apply(&mut self) {
        self.visible = select_indices(&self.jobs, &self.criteria, Some(self.sort));
    }

    pub(crate) fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
        self.sort = SortKey::default();
        self.visible = (0..self.jobs.len()).collect();
    }

    pub(crate) fn select(&mut self, index: usize) {
        if index < self.jobs.len() {
            self.selected = Some(index);
        }
    }

    pub(crate) fn close_details(&mut self) {
        self.selected = None;
    }
}
