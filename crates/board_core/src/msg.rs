use std::path::PathBuf;

use crate::{FieldFilter, FilterField, JobCollection, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file, or dismissed the picker without one.
    FileChosen(Option<PathBuf>),
    /// Engine produced a validated collection for the chosen file.
    JobsLoaded(JobCollection),
    /// Reading or parsing the chosen file failed.
    LoadFailed { message: String },
    /// User changed one of the filter drop-downs (not applied yet).
    FilterChanged { field: FilterField, value: FieldFilter },
    /// User changed the sort drop-down (not applied yet).
    SortChanged(SortKey),
    /// User clicked Filter & Sort.
    ApplyClicked,
    /// User clicked Reset.
    ResetClicked,
    /// User clicked a job; `index` points into the loaded collection.
    JobSelected { index: usize },
    /// User closed the details popup.
    DetailsClosed,
    /// Fallback for placeholder wiring.
    NoOp,
}
