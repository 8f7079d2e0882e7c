//! Job board core: job model, relative-age parsing, filter/sort engine and
//! the pure state machine driving the presentation layer.
mod criteria;
mod effect;
mod job;
mod msg;
mod options;
pub mod posted;
mod select;
mod state;
mod update;
mod view_model;

pub use criteria::{
    FieldFilter, FilterCriteria, FilterField, ParseSortKeyError, SortKey, FILTER_ALL,
};
pub use effect::Effect;
pub use job::{InvalidJob, Job, JobCollection, JobFields, JobNo};
pub use msg::Msg;
pub use options::FilterOptions;
pub use posted::{ElapsedMinutes, PostedAge, TimeParseError, TimeUnit};
pub use select::{compare, select_indices, select_jobs};
pub use state::{BoardState, NO_FILE_CHOSEN};
pub use update::update;
pub use view_model::{BoardViewModel, JobDetailsView, JobRowView};
