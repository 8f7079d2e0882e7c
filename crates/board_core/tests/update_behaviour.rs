use std::path::PathBuf;
use std::sync::Once;

use board_core::{
    update, BoardState, Effect, FieldFilter, FilterField, Job, JobCollection, JobFields, Msg,
    SortKey, NO_FILE_CHOSEN,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn job(title: &str, posted: &str, level: &str) -> Job {
    Job::new(JobFields {
        title: title.to_string(),
        posted_time: posted.to_string(),
        level: level.to_string(),
        job_type: "Fixed".to_string(),
        skill: "Rust".to_string(),
        detail: format!("{title} details"),
        job_page_link: format!("https://jobs.example.com/{title}"),
        ..JobFields::default()
    })
    .expect("valid job")
}

fn loaded() -> BoardState {
    let jobs = JobCollection::new(vec![
        job("A", "5 minutes ago", "Senior"),
        job("B", "2 days ago", "Junior"),
        job("C", "1 hour ago", "Senior"),
    ]);
    let (state, effects) = update(BoardState::new(), Msg::JobsLoaded(jobs));
    assert!(effects.is_empty());
    state
}

fn row_titles(state: &BoardState) -> Vec<String> {
    state.view().rows.into_iter().map(|row| row.title).collect()
}

#[test]
fn choosing_a_file_requests_a_read() {
    init_logging();
    let path = PathBuf::from("data/jobs.json");
    let (state, effects) = update(BoardState::new(), Msg::FileChosen(Some(path.clone())));

    assert_eq!(effects, vec![Effect::ReadFile { path }]);
    assert_eq!(state.view().file_label, "jobs.json");
}

#[test]
fn dismissing_the_picker_loads_nothing() {
    init_logging();
    let (state, effects) = update(loaded(), Msg::FileChosen(None));

    assert!(effects.is_empty());
    assert_eq!(state.view().file_label, NO_FILE_CHOSEN);
    assert_eq!(state.jobs().len(), 3);
}

#[test]
fn loaded_jobs_show_in_file_order_with_formatted_time() {
    init_logging();
    let state = loaded();
    let view = state.view();

    assert_eq!(view.job_count, 3);
    assert_eq!(row_titles(&state), vec!["A", "B", "C"]);
    assert_eq!(view.rows[1].posted, "2 day(s) ago");
    assert_eq!(view.options.levels, vec!["Senior", "Junior"]);
    assert!(view.details.is_none());
}

#[test]
fn apply_filters_and_sorts_without_touching_collection() {
    init_logging();
    let state = loaded();
    let (state, _) = update(
        state,
        Msg::FilterChanged {
            field: FilterField::Level,
            value: FieldFilter::from("Senior"),
        },
    );
    // Pending changes are not shown until applied.
    assert_eq!(row_titles(&state), vec!["A", "B", "C"]);

    let (state, _) = update(state, Msg::SortChanged(SortKey::PostedOldestFirst));
    let (state, effects) = update(state, Msg::ApplyClicked);

    assert!(effects.is_empty());
    assert_eq!(row_titles(&state), vec!["C", "A"]);
    let canonical: Vec<_> = state.jobs().iter().map(|j| j.title().to_string()).collect();
    assert_eq!(canonical, vec!["A", "B", "C"]);
}

#[test]
fn reset_restores_defaults_and_original_order() {
    init_logging();
    let (state, _) = update(loaded(), Msg::SortChanged(SortKey::TitleDescending));
    let (state, _) = update(
        state,
        Msg::FilterChanged {
            field: FilterField::Level,
            value: FieldFilter::from("Junior"),
        },
    );
    let (state, _) = update(state, Msg::ApplyClicked);
    assert_eq!(row_titles(&state), vec!["B"]);

    let (state, _) = update(state, Msg::ResetClicked);
    let view = state.view();
    assert_eq!(view.sort, SortKey::PostedNewestFirst);
    assert_eq!(view.criteria.level, FieldFilter::All);
    assert_eq!(row_titles(&state), vec!["A", "B", "C"]);
}

#[test]
fn applying_with_no_matches_gives_an_empty_view() {
    init_logging();
    let (state, _) = update(
        loaded(),
        Msg::FilterChanged {
            field: FilterField::Skill,
            value: FieldFilter::from("Haskell"),
        },
    );
    let (state, effects) = update(state, Msg::ApplyClicked);

    assert!(effects.is_empty());
    assert!(state.view().rows.is_empty());
    assert_eq!(state.view().job_count, 3);
}

#[test]
fn load_failure_clears_everything_and_reports_once() {
    init_logging();
    let (state, effects) = update(
        loaded(),
        Msg::LoadFailed {
            message: "JSON file does not contain an array of jobs".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::ReportLoadFailure {
            message: "JSON file does not contain an array of jobs".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.job_count, 0);
    assert!(view.rows.is_empty());
    assert!(view.options.is_empty());
    assert!(view.details.is_none());
}

#[test]
fn new_load_replaces_previous_collection() {
    init_logging();
    let (state, _) = update(loaded(), Msg::JobSelected { index: 2 });
    let replacement = JobCollection::new(vec![job("Z", "1 week ago", "Mid")]);
    let (state, _) = update(state, Msg::JobsLoaded(replacement));

    assert_eq!(row_titles(&state), vec!["Z"]);
    assert_eq!(state.view().options.levels, vec!["Mid"]);
    assert!(state.view().details.is_none());
}

#[test]
fn selecting_a_job_opens_details_and_replaces_previous() {
    init_logging();
    let (state, _) = update(loaded(), Msg::JobSelected { index: 0 });
    let (state, _) = update(state, Msg::JobSelected { index: 1 });

    let details = state.view().details.expect("details open");
    assert_eq!(details.title, "B");
    assert_eq!(details.level, "Junior");
    assert_eq!(details.posted, "2 day(s) ago");
    assert_eq!(details.link, "https://jobs.example.com/B");

    let (state, _) = update(state, Msg::DetailsClosed);
    assert!(state.view().details.is_none());

    let (state, _) = update(state, Msg::DetailsClosed);
    assert!(state.view().details.is_none());
}

#[test]
fn out_of_range_selection_is_ignored() {
    init_logging();
    let state = loaded();
    let before = state.view();

    let (next, effects) = update(state, Msg::JobSelected { index: 99 });
    assert!(effects.is_empty());
    assert!(next.view().details.is_none());
    assert_eq!(next.view(), before);
}
