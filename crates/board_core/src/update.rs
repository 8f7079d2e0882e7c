use crate::{BoardState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BoardState, msg: Msg) -> (BoardState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen(path) => {
            state.set_file_label(path.as_deref());
            match path {
                Some(path) => vec![Effect::ReadFile { path }],
                None => Vec::new(),
            }
        }
        Msg::JobsLoaded(jobs) => {
            state.load_jobs(jobs);
            Vec::new()
        }
        Msg::LoadFailed { message } => {
            state.clear_jobs();
            vec![Effect::ReportLoadFailure { message }]
        }
        Msg::FilterChanged { field, value } => {
            state.set_filter(field, value);
            Vec::new()
        }
        Msg::SortChanged(sort) => {
            state.set_sort(sort);
            Vec::new()
        }
        Msg::ApplyClicked => {
            state.apply();
            Vec::new()
        }
        Msg::ResetClicked => {
            state.reset();
            Vec::new()
        }
        Msg::JobSelected { index } => {
            // Stale indices from an earlier load are ignored.
            state.select(index);
            Vec::new()
        }
        Msg::DetailsClosed => {
            state.close_details();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
