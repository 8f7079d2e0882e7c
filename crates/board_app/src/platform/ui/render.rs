use board_core::{BoardViewModel, FieldFilter, JobDetailsView, JobRowView};

pub const NO_JOBS: &str = "No jobs available.";
/// Shown for the blank filter value; pass `""` on the command line to pick it.
pub const BLANK_CHOICE: &str = "(none)";

/// Renders the board as lines of text: status, optional filter choices, the
/// job list and the details panel when one is open.
pub fn render(view: &BoardViewModel, show_options: bool) -> Vec<String> {
    let mut lines = vec![status_line(view)];

    if show_options {
        lines.push(String::new());
        lines.push(option_line("Level", &view.options.levels));
        lines.push(option_line("Type", &view.options.types));
        lines.push(option_line("Skill", &view.options.skills));
    }

    lines.push(String::new());
    if view.rows.is_empty() {
        lines.push(NO_JOBS.to_string());
    } else {
        lines.extend(view.rows.iter().map(format_job_row));
    }

    if let Some(details) = &view.details {
        lines.push(String::new());
        lines.extend(details_lines(details));
    }
    lines
}

fn status_line(view: &BoardViewModel) -> String {
    format!(
        "File: {} | Jobs: {} | Showing: {} | Sort: {} | Level: {} | Type: {} | Skill: {}",
        view.file_label,
        view.job_count,
        view.rows.len(),
        view.sort.label(),
        criterion_label(&view.criteria.level),
        criterion_label(&view.criteria.job_type),
        criterion_label(&view.criteria.skill),
    )
}

fn criterion_label(filter: &FieldFilter) -> String {
    match filter {
        FieldFilter::Exactly(value) if value.is_empty() => BLANK_CHOICE.to_string(),
        other => other.to_string(),
    }
}

fn option_line(name: &str, values: &[String]) -> String {
    let mut choices = vec!["All"];
    choices.extend(values.iter().map(|value| {
        if value.is_empty() {
            BLANK_CHOICE
        } else {
            value.as_str()
        }
    }));
    format!("{name}: {}", choices.join(", "))
}

fn format_job_row(row: &JobRowView) -> String {
    format!("[{}] {} ({})", row.index, row.title, row.posted)
}

fn details_lines(details: &JobDetailsView) -> Vec<String> {
    let mut lines = vec![format!("=== {} ===", details.title)];
    if !details.job_no.is_empty() {
        lines.push(format!("Job No: {}", details.job_no));
    }
    lines.extend([
        format!("Type: {}", details.job_type),
        format!("Level: {}", details.level),
        format!("Skill: {}", details.skill),
        format!("Estimated Time: {}", details.estimated_time),
        format!("Details: {}", details.detail),
        format!("Posted: {}", details.posted),
    ]);
    if !details.link.is_empty() {
        lines.push(format!("Job Page: {}", details.link));
    }
    lines
}

#[cfg(test)]
mod tests {
    use board_core::{
        update, BoardState, FieldFilter, FilterField, Job, JobCollection, JobFields, Msg,
    };
    use pretty_assertions::assert_eq;

    use super::{render, NO_JOBS};

    fn board() -> BoardState {
        let job = Job::new(JobFields {
            title: "Rust CLI".to_string(),
            posted_time: "3 hours ago".to_string(),
            job_type: "Hourly".to_string(),
            level: "Mid".to_string(),
            skill: "Rust".to_string(),
            job_page_link: "https://jobs.example.com/7".to_string(),
            ..JobFields::default()
        })
        .unwrap();
        let (state, _) = update(
            BoardState::new(),
            Msg::JobsLoaded(JobCollection::new(vec![job])),
        );
        state
    }

    #[test]
    fn empty_board_says_no_jobs() {
        let lines = render(&BoardState::new().view(), false);
        assert_eq!(
            lines,
            vec![
                "File: No file chosen | Jobs: 0 | Showing: 0 | Sort: Newest first | Level: all | Type: all | Skill: all".to_string(),
                String::new(),
                NO_JOBS.to_string(),
            ]
        );
    }

    #[test]
    fn rows_show_index_title_and_age() {
        let lines = render(&board().view(), true);
        assert_eq!(lines[2], "Level: All, Mid");
        assert_eq!(lines[3], "Type: All, Hourly");
        assert_eq!(lines[4], "Skill: All, Rust");
        assert_eq!(lines[6], "[0] Rust CLI (3 hour(s) ago)");
    }

    #[test]
    fn details_panel_follows_the_list() {
        let (state, _) = update(board(), Msg::JobSelected { index: 0 });
        let lines = render(&state.view(), false);
        let tail: Vec<_> = lines.iter().skip(4).cloned().collect();
        assert_eq!(
            tail,
            vec![
                "=== Rust CLI ===",
                "Type: Hourly",
                "Level: Mid",
                "Skill: Rust",
                "Estimated Time: ",
                "Details: ",
                "Posted: 3 hour(s) ago",
                "Job Page: https://jobs.example.com/7",
            ]
        );
    }

    #[test]
    fn blank_values_are_listed_and_selectable() {
        let blank = Job::new(JobFields {
            title: "Unlabelled".to_string(),
            posted_time: "1 day ago".to_string(),
            job_type: "Hourly".to_string(),
            ..JobFields::default()
        })
        .unwrap();
        let mut jobs: Vec<Job> = board().jobs().iter().cloned().collect();
        jobs.push(blank);
        let (state, _) = update(BoardState::new(), Msg::JobsLoaded(JobCollection::new(jobs)));
        let (state, _) = update(
            state,
            Msg::FilterChanged {
                field: FilterField::Level,
                value: FieldFilter::from(""),
            },
        );
        let (state, _) = update(state, Msg::ApplyClicked);

        let lines = render(&state.view(), true);
        assert!(lines[0].ends_with("| Level: (none) | Type: all | Skill: all"));
        assert_eq!(lines[2], "Level: All, Mid, (none)");
        assert_eq!(lines[4], "Skill: All, Rust, (none)");
        assert_eq!(lines[6], "[1] Unlabelled (1 day(s) ago)");
        assert_eq!(lines.len(), 7);
    }
}
