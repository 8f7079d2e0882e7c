use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::ExitCode;

use board_core::{update, BoardState, FieldFilter, FilterField, Msg, SortKey};
use board_engine::LoadSettings;
use board_logging::board_debug;
use clap::Parser;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

/// Load a JSON file of job postings, filter and sort it, and show details.
#[derive(Debug, Parser)]
#[command(name = "job_board", version)]
struct Cli {
    /// JSON file containing an array of job postings
    file: Option<PathBuf>,

    /// Only show jobs with this level ("all" for no constraint, "" for blank)
    #[arg(long)]
    level: Option<String>,

    /// Only show jobs with this type ("all" for no constraint, "" for blank)
    #[arg(long = "type")]
    job_type: Option<String>,

    /// Only show jobs with this skill ("all" for no constraint, "" for blank)
    #[arg(long)]
    skill: Option<String>,

    /// Ordering: title-asc, title-desc, posted-new or posted-old
    #[arg(long)]
    sort: Option<SortKey>,

    /// Restore default filters and file order after applying
    #[arg(long)]
    reset: bool,

    /// Show details for the job with this index
    #[arg(long, value_name = "INDEX")]
    details: Option<usize>,

    /// List the available filter values
    #[arg(long)]
    options: bool,

    /// Refuse files larger than this many bytes
    #[arg(long, default_value_t = LoadSettings::default().max_bytes)]
    max_bytes: u64,

    /// Skip jobs whose posted time cannot be parsed
    #[arg(long)]
    strict_posted: bool,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    log: LogDestination,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_settings(&self) -> LoadSettings {
        LoadSettings {
            max_bytes: self.max_bytes,
            require_parseable_posted: self.strict_posted,
        }
    }

    /// The user actions this invocation stands for, in the order a person
    /// would perform them on the board.
    fn messages(&self) -> VecDeque<Msg> {
        let mut inbox = VecDeque::new();
        inbox.push_back(Msg::FileChosen(self.file.clone()));

        let filters = [
            (FilterField::Level, &self.level),
            (FilterField::Type, &self.job_type),
            (FilterField::Skill, &self.skill),
        ];
        let mut wants_apply = self.sort.is_some();
        for (field, value) in filters {
            if let Some(value) = value {
                inbox.push_back(Msg::FilterChanged {
                    field,
                    value: FieldFilter::from(value.as_str()),
                });
                wants_apply = true;
            }
        }
        if let Some(sort) = self.sort {
            inbox.push_back(Msg::SortChanged(sort));
        }
        if wants_apply {
            inbox.push_back(Msg::ApplyClicked);
        }
        if self.reset {
            inbox.push_back(Msg::ResetClicked);
        }
        if let Some(index) = self.details {
            inbox.push_back(Msg::JobSelected { index });
        }
        inbox
    }
}

pub fn run_app() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::initialize(cli.log, logging::level_for_verbosity(cli.verbose));

    let mut runner = EffectRunner::new(cli.load_settings());
    let mut inbox = cli.messages();
    let mut state = BoardState::new();

    while let Some(msg) = inbox.pop_front() {
        board_debug!("dispatch {:?}", msg);
        let (next, effects) = update(state, msg);
        state = next;
        // Results of an effect are handled before any later user action.
        for follow_up in runner.run(effects).into_iter().rev() {
            inbox.push_front(follow_up);
        }
    }

    for line in ui::render::render(&state.view(), cli.options) {
        println!("{line}");
    }

    if runner.failures() > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
