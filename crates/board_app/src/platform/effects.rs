use board_core::{Effect, Msg};
use board_engine::{load_jobs_from_path, LoadSettings};
use board_logging::{board_error, board_info};

/// Executes effects emitted by the state machine and turns their outcome
/// back into messages.
pub struct EffectRunner {
    settings: LoadSettings,
    failures: usize,
}

impl EffectRunner {
    pub fn new(settings: LoadSettings) -> Self {
        Self {
            settings,
            failures: 0,
        }
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::ReadFile { path } => {
                    board_info!("ReadFile path={:?}", path);
                    let msg = match load_jobs_from_path(&path, &self.settings) {
                        Ok(jobs) => Msg::JobsLoaded(jobs),
                        Err(err) => Msg::LoadFailed {
                            message: err.to_string(),
                        },
                    };
                    follow_ups.push(msg);
                }
                Effect::ReportLoadFailure { message } => {
                    self.failures += 1;
                    board_error!("Error processing file: {}", message);
                    eprintln!("Error processing file: {message}");
                }
            }
        }
        follow_ups
    }
}
