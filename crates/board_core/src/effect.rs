use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ReadFile { path: PathBuf },
    ReportLoadFailure { message: String },
}
