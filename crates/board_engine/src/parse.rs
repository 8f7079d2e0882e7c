use board_core::{Job, JobCollection, JobFields, JobNo, PostedAge};
use board_logging::{board_debug, board_info, board_warn};
use serde::Deserialize;
use serde_json::Value;

use crate::decode::DecodeError;
use crate::load::LoadSettings;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
    #[error("JSON file does not contain an array of jobs")]
    NotAList,
    #[error("no valid job entries found in the JSON file")]
    NoValidEntries,
}

/// Underlying cause when file content cannot be decoded at all.
#[derive(Debug, thiserror::Error)]
pub enum MalformedInput {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Encoding(#[from] DecodeError),
}

/// Which elements of a batch were dropped during validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseReport {
    pub total: usize,
    pub skipped: Vec<usize>,
}

impl ParseReport {
    pub fn accepted(&self) -> usize {
        self.total - self.skipped.len()
    }
}

/// Scalar JSON value accepted in a job field. Strings are the norm; numbers
/// and booleans appear in hand-edited exports.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    /// `false`, zero and the empty string do not count as a value for a
    /// required field.
    fn is_blank(&self) -> bool {
        match self {
            Scalar::Text(text) => text.is_empty(),
            Scalar::Number(n) => n.as_f64() == Some(0.0),
            Scalar::Flag(flag) => !flag,
        }
    }

    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Number(n) => n.to_string(),
            Scalar::Flag(flag) => flag.to_string(),
        }
    }

    fn into_job_no(self) -> JobNo {
        match self {
            Scalar::Number(n) => match n.as_i64() {
                Some(value) => JobNo::Number(value),
                None => JobNo::Text(n.to_string()),
            },
            other => JobNo::Text(other.into_text()),
        }
    }
}

/// External field names of one uploaded record. Unknown keys are ignored
/// and `null` reads as absent.
#[derive(Debug, Deserialize)]
struct RawJobRecord {
    #[serde(rename = "Job No")]
    job_no: Option<Scalar>,
    #[serde(rename = "Title")]
    title: Option<Scalar>,
    #[serde(rename = "Job Page Link")]
    job_page_link: Option<Scalar>,
    #[serde(rename = "Posted")]
    posted: Option<Scalar>,
    #[serde(rename = "Type")]
    job_type: Option<Scalar>,
    #[serde(rename = "Level")]
    level: Option<Scalar>,
    #[serde(rename = "Estimated Time")]
    estimated_time: Option<Scalar>,
    #[serde(rename = "Skill")]
    skill: Option<Scalar>,
    #[serde(rename = "Detail")]
    detail: Option<Scalar>,
}

impl RawJobRecord {
    fn into_fields(self) -> JobFields {
        fn text(value: Option<Scalar>) -> String {
            value.map(Scalar::into_text).unwrap_or_default()
        }
        fn required(value: Option<Scalar>) -> String {
            text(value.filter(|scalar| !scalar.is_blank()))
        }

        JobFields {
            job_no: self.job_no.map(Scalar::into_job_no).unwrap_or_default(),
            title: required(self.title),
            job_page_link: text(self.job_page_link),
            posted_time: required(self.posted),
            job_type: text(self.job_type),
            level: text(self.level),
            estimated_time: text(self.estimated_time),
            skill: text(self.skill),
            detail: text(self.detail),
        }
    }
}

/// Decode JSON text and validate it into a collection.
pub fn parse_jobs_str(text: &str, settings: &LoadSettings) -> Result<JobCollection, ParseError> {
    let value: Value = serde_json::from_str(text).map_err(MalformedInput::from)?;
    parse_jobs_value(value, settings)
}

pub fn parse_jobs_value(
    value: Value,
    settings: &LoadSettings,
) -> Result<JobCollection, ParseError> {
    parse_jobs_value_with_report(value, settings).map(|(jobs, _)| jobs)
}

/// Validate every element of a top-level array, skipping invalid ones.
///
/// Order is preserved. Fails only when the value is not an array or when
/// no element survives.
pub fn parse_jobs_value_with_report(
    value: Value,
    settings: &LoadSettings,
) -> Result<(JobCollection, ParseReport), ParseError> {
    let Value::Array(elements) = value else {
        return Err(ParseError::NotAList);
    };

    let mut report = ParseReport {
        total: elements.len(),
        skipped: Vec::new(),
    };
    let mut jobs = Vec::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        match validate_element(element, settings) {
            Ok(job) => jobs.push(job),
            Err(reason) => {
                board_warn!("Job at index {} {}. Skipping.", index, reason);
                report.skipped.push(index);
            }
        }
    }

    if jobs.is_empty() {
        return Err(ParseError::NoValidEntries);
    }

    board_info!(
        "Parsed {} job(s), skipped {} of {}",
        jobs.len(),
        report.skipped.len(),
        report.total
    );
    Ok((JobCollection::new(jobs), report))
}

fn validate_element(element: Value, settings: &LoadSettings) -> Result<Job, String> {
    if !element.is_object() {
        return Err("is not an object".to_string());
    }
    let record: RawJobRecord = serde_json::from_value(element).map_err(|err| {
        board_debug!("record rejected by field mapping: {}", err);
        "is not a job record".to_string()
    })?;
    let job = Job::new(record.into_fields())
        .map_err(|_| "is missing required fields".to_string())?;

    if settings.require_parseable_posted {
        if let Err(err) = PostedAge::parse(job.posted_time()) {
            return Err(format!("has an unusable posted time ({err})"));
        }
    }
    Ok(job)
}
