//! Job board engine: file decoding, record validation and loading.
mod decode;
mod load;
mod parse;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use load::{load_jobs_from_bytes, load_jobs_from_path, LoadError, LoadSettings};
pub use parse::{
    parse_jobs_str, parse_jobs_value, parse_jobs_value_with_report, MalformedInput, ParseError,
    ParseReport,
};
