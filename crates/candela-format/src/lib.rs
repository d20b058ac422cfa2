//! Report formatters for candela.
//!
//! This crate provides formatters for writing analysis results:
//!
//! - [`TextFormatter`] - Numbered plain-text report, localized by [`Locale`]
//! - [`JsonFormatter`] - JSON objects, compact or pretty

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-ta/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod formatter;
mod json;
mod locale;
mod text;

pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use locale::Locale;
pub use text::{TextFormatter, report_label};
