//! # Per-record Processing
//!
//! [`Timestamp2Date`] ties the attribute list and the converter together. It is
//! built once from configuration and then applied to any number of records:
//!
//! ```
//! use ts2date::convert::DateConverter;
//! use ts2date::attributes::parse_attribute_list;
//! use ts2date::model::{AttributeRecord, Record};
//! use ts2date::processor::{Relationship, Timestamp2Date};
//!
//! let names = parse_attribute_list("created").unwrap();
//! let processor = Timestamp2Date::with_converter(names, DateConverter::utc());
//!
//! let mut record = Record::new("payload").with_attribute("created", "/Date(1644364800000)/");
//! let report = processor.process(&mut record);
//!
//! assert_eq!(record.attribute("created"), Some("2022-02-09"));
//! assert_eq!(report.route, Relationship::Success);
//! ```
//!
//! The processor holds no mutable state, so a single instance can be shared
//! between threads working on distinct records.

use crate::attributes::AttributeNameSet;
use crate::config::{ConfigError, ProcessorConfig};
use crate::convert::{ConversionOutcome, DateConverter};
use crate::model::AttributeRecord;
use chrono::{Local, TimeZone};
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace, warn};

pub const CAPABILITY_DESCRIPTION: &str = "Accepts a list of attributes separated by comma and \
     converts their values formatted as /Date(1644364800000)/ to the date formatted as 2022-02-09";

pub const TAGS: &[&str] = &["timestamp", "date", "custom"];

/// Static description of a configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

pub const ATTRIBUTES_LIST: PropertyDescriptor = PropertyDescriptor {
    name: "Attributes List",
    description: "Comma separated list of attributes to be formatted as the date.",
    required: true,
};

const PROPERTIES: &[PropertyDescriptor] = &[ATTRIBUTES_LIST];

/// Where a processed record is routed.
///
/// There is a single outcome: every processed record goes to `success`, however
/// many of its attributes were converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Success,
}

const RELATIONSHIPS: &[Relationship] = &[Relationship::Success];

impl Relationship {
    pub fn name(&self) -> &'static str {
        match self {
            Relationship::Success => "success",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Relationship::Success => "Successfully converted attributes to the date format",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What happened to one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Attributes rewritten to a date.
    pub converted: Vec<String>,
    /// Attributes present but left as they were.
    pub unchanged: Vec<String>,
    /// Configured attributes the record does not carry.
    pub missing: Vec<String>,
    pub route: Relationship,
}

/// The `/Date(...)/` attribute filter.
#[derive(Debug, Clone)]
pub struct Timestamp2Date<Tz: TimeZone = Local> {
    names: AttributeNameSet,
    converter: DateConverter<Tz>,
}

impl Timestamp2Date<Local> {
    /// Processor rendering dates in the process local zone.
    pub fn new(names: AttributeNameSet) -> Self {
        Self::with_converter(names, DateConverter::local())
    }

    /// Validate the configuration and build a local-zone processor from it.
    pub fn from_config(config: &ProcessorConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.attribute_names()?))
    }

    pub fn properties() -> &'static [PropertyDescriptor] {
        PROPERTIES
    }

    pub fn relationships() -> &'static [Relationship] {
        RELATIONSHIPS
    }
}

impl<Tz: TimeZone> Timestamp2Date<Tz> {
    pub fn with_converter(names: AttributeNameSet, converter: DateConverter<Tz>) -> Self {
        if names.is_empty() {
            warn!("no attribute names configured; records will pass through unchanged");
        }
        Self { names, converter }
    }

    pub fn attribute_names(&self) -> &AttributeNameSet {
        &self.names
    }

    /// Rewrite every configured legacy-date attribute on `record` in place.
    ///
    /// Attributes that are missing or do not hold a parseable legacy date are
    /// left alone. The record is always routed to [`Relationship::Success`].
    pub fn process<R: AttributeRecord>(&self, record: &mut R) -> ProcessReport {
        let mut report = ProcessReport::default();

        for name in self.names.iter() {
            let Some(value) = record.attribute(name) else {
                debug!(attribute = name, "attribute not present, skipping");
                report.missing.push(name.to_string());
                continue;
            };

            match self.converter.convert(value) {
                ConversionOutcome::Converted(date) => {
                    debug!(attribute = name, from = value, to = %date, "converted legacy date");
                    record.put_attribute(name, date);
                    report.converted.push(name.to_string());
                }
                ConversionOutcome::Unchanged => {
                    trace!(attribute = name, value, "value left unchanged");
                    report.unchanged.push(name.to_string());
                }
            }
        }

        report
    }
}
