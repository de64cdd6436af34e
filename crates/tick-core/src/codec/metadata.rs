//! Metadata block: `key: "value"` lines between two delimiter lines.

use std::{collections::HashMap, fmt};

use jiff::{Timestamp, civil::Date, tz::TimeZone};

use super::{DELIMITER, ParseError};
use crate::models::{Checklist, ListStatus, UNCATEGORIZED};

/// Writes a string with quotes, backslashes and line breaks escaped.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

fn quoted(f: &mut fmt::Formatter<'_>, key: &str, value: &str) -> fmt::Result {
    writeln!(f, "{key}: \"{}\"", Escaped(value))
}

fn timestamp(f: &mut fmt::Formatter<'_>, key: &str, value: Option<&Timestamp>) -> fmt::Result {
    match value {
        Some(ts) => writeln!(f, "{key}: \"{ts}\""),
        None => writeln!(f, "{key}: \"\""),
    }
}

pub(super) fn write(f: &mut fmt::Formatter<'_>, checklist: &Checklist) -> fmt::Result {
    writeln!(f, "{DELIMITER}")?;
    quoted(f, "id", &checklist.id)?;
    quoted(f, "name", &checklist.name)?;
    quoted(f, "description", &checklist.description)?;
    quoted(f, "category", &checklist.category)?;
    timestamp(f, "creation_dt", Some(&checklist.created_at))?;
    timestamp(f, "target_dt", checklist.target_at.as_ref())?;
    timestamp(f, "updated_dt", Some(&checklist.updated_at))?;
    quoted(f, "status", checklist.status.as_str())?;
    writeln!(f, "continual: {}", u8::from(checklist.continual))?;
    writeln!(f, "favorite: {}", u8::from(checklist.favorite))?;
    timestamp(f, "completion_dt", checklist.completed_at.as_ref())?;
    writeln!(f, "{DELIMITER}")
}

/// Parses a value that is either bare or wrapped in double quotes.
fn parse_value(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    let Some(inner) = raw.strip_prefix('"') else {
        return Ok(raw.to_string());
    };

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => value.push('\n'),
                Some('r') => value.push('\r'),
                Some('t') => value.push('\t'),
                Some('"') => value.push('"'),
                Some('\\') => value.push('\\'),
                Some(other) => {
                    value.push('\\');
                    value.push(other);
                }
                None => return Err("unterminated string".to_string()),
            },
            '"' => {
                let rest: String = chars.collect();
                if !rest.trim().is_empty() {
                    return Err(format!("unexpected text after closing quote: {rest}"));
                }
                return Ok(value);
            }
            c => value.push(c),
        }
    }
    Err("unterminated string".to_string())
}

/// Accepts RFC 3339 timestamps, or plain dates taken as midnight UTC.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, String> {
    if let Ok(ts) = value.parse::<Timestamp>() {
        return Ok(ts);
    }
    let date: Date = value.parse().map_err(|e| format!("{e}"))?;
    date.to_zoned(TimeZone::UTC)
        .map(|zoned| zoned.timestamp())
        .map_err(|e| e.to_string())
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "" | "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        other => other
            .parse::<i64>()
            .map(|n| n != 0)
            .map_err(|_| format!("not a flag: {other}")),
    }
}

struct Fields(HashMap<String, String>);

impl Fields {
    fn required(&self, key: &'static str) -> Result<&str, ParseError> {
        self.0
            .get(key)
            .map(String::as_str)
            .ok_or(ParseError::MissingKey(key))
    }

    fn optional(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    fn convert<T>(
        key: &str,
        value: &str,
        parse: impl FnOnce(&str) -> Result<T, String>,
    ) -> Result<T, ParseError> {
        parse(value).map_err(|reason| ParseError::InvalidValue {
            key: key.to_string(),
            reason,
        })
    }

    fn timestamp(&self, key: &str) -> Result<Option<Timestamp>, ParseError> {
        self.optional(key)
            .map(|value| Self::convert(key, value, parse_timestamp))
            .transpose()
    }

    fn flag(&self, key: &str) -> Result<bool, ParseError> {
        self.0
            .get(key)
            .map(|value| Self::convert(key, value, parse_flag))
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

pub(super) fn parse(lines: &[&str]) -> Result<Checklist, ParseError> {
    let mut fields = HashMap::new();
    for (number, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, raw) = line
            .split_once(':')
            .ok_or(ParseError::InvalidLine { line: number + 2 })?;
        let key = key.trim();
        let value = Fields::convert(key, raw, parse_value)?;
        fields.insert(key.to_string(), value);
    }
    let fields = Fields(fields);

    let id = fields.required("id")?;
    if id.trim().is_empty() {
        return Err(ParseError::InvalidValue {
            key: "id".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let created_at = Fields::convert(
        "creation_dt",
        fields.required("creation_dt")?,
        parse_timestamp,
    )?;
    let status = Fields::convert("status", fields.required("status")?, |value| {
        value.parse::<ListStatus>()
    })?;

    Ok(Checklist {
        id: id.to_string(),
        name: fields.required("name")?.to_string(),
        description: fields.0.get("description").cloned().unwrap_or_default(),
        category: fields
            .optional("category")
            .unwrap_or(UNCATEGORIZED)
            .to_string(),
        created_at,
        target_at: fields.timestamp("target_dt")?,
        completed_at: fields.timestamp("completion_dt")?,
        updated_at: fields.timestamp("updated_dt")?.unwrap_or(created_at),
        status,
        continual: fields.flag("continual")?,
        favorite: fields.flag("favorite")?,
        items: Vec::new(),
    })
}
