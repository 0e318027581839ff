//! Preflight check of the packaged tool's `config.xml`.
//!
//! The frozen tool reads `config.xml` from the directory of its executable
//! on every start and silently falls back to defaults for values it does
//! not understand. Checking the file at build time surfaces those values
//! before the artifact is handed out. Findings never fail the build.

use quick_xml::{Reader, events::Event};
use std::{fmt, path::Path};

/// Yes/no options and the value the tool falls back to.
const YES_NO_OPTIONS: &[(&str, &str)] = &[
    ("lea_gruppe_laa_lehramt", "ja"),
    ("lea_gruppe_laa_lehramt_jg", "ja"),
    ("lea_gruppe_laa_seminare", "ja"),
    ("pdf_einzeln", "ja"),
    ("pdf_lehramt", "nein"),
];

/// Option naming the primary key of LEA rows.
const PRIMARY_KEY_OPTION: &str = "lea_primary_key";

/// Option holding the LOGINEO CSV delimiter.
const DELIMITER_OPTION: &str = "logineo_csv_delimiter";

/// One problem found in `config.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFinding {
    /// No `config.xml` in the project root.
    Missing,
    /// The file is not well-formed XML.
    Malformed(String),
    /// An option holds a value the tool replaces with its default.
    InvalidValue {
        /// Option (element) name
        option: String,
        /// Value as written
        value: String,
        /// Value the tool uses instead
        fallback: String,
    },
    /// The CSV delimiter is not a single character.
    InvalidDelimiter(String),
}

impl fmt::Display for ConfigFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(
                f,
                "config.xml not found; the built tool will not start without one next to it"
            ),
            Self::Malformed(reason) => write!(f, "config.xml is not valid XML: {reason}"),
            Self::InvalidValue {
                option,
                value,
                fallback,
            } => write!(
                f,
                "invalid value {value:?} for {option:?} in config.xml; the tool will use {fallback:?}"
            ),
            Self::InvalidDelimiter(value) => write!(
                f,
                "{DELIMITER_OPTION:?} must be a single character, found {value:?}"
            ),
        }
    }
}

/// Resolves the body of an entity or character reference (`amp`, `#59`).
fn resolve_reference(name: &str) -> Option<String> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse().ok()?,
        };
        return char::from_u32(value).map(String::from);
    }

    let predefined = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "apos" => "'",
        "quot" => "\"",
        _ => return None,
    };
    Some(predefined.to_string())
}

/// Direct children of the single root element as `(name, text)` pairs.
///
/// Fails on anything the packaged tool's XML parser rejects: syntax
/// errors, unknown entities, a missing or unclosed root element and
/// content after the root element.
fn root_options(xml: &str) -> Result<Vec<(String, String)>, String> {
    let mut reader = Reader::from_str(xml);

    let mut depth = 0usize;
    let mut roots = 0usize;
    let mut current: Option<(String, String)> = None;
    let mut options = Vec::new();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => return Err(format!("{e} at position {}", reader.error_position())),
        };

        match event {
            Event::Start(e) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
                if depth == 2 {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    current = Some((name, String::new()));
                }
            }
            Event::Empty(e) => {
                if depth == 0 {
                    roots += 1;
                } else if depth == 1 {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    options.push((name, String::new()));
                }
            }
            Event::Text(text) => {
                let text = String::from_utf8_lossy(&text);
                if depth == 0 && !text.trim().is_empty() {
                    return Err("text outside the root element".to_string());
                }
                if depth == 2 {
                    if let Some((_, value)) = current.as_mut() {
                        value.push_str(&text);
                    }
                }
            }
            Event::CData(text) if depth == 2 => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&text));
                }
            }
            Event::GeneralRef(reference) => {
                let name = String::from_utf8_lossy(&reference).into_owned();
                let resolved =
                    resolve_reference(&name).ok_or_else(|| format!("undefined entity &{name};"))?;
                if depth == 0 {
                    return Err("text outside the root element".to_string());
                }
                if depth == 2 {
                    if let Some((_, value)) = current.as_mut() {
                        value.push_str(&resolved);
                    }
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    options.extend(current.take());
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }

        if roots > 1 {
            return Err("more than one root element".to_string());
        }
    }

    match (roots, depth) {
        (0, _) => Err("no root element".to_string()),
        (_, 0) => Ok(options),
        _ => Err("unclosed element at end of file".to_string()),
    }
}

/// Checks `config.xml` contents.
pub fn check_str(xml: &str) -> Vec<ConfigFinding> {
    let options = match root_options(xml) {
        Ok(options) => options,
        Err(reason) => return vec![ConfigFinding::Malformed(reason)],
    };

    let option = |name: &str| -> Option<String> {
        options
            .iter()
            .find(|(option, _)| option == name)
            .map(|(_, value)| value.trim().to_string())
    };

    let mut findings = Vec::new();

    if let Some(value) = option(PRIMARY_KEY_OPTION) {
        let normalized = value.to_lowercase();
        if !matches!(normalized.as_str(), "" | "leaid" | "identnr") {
            findings.push(ConfigFinding::InvalidValue {
                option: PRIMARY_KEY_OPTION.to_string(),
                value,
                fallback: "LEAID".to_string(),
            });
        }
    }

    for (name, fallback) in YES_NO_OPTIONS {
        if let Some(value) = option(name) {
            let normalized = value.to_lowercase();
            if !matches!(normalized.as_str(), "" | "ja" | "nein") {
                findings.push(ConfigFinding::InvalidValue {
                    option: (*name).to_string(),
                    value,
                    fallback: (*fallback).to_string(),
                });
            }
        }
    }

    if let Some(value) = option(DELIMITER_OPTION) {
        if value.chars().count() > 1 {
            findings.push(ConfigFinding::InvalidDelimiter(value));
        }
    }

    findings
}

/// Checks the file at `path`, or reports it missing when `path` is `None`.
pub fn check(path: Option<&Path>) -> Vec<ConfigFinding> {
    let Some(path) = path else {
        return vec![ConfigFinding::Missing];
    };

    match std::fs::read_to_string(path) {
        Ok(xml) => check_str(&xml),
        Err(e) => vec![ConfigFinding::Malformed(e.to_string())],
    }
}
