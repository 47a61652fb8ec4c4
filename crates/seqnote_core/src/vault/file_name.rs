//! Denote-style note file names.
//!
//! `IDENTIFIER==SIGNATURE--TITLE__KEYWORD1_KEYWORD2.EXT`
//!
//! Every field is optional. Text before the first marker is the identifier;
//! `@@` marks an identifier placed elsewhere. The extension is what follows
//! the last `.`, so titles may contain dots (`v1.2-notes.md`). Encryption
//! suffixes (`gpg`, `age`) also keep the alphabetic extension before them
//! (`note.md.gpg` keeps `md.gpg`).

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static FIELD_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@@|==|--|__").expect("valid field marker regex"));

const IDENTIFIER_MARKER: &str = "@@";
const SIGNATURE_MARKER: &str = "==";
const TITLE_MARKER: &str = "--";
const KEYWORDS_MARKER: &str = "__";

const ENCRYPTED_EXTENSIONS: &[&str] = &["gpg", "age"];

/// Parsed note file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFileName {
    pub identifier: Option<String>,
    /// Raw address substring, not yet validated against any scheme.
    pub signature: Option<String>,
    pub title: Option<String>,
    pub keywords: Vec<String>,
    pub extension: Option<String>,
}

impl NoteFileName {
    /// Parses `name` into its fields. Never fails; unknown text ends up in
    /// the identifier or is dropped with its empty field.
    pub fn parse(name: &str) -> Self {
        let (stem, extension) = split_extension(name);

        let mut parsed = Self {
            extension: non_empty(extension.unwrap_or("")),
            ..Self::default()
        };

        let markers = FIELD_MARKER_RE.find_iter(stem).collect::<Vec<_>>();
        let leading_end = markers.first().map_or(stem.len(), |m| m.start());
        parsed.identifier = non_empty(&stem[..leading_end]);

        for (index, marker) in markers.iter().enumerate() {
            let value_end = markers.get(index + 1).map_or(stem.len(), |next| next.start());
            let value = &stem[marker.end()..value_end];
            match marker.as_str() {
                IDENTIFIER_MARKER if parsed.identifier.is_none() => {
                    parsed.identifier = non_empty(value);
                }
                SIGNATURE_MARKER if parsed.signature.is_none() => {
                    parsed.signature = non_empty(value);
                }
                TITLE_MARKER if parsed.title.is_none() => parsed.title = non_empty(value),
                KEYWORDS_MARKER if parsed.keywords.is_empty() => {
                    parsed.keywords = value
                        .split('_')
                        .filter(|keyword| !keyword.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                _ => {}
            }
        }
        parsed
    }

    /// Raw signature substring, if the name carries one.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Returns a copy whose signature field is `address`.
    pub fn with_signature(&self, address: impl Into<String>) -> Self {
        Self {
            signature: Some(address.into()),
            ..self.clone()
        }
    }
}

impl Display for NoteFileName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(identifier) = &self.identifier {
            f.write_str(identifier)?;
        }
        if let Some(signature) = &self.signature {
            write!(f, "{SIGNATURE_MARKER}{signature}")?;
        }
        if let Some(title) = &self.title {
            write!(f, "{TITLE_MARKER}{title}")?;
        }
        if !self.keywords.is_empty() {
            write!(f, "{KEYWORDS_MARKER}{}", self.keywords.join("_"))?;
        }
        if let Some(extension) = &self.extension {
            write!(f, ".{extension}")?;
        }
        Ok(())
    }
}

/// Splits at the last `.` of a non-empty stem, folding `md.gpg`-style
/// double extensions into one.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    let dot = match name.rfind('.') {
        Some(dot) if dot > 0 => dot,
        _ => return (name, None),
    };
    let mut start = dot;
    if ENCRYPTED_EXTENSIONS.contains(&&name[dot + 1..]) {
        if let Some(inner) = name[..dot].rfind('.') {
            let inner_ext = &name[inner + 1..dot];
            let alphabetic =
                !inner_ext.is_empty() && inner_ext.bytes().all(|b| b.is_ascii_alphabetic());
            if inner > 0 && alphabetic {
                start = inner;
            }
        }
    }
    (&name[..start], Some(&name[start + 1..]))
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
