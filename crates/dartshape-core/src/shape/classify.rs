//! Member classification from a scanned shape
//!
//! Turns a [`ScanResult`] into the information an outline or folding
//! provider needs: what kind of member it is, its name, and a short label.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::scanner::{ScanResult, ShapeScanner};

/// Leading keywords that are modifiers rather than part of the type
pub const MODIFIERS: &[&str] = &[
    "static",
    "final",
    "const",
    "late",
    "external",
    "abstract",
    "covariant",
    "factory",
    "var",
];

/// Kind of class member a declaration describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Field,
    Getter,
    Setter,
    Method,
    Operator,
    Constructor,
    Unknown,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemberKind::Field => "field",
            MemberKind::Getter => "getter",
            MemberKind::Setter => "setter",
            MemberKind::Method => "method",
            MemberKind::Operator => "operator",
            MemberKind::Constructor => "constructor",
            MemberKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Classified member declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSignature {
    pub kind: MemberKind,
    /// Member name (`operator ==` for operators, `Foo.named` for named constructors)
    pub name: String,
    /// Leading modifier keywords in source order
    pub modifiers: Vec<String>,
    pub is_static: bool,
    /// Method/accessor body (`{}` or `=>`) or field initializer present
    pub has_body: bool,
    /// Collapsed text for fold and outline display
    pub label: String,
    /// The underlying structural fingerprint
    pub shape: ScanResult,
}

/// Classify a declaration with default scanner settings
pub fn classify(declaration: &str) -> MemberSignature {
    classify_in(declaration, None)
}

/// Classify a declaration that belongs to `class_name`
pub fn classify_in(declaration: &str, class_name: Option<&str>) -> MemberSignature {
    ShapeScanner::new().classify(declaration, class_name)
}

impl ShapeScanner {
    /// Scan and classify a declaration
    pub fn classify(&self, declaration: &str, class_name: Option<&str>) -> MemberSignature {
        let shape = self.scan(declaration);
        MemberSignature::from_shape(declaration, shape, class_name)
    }
}

impl MemberSignature {
    /// Build a signature from an already scanned shape
    pub fn from_shape(declaration: &str, shape: ScanResult, class_name: Option<&str>) -> Self {
        let words: Vec<&str> = shape.leading_text.split_whitespace().collect();
        let modifiers: Vec<String> = words
            .iter()
            .copied()
            .take_while(|w| MODIFIERS.contains(w))
            .map(|w| w.to_string())
            .collect();
        let is_static = modifiers.iter().any(|m| m == "static");
        let last_word = words.last().copied().unwrap_or_default();

        let (kind, name) = if words.contains(&"operator") {
            (MemberKind::Operator, operator_name(declaration))
        } else if let Some((accessor, name)) = accessor(&shape.leading_text) {
            (accessor, name)
        } else if is_constructor(&modifiers, last_word, class_name) {
            (MemberKind::Constructor, last_word.to_string())
        } else if shape.sequence.starts_with('(') {
            (MemberKind::Method, last_word.to_string())
        } else if is_field_shape(&shape.sequence) && !last_word.is_empty() {
            (MemberKind::Field, last_word.to_string())
        } else {
            (MemberKind::Unknown, last_word.to_string())
        };

        let has_body = match kind {
            MemberKind::Field => shape.sequence.starts_with('=') && !shape.sequence.starts_with("=>"),
            _ => shape.sequence.contains('{') || shape.sequence.contains("=>"),
        };

        let label = match kind {
            MemberKind::Getter => format!("get {name}"),
            MemberKind::Setter => format!("set {name}"),
            MemberKind::Method | MemberKind::Operator | MemberKind::Constructor => {
                format!("{name}()")
            }
            MemberKind::Field => name.clone(),
            MemberKind::Unknown => shape.leading_text.clone(),
        };

        Self {
            kind,
            name,
            modifiers,
            is_static,
            has_body,
            label,
            shape,
        }
    }
}

/// `operator` plus the operator symbol taken from the declaration text
fn operator_name(declaration: &str) -> String {
    static OPERATOR_RE: OnceLock<Regex> = OnceLock::new();
    let re = OPERATOR_RE.get_or_init(|| {
        // operator ==(, operator [](, operator ~/(
        Regex::new(r"\boperator\s*([^\s(]+)").unwrap()
    });

    match re.captures(declaration) {
        Some(caps) => format!("operator {}", &caps[1]),
        None => "operator".to_string(),
    }
}

/// Getter/setter detection: `get name` or `set name` ending the leading text
fn accessor(leading_text: &str) -> Option<(MemberKind, String)> {
    static ACCESSOR_RE: OnceLock<Regex> = OnceLock::new();
    let re = ACCESSOR_RE.get_or_init(|| {
        Regex::new(r"(?:^|\s)(get|set)\s+([A-Za-z_$][\w$]*)$").unwrap()
    });

    let caps = re.captures(leading_text)?;
    let kind = if &caps[1] == "get" {
        MemberKind::Getter
    } else {
        MemberKind::Setter
    };
    Some((kind, caps[2].to_string()))
}

fn is_constructor(modifiers: &[String], name: &str, class_name: Option<&str>) -> bool {
    if modifiers.iter().any(|m| m == "factory") {
        return true;
    }
    match class_name {
        Some(class) if !class.is_empty() => {
            name == class
                || name
                    .strip_prefix(class)
                    .is_some_and(|rest| rest.starts_with('.'))
        }
        _ => false,
    }
}

fn is_field_shape(sequence: &str) -> bool {
    sequence.is_empty()
        || sequence == ";"
        || (sequence.starts_with('=') && !sequence.starts_with("=>"))
}
