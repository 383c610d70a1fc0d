//! Single-pass shape scanner for Dart class-member declarations
//!
//! Produces the structural fingerprint (`sequence`) and the descriptive
//! prefix (`leading_text`) of one member declaration. Only depth-zero
//! structure is reported: a bracket group emits its opener and closer and
//! nothing from inside it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::literal::{is_identifier_char, LiteralTracker, Step};
use crate::config::ScannerSettings;

/// Fingerprint and label of one member declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Depth-zero structural tokens in order of appearance (e.g. `()=>;`)
    pub sequence: String,
    /// Whitespace-normalized text before the first depth-zero boundary
    pub leading_text: String,
}

impl ScanResult {
    pub fn new(sequence: impl Into<String>, leading_text: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            leading_text: leading_text.into(),
        }
    }
}

/// Bracket kinds tracked for nesting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    Paren,
    Square,
    Brace,
    /// Generic type arguments, never emitted
    Angle,
}

impl Bracket {
    fn opening(c: char) -> Option<Self> {
        match c {
            '(' => Some(Bracket::Paren),
            '[' => Some(Bracket::Square),
            '{' => Some(Bracket::Brace),
            _ => None,
        }
    }

    fn closing(c: char) -> Option<Self> {
        match c {
            ')' => Some(Bracket::Paren),
            ']' => Some(Bracket::Square),
            '}' => Some(Bracket::Brace),
            _ => None,
        }
    }
}

/// Accumulates `leading_text` with whitespace collapsing.
///
/// Text inside a depth-zero generic group is buffered: it is dropped or kept
/// when the group closes, and flushed verbatim if the `<` turns out to be a
/// comparison.
#[derive(Debug)]
struct LeadingText {
    text: String,
    generic: Option<String>,
    pending_space: bool,
    open: bool,
    strip_type_arguments: bool,
}

impl LeadingText {
    fn new(strip_type_arguments: bool) -> Self {
        Self {
            text: String::new(),
            generic: None,
            pending_space: false,
            open: true,
            strip_type_arguments,
        }
    }

    fn push(&mut self, c: char) {
        if !self.open {
            return;
        }
        let buf = match self.generic.as_mut() {
            Some(generic) => generic,
            None => &mut self.text,
        };
        if self.pending_space && !buf.is_empty() {
            buf.push(' ');
        }
        self.pending_space = false;
        buf.push(c);
    }

    fn space(&mut self) {
        if self.open {
            self.pending_space = true;
        }
    }

    fn open_generic(&mut self) {
        if self.open && self.generic.is_none() {
            self.generic = Some(String::new());
            self.push('<');
        }
    }

    fn close_generic(&mut self) {
        if !self.open {
            return;
        }
        self.push('>');
        if let Some(generic) = self.generic.take() {
            if !self.strip_type_arguments {
                self.text.push_str(&generic);
            }
        }
    }

    /// The buffered `<...` was not a type argument list after all
    fn abandon_generic(&mut self) {
        if let Some(generic) = self.generic.take() {
            self.text.push_str(&generic);
        }
    }

    /// A depth-zero boundary token was reached
    fn close(&mut self) {
        self.abandon_generic();
        self.open = false;
    }

    fn finish(mut self) -> String {
        self.abandon_generic();
        self.text
    }
}

/// Scanner for Dart member declarations
#[derive(Debug, Clone, Default)]
pub struct ShapeScanner {
    settings: ScannerSettings,
}

impl ShapeScanner {
    /// Create a scanner with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with explicit settings
    pub fn with_settings(settings: ScannerSettings) -> Self {
        Self { settings }
    }

    /// Settings this scanner was built with
    pub fn settings(&self) -> &ScannerSettings {
        &self.settings
    }

    /// Scan one declaration. Total over all inputs.
    pub fn scan(&self, declaration: &str) -> ScanResult {
        let chars: Vec<char> = declaration.chars().collect();
        let mut literals = LiteralTracker::new();
        let mut brackets: Vec<Bracket> = Vec::new();
        let mut sequence = String::new();
        // Depth-zero tokens seen inside a depth-zero generic group
        let mut deferred = String::new();
        let mut leading = LeadingText::new(self.settings.strip_type_arguments);

        let mut i = 0;
        while i < chars.len() {
            if let Step::Consumed(width) = literals.step(&chars, i) {
                leading.space();
                i += width;
                continue;
            }

            let c = chars[i];

            if brackets.last() == Some(&Bracket::Angle) && !fits_type_arguments(c) {
                discard_angles(&mut brackets, &mut leading, &mut sequence, &mut deferred);
            }

            let top_level = brackets.is_empty();
            match c {
                '=' => {
                    let token = match chars.get(i + 1) {
                        Some('=') => "==",
                        Some('>') => "=>",
                        _ => "=",
                    };
                    if top_level {
                        sequence.push_str(token);
                        leading.close();
                    }
                    i += token.len();
                    continue;
                }
                ';' => {
                    if top_level {
                        sequence.push(';');
                        leading.close();
                    }
                }
                '(' | '[' | '{' => {
                    if top_level {
                        sequence.push(c);
                        leading.close();
                    } else {
                        if only_angles(&brackets) {
                            deferred.push(c);
                        }
                        leading.push(c);
                    }
                    if let Some(bracket) = Bracket::opening(c) {
                        brackets.push(bracket);
                    }
                }
                ')' | ']' | '}' => {
                    if let Some(kind) = Bracket::closing(c) {
                        discard_angles(&mut brackets, &mut leading, &mut sequence, &mut deferred);
                        // Unmatched closers are ignored
                        if brackets.last() == Some(&kind) {
                            brackets.pop();
                            if brackets.is_empty() {
                                sequence.push(c);
                            } else if only_angles(&brackets) {
                                deferred.push(c);
                            }
                        }
                    }
                    leading.push(c);
                }
                '<' if opens_type_arguments(&chars, i) => {
                    if top_level {
                        leading.open_generic();
                    } else {
                        leading.push(c);
                    }
                    brackets.push(Bracket::Angle);
                }
                '>' if brackets.last() == Some(&Bracket::Angle) => {
                    brackets.pop();
                    if brackets.is_empty() {
                        deferred.clear();
                        leading.close_generic();
                    } else {
                        leading.push(c);
                    }
                }
                c if c.is_whitespace() => leading.space(),
                c => leading.push(c),
            }
            i += 1;
        }

        // An unterminated `<` was a comparison
        if only_angles(&brackets) {
            sequence.push_str(&deferred);
        }

        if !brackets.is_empty() || !literals.is_outside() {
            debug!(
                "Declaration ended inside {} open group(s), literal state {:?}",
                brackets.len(),
                literals.state()
            );
        }

        ScanResult {
            sequence,
            leading_text: leading.finish(),
        }
    }
}

/// Scan a declaration with default settings
pub fn scan(declaration: &str) -> ScanResult {
    ShapeScanner::new().scan(declaration)
}

/// `<` opens a generic group only when glued to an identifier, and never as
/// the operator name in `operator <`.
fn opens_type_arguments(chars: &[char], at: usize) -> bool {
    if at == 0 || !is_identifier_char(chars[at - 1]) {
        return false;
    }
    let word_start = chars[..at]
        .iter()
        .rposition(|&c| !is_identifier_char(c))
        .map_or(0, |p| p + 1);
    let word: String = chars[word_start..at].iter().collect();
    word != "operator"
}

/// Characters that can appear inside a type argument list
fn fits_type_arguments(c: char) -> bool {
    is_identifier_char(c)
        || c.is_whitespace()
        || matches!(c, ',' | '.' | '?' | '<' | '>' | '(' | ')')
}

/// True when every open group is a generic one (and at least one is open)
fn only_angles(brackets: &[Bracket]) -> bool {
    !brackets.is_empty() && brackets.iter().all(|b| *b == Bracket::Angle)
}

/// Drop unterminated generic groups from the top of the stack.
///
/// When the outermost group goes, the `<` was a comparison: its buffered
/// text returns to the leading text and its deferred tokens to the sequence.
fn discard_angles(
    brackets: &mut Vec<Bracket>,
    leading: &mut LeadingText,
    sequence: &mut String,
    deferred: &mut String,
) {
    while brackets.last() == Some(&Bracket::Angle) {
        brackets.pop();
    }
    if brackets.is_empty() {
        leading.abandon_generic();
        sequence.push_str(deferred.as_str());
        deferred.clear();
    }
}
