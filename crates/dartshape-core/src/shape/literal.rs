//! Literal and comment tracking for the shape scanner
//!
//! Dart string literals (`'...'`, `"..."`, `'''...'''`, `"""..."""`, raw
//! `r'...'`) and comments (`//`, nestable `/* */`) must never contribute
//! structural tokens. The tracker keeps a stack of lexical contexts so that
//! `${...}` interpolation can open nested literals inside a string.

/// Lexical context the scanner is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralState {
    /// Plain declaration code
    Outside,
    /// `'...'` (raw when written `r'...'`)
    InSingleQuote { raw: bool },
    /// `"..."`
    InDoubleQuote { raw: bool },
    /// `'''...'''`
    InTripleSingle { raw: bool },
    /// `"""..."""`
    InTripleDouble { raw: bool },
    /// `// ...` up to end of line
    LineComment,
    /// `/* ... */`, nesting depth >= 1
    BlockComment { depth: u32 },
    /// `${ ... }` inside a non-raw string, with the count of open inner braces
    Interpolation { braces: u32 },
}

impl LiteralState {
    /// Quote character and delimiter width for string states
    fn delimiter(self) -> Option<(char, usize, bool)> {
        match self {
            LiteralState::InSingleQuote { raw } => Some(('\'', 1, raw)),
            LiteralState::InDoubleQuote { raw } => Some(('"', 1, raw)),
            LiteralState::InTripleSingle { raw } => Some(('\'', 3, raw)),
            LiteralState::InTripleDouble { raw } => Some(('"', 3, raw)),
            _ => None,
        }
    }

    fn string(quote: char, triple: bool, raw: bool) -> Self {
        match (quote, triple) {
            ('\'', false) => LiteralState::InSingleQuote { raw },
            ('\'', true) => LiteralState::InTripleSingle { raw },
            (_, false) => LiteralState::InDoubleQuote { raw },
            (_, true) => LiteralState::InTripleDouble { raw },
        }
    }
}

/// Outcome of feeding one position to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The character is declaration code and must be handled by the caller
    Code,
    /// The tracker swallowed this many characters (literal or comment content)
    Consumed(usize),
}

/// Stack of open literal/comment contexts; empty means [`LiteralState::Outside`]
#[derive(Debug, Default, Clone)]
pub struct LiteralTracker {
    stack: Vec<LiteralState>,
}

impl LiteralTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current (innermost) state
    pub fn state(&self) -> LiteralState {
        self.stack.last().copied().unwrap_or(LiteralState::Outside)
    }

    /// Returns true when no literal or comment is open
    pub fn is_outside(&self) -> bool {
        self.stack.is_empty()
    }

    /// Advance over the character at `at`.
    ///
    /// Returns [`Step::Code`] only when outside every literal and the
    /// character does not open one.
    pub fn step(&mut self, chars: &[char], at: usize) -> Step {
        let c = chars[at];
        let next = chars.get(at + 1).copied();

        match self.state() {
            LiteralState::Outside => match self.open_at(chars, at) {
                Some(width) => Step::Consumed(width),
                None => Step::Code,
            },
            LiteralState::Interpolation { braces } => {
                if let Some(width) = self.open_at(chars, at) {
                    return Step::Consumed(width);
                }
                match c {
                    '{' => self.replace_top(LiteralState::Interpolation { braces: braces + 1 }),
                    '}' if braces == 0 => {
                        self.stack.pop();
                    }
                    '}' => self.replace_top(LiteralState::Interpolation { braces: braces - 1 }),
                    _ => {}
                }
                Step::Consumed(1)
            }
            LiteralState::LineComment => {
                if c == '\n' {
                    self.stack.pop();
                }
                Step::Consumed(1)
            }
            LiteralState::BlockComment { depth } => match (c, next) {
                ('/', Some('*')) => {
                    self.replace_top(LiteralState::BlockComment { depth: depth + 1 });
                    Step::Consumed(2)
                }
                ('*', Some('/')) => {
                    if depth <= 1 {
                        self.stack.pop();
                    } else {
                        self.replace_top(LiteralState::BlockComment { depth: depth - 1 });
                    }
                    Step::Consumed(2)
                }
                _ => Step::Consumed(1),
            },
            state => {
                let Some((quote, width, raw)) = state.delimiter() else {
                    return Step::Consumed(1);
                };
                if !raw && c == '\\' {
                    return Step::Consumed(2);
                }
                if !raw && c == '$' && next == Some('{') {
                    self.stack.push(LiteralState::Interpolation { braces: 0 });
                    return Step::Consumed(2);
                }
                if c == quote && repeats(chars, at, quote, width) {
                    self.stack.pop();
                    return Step::Consumed(width);
                }
                // Single-line strings cannot span lines; recover at the newline
                if width == 1 && c == '\n' {
                    self.stack.pop();
                }
                Step::Consumed(1)
            }
        }
    }

    /// Opens a literal or comment starting at `at`, returning its opener width
    fn open_at(&mut self, chars: &[char], at: usize) -> Option<usize> {
        let c = chars[at];
        match (c, chars.get(at + 1).copied()) {
            ('/', Some('/')) => {
                self.stack.push(LiteralState::LineComment);
                return Some(2);
            }
            ('/', Some('*')) => {
                self.stack.push(LiteralState::BlockComment { depth: 1 });
                return Some(2);
            }
            _ => {}
        }

        let (quote_at, raw) = match c {
            '\'' | '"' => (at, false),
            'r' | 'R' if is_raw_prefix(chars, at) => (at + 1, true),
            _ => return None,
        };
        let quote = chars[quote_at];
        let triple = repeats(chars, quote_at, quote, 3);
        self.stack.push(LiteralState::string(quote, triple, raw));
        let prefix = quote_at - at;
        Some(prefix + if triple { 3 } else { 1 })
    }

    fn replace_top(&mut self, state: LiteralState) {
        if let Some(top) = self.stack.last_mut() {
            *top = state;
        }
    }
}

/// `r` directly followed by a quote, and not the tail of an identifier
fn is_raw_prefix(chars: &[char], at: usize) -> bool {
    let quoted = matches!(chars.get(at + 1), Some('\'' | '"'));
    let standalone = at == 0 || !is_identifier_char(chars[at - 1]);
    quoted && standalone
}

/// True when `quote` occurs `count` times starting at `at`
fn repeats(chars: &[char], at: usize, quote: char, count: usize) -> bool {
    chars.len() >= at + count && chars[at..at + count].iter().all(|&c| c == quote)
}

/// Characters that may appear in a Dart identifier
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
