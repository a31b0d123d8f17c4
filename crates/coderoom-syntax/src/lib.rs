//! # Coderoom Syntax
//!
//! Pattern-based syntax highlighting rulesets.
//!
//! Each language is described by an ordered set of token rules — keyword
//! tables plus comment/string/number/bracket recognizers — evaluated
//! against one line of source at a time. Classification is purely
//! presentational: it feeds the editor's colorizer and has no effect on
//! synchronization or execution.
//!
//! ## Learning: Data-Driven Tokenizing
//!
//! Rather than one scanner per language, a single scanner walks the line
//! and consults a [`Ruleset`] for the language-specific parts (which
//! words are keywords, what starts a comment, whether single quotes
//! delimit strings). Adding a language means adding a table, not code.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

/// The categories a token can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Language keyword
    Keyword,
    /// String literal
    Str,
    /// Numeric literal
    Number,
    /// Bracket: `{ } ( ) [ ]`
    Bracket,
    /// Line comment to end of line
    Comment,
    /// Anything else
    Text,
}

/// A classified region of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte range within the line
    pub range: Range<usize>,
    /// Category of the region
    pub kind: TokenKind,
}

// ============================================================================
// Language keyword tables
// ============================================================================

fn python_keywords() -> &'static [&'static str] {
    &[
        "and", "as", "assert", "async", "await", "break", "class", "continue",
        "def", "del", "elif", "else", "except", "finally", "for", "from",
        "global", "if", "import", "in", "is", "lambda", "nonlocal", "not",
        "or", "pass", "raise", "return", "try", "while", "with", "yield",
    ]
}

fn cpp_keywords() -> &'static [&'static str] {
    &[
        "auto", "bool", "break", "case", "catch", "char", "cin", "class",
        "const", "constexpr", "continue", "cout", "default", "delete", "do",
        "double", "else", "endl", "enum", "explicit", "extern", "false",
        "float", "for", "friend", "goto", "if", "inline", "int", "long",
        "namespace", "new", "nullptr", "operator", "private", "protected",
        "public", "return", "short", "signed", "sizeof", "static", "std",
        "struct", "switch", "template", "this", "throw", "true", "try",
        "typedef", "typename", "union", "unsigned", "using", "virtual",
        "void", "volatile", "while",
    ]
}

fn java_keywords() -> &'static [&'static str] {
    &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch",
        "char", "class", "const", "continue", "default", "do", "double",
        "else", "enum", "extends", "final", "finally", "float", "for",
        "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "main", "native", "new", "package", "private",
        "protected", "public", "return", "short", "static", "strictfp",
        "super", "switch", "synchronized", "this", "throw", "throws",
        "transient", "try", "void", "volatile", "while",
    ]
}

fn javascript_keywords() -> &'static [&'static str] {
    &[
        "async", "await", "break", "case", "catch", "class", "const",
        "continue", "debugger", "default", "delete", "do", "else", "export",
        "extends", "finally", "for", "from", "function", "if", "import",
        "in", "instanceof", "let", "new", "of", "return", "static", "super",
        "switch", "this", "throw", "try", "typeof", "var", "void", "while",
        "with", "yield",
    ]
}

// ============================================================================
// Rulesets
// ============================================================================

/// The token rules for one language.
///
/// Rules are applied in a fixed order while scanning: line comment,
/// preprocessor directive, string, number, bracket, word (checked
/// against the keyword table). First match wins, scanning resumes after
/// the matched region.
#[derive(Debug)]
pub struct Ruleset {
    language: String,
    keywords: &'static [&'static str],
    line_comment: &'static str,
    /// Single quotes also delimit strings (Python, JavaScript)
    single_quote_strings: bool,
    /// Lines of the form `#word` are directives classified as keywords (C++)
    hash_directives: bool,
}

impl Ruleset {
    /// Builds the ruleset for a language identifier.
    ///
    /// Unknown identifiers get a plain-text ruleset (every span is
    /// [`TokenKind::Text`]) rather than an error.
    pub fn for_language(language: &str) -> Self {
        match language {
            "python" => Self {
                language: language.to_string(),
                keywords: python_keywords(),
                line_comment: "#",
                single_quote_strings: true,
                hash_directives: false,
            },
            "cpp" => Self {
                language: language.to_string(),
                keywords: cpp_keywords(),
                line_comment: "//",
                single_quote_strings: false,
                hash_directives: true,
            },
            "java" => Self {
                language: language.to_string(),
                keywords: java_keywords(),
                line_comment: "//",
                single_quote_strings: false,
                hash_directives: false,
            },
            "javascript" => Self {
                language: language.to_string(),
                keywords: javascript_keywords(),
                line_comment: "//",
                single_quote_strings: true,
                hash_directives: false,
            },
            other => Self {
                language: other.to_string(),
                keywords: &[],
                line_comment: "",
                single_quote_strings: false,
                hash_directives: false,
            },
        }
    }

    /// The language identifier this ruleset was built for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Identifiers with a real (non-plain-text) ruleset.
    pub fn supported_languages() -> &'static [&'static str] {
        &["python", "cpp", "java", "javascript"]
    }

    /// Classifies one line of source into spans.
    ///
    /// Spans cover the whole line; unclassified regions come back as
    /// [`TokenKind::Text`].
    pub fn tokenize(&self, line: &str) -> Vec<Span> {
        let bytes = line.as_bytes();
        let len = bytes.len();
        let mut spans = Vec::new();
        let mut i = 0;
        let mut text_start = 0;

        // Close out the pending run of unclassified bytes.
        macro_rules! flush_text {
            ($upto:expr) => {
                if text_start < $upto {
                    spans.push(Span {
                        range: text_start..$upto,
                        kind: TokenKind::Text,
                    });
                }
            };
        }

        while i < len {
            let b = bytes[i];

            // Line comment to end of line
            if !self.line_comment.is_empty() && line[i..].starts_with(self.line_comment) {
                flush_text!(i);
                spans.push(Span {
                    range: i..len,
                    kind: TokenKind::Comment,
                });
                return spans;
            }

            // Preprocessor directive: `#include`, `#define`, ...
            if self.hash_directives && b == b'#' {
                let start = i;
                i += 1;
                while i < len && bytes[i].is_ascii_alphabetic() {
                    i += 1;
                }
                if i > start + 1 {
                    flush_text!(start);
                    spans.push(Span {
                        range: start..i,
                        kind: TokenKind::Keyword,
                    });
                    text_start = i;
                    continue;
                }
                // Bare '#' — fall through as plain text
                continue;
            }

            // String literals
            if b == b'"' || (self.single_quote_strings && b == b'\'') {
                let quote = b;
                let start = i;
                i += 1;
                while i < len {
                    if bytes[i] == b'\\' && i + 1 < len {
                        i += 2;
                    } else if bytes[i] == quote {
                        i += 1;
                        break;
                    } else {
                        i += 1;
                    }
                }
                flush_text!(start);
                spans.push(Span {
                    range: start..i,
                    kind: TokenKind::Str,
                });
                text_start = i;
                continue;
            }

            // Numeric literals
            if b.is_ascii_digit() {
                let start = i;
                while i < len && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'.') {
                    i += 1;
                }
                flush_text!(start);
                spans.push(Span {
                    range: start..i,
                    kind: TokenKind::Number,
                });
                text_start = i;
                continue;
            }

            // Brackets
            if matches!(b, b'{' | b'}' | b'(' | b')' | b'[' | b']') {
                flush_text!(i);
                spans.push(Span {
                    range: i..i + 1,
                    kind: TokenKind::Bracket,
                });
                i += 1;
                text_start = i;
                continue;
            }

            // Words — keywords or plain identifiers
            if b.is_ascii_alphabetic() || b == b'_' {
                let start = i;
                while i < len && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                let word = &line[start..i];
                if self.keywords.contains(&word) {
                    flush_text!(start);
                    spans.push(Span {
                        range: start..i,
                        kind: TokenKind::Keyword,
                    });
                    text_start = i;
                }
                continue;
            }

            // Anything else stays plain text; step over the whole
            // character so the slice indices stay on char boundaries.
            i += 1;
            while i < len && !line.is_char_boundary(i) {
                i += 1;
            }
        }

        flush_text!(len);
        spans
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Registry of rulesets, one per registered language.
///
/// Registration is get-or-insert: registering a language twice returns
/// the already-built ruleset, never an error.
pub struct RulesetRegistry {
    rulesets: HashMap<String, Arc<Ruleset>>,
}

impl RulesetRegistry {
    pub fn new() -> Self {
        Self {
            rulesets: HashMap::new(),
        }
    }

    /// Registers the ruleset for a language if not already present and
    /// returns it.
    pub fn register(&mut self, language: &str) -> Arc<Ruleset> {
        if let Some(rules) = self.rulesets.get(language) {
            return Arc::clone(rules);
        }
        tracing::debug!(language, "registering highlighting ruleset");
        let rules = Arc::new(Ruleset::for_language(language));
        self.rulesets
            .insert(language.to_string(), Arc::clone(&rules));
        rules
    }

    /// Looks up a previously registered ruleset.
    pub fn get(&self, language: &str) -> Option<Arc<Ruleset>> {
        self.rulesets.get(language).map(Arc::clone)
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.rulesets.len()
    }

    /// Whether no language has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.rulesets.is_empty()
    }
}

impl Default for RulesetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
