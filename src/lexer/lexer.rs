use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Handles a pattern match of `len` bytes at the lexer's position.
///
/// Returns the token produced, or `None` when the match is skipped.
/// Either way the handler must advance the lexer past the match.
pub type RegexHandler = fn(&mut Lexer, usize) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: pattern("^[0-9]+"), handler: integer_handler },
        RegexPattern { regex: pattern("^\\s+"), handler: skip_handler },
        RegexPattern { regex: pattern("^\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: pattern("^\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: pattern("^\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: pattern("^-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: pattern("^\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: pattern("^/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: pattern("^%"), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
    ];
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("lexer patterns are valid regexes")
}

/// Pull-based tokenizer over a single source string.
///
/// Each call to [`Lexer::get_next_token`] scans just far enough to produce
/// one token. The lexer cannot be rewound.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.to_string(),
            pos: 0,
            file: file_name,
            finished: false,
        }
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the source is exhausted every call returns an `EOF` token.
    /// An unrecognised character comes back as a one-character `Unknown`
    /// token; lexing may continue after it.
    pub fn get_next_token(&mut self) -> Token {
        while !self.at_eof() {
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, found.end()))
            });

            match matched {
                Some((handler, len)) => {
                    if let Some(token) = handler(self, len) {
                        return token;
                    }
                }
                None => return self.unknown_token(),
            }
        }

        MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span_of(0))
    }

    fn unknown_token(&mut self) -> Token {
        let len = self.remainder().chars().next().map_or(1, char::len_utf8);
        let value = self.remainder()[..len].to_string();
        let token = MK_TOKEN!(TokenKind::Unknown, value, self.span_of(len));

        self.advance_n(len);
        token
    }
}

/// Yields tokens up to and including the first `EOF` or `Unknown`, then stops.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.get_next_token();
        if token.is_terminator() {
            self.finished = true;
        }

        Some(token)
    }
}

fn integer_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let value = lexer.remainder()[..len].to_string();
    let token = MK_TOKEN!(TokenKind::Integer, value, lexer.span_of(len));

    lexer.advance_n(len);
    Some(token)
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    lexer.advance_n(len);
    None
}

/// Collects the terminated token stream of `source`.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
