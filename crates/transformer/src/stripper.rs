//! Comment and whitespace elision that keeps preprocessor lines intact.

use itertools::Itertools;

use crate::lexer::{tokenize, Token, TokenKind};

/// Two characters, backslash and `n`: the output is meant to be pasted into a
/// single-line string literal.
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Characters whose surrounding whitespace is dropped in code segments.
pub const TIGHT_PUNCTUATION: &[char] = &[';', ',', '+', '-', '*', '/', '(', ')', '{', '}', '='];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Directive,
    Code,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        if line.starts_with('#') {
            LineKind::Directive
        } else {
            LineKind::Code
        }
    }
}

/// One line of compacted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: LineKind,
    pub text: String,
}

/// Removes block comments (each becomes one space), then cuts every line at
/// its first `//`. Purely lexical: markers inside string-like text are not
/// special.
pub fn strip_comments(source: &str) -> String {
    let mut without_blocks = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(open) = rest.find("/*") {
        let Some(close) = rest[open + 2..].find("*/") else {
            break;
        };

        without_blocks.push_str(&rest[..open]);
        without_blocks.push(' ');
        rest = &rest[open + 2 + close + 2..];
    }
    without_blocks.push_str(rest);

    without_blocks
        .split('\n')
        .map(|line| line.split_once("//").map_or(line, |(code, _)| code))
        .join("\n")
}

pub fn trim_and_drop_blank<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Vec<&'a str> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Merges runs of code lines into one segment each; directive lines stay on
/// their own.
pub fn compact_segments<S: AsRef<str>>(lines: &[S]) -> Vec<Segment> {
    let mut output = Vec::new();
    let mut buffer = String::new();

    for line in lines {
        let line = line.as_ref();

        match LineKind::classify(line) {
            LineKind::Directive => {
                if !buffer.is_empty() {
                    output.push(Segment {
                        kind: LineKind::Code,
                        text: std::mem::take(&mut buffer),
                    });
                }

                output.push(Segment {
                    kind: LineKind::Directive,
                    text: line.to_string(),
                });
            }
            LineKind::Code => {
                buffer.push_str(line);
                buffer.push(' ');
            }
        }
    }

    if !buffer.is_empty() {
        output.push(Segment {
            kind: LineKind::Code,
            text: buffer,
        });
    }

    output
}

pub fn join_segments(segments: &[Segment], separator: &str) -> String {
    segments.iter().map(|segment| segment.text.as_str()).join(separator).trim().to_string()
}

pub fn compact<S: AsRef<str>>(lines: &[S]) -> String {
    join_segments(&compact_segments(lines), ESCAPED_NEWLINE)
}

fn is_tight(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Punctuation
        && token.text.chars().next().is_some_and(|c| TIGHT_PUNCTUATION.contains(&c))
}

// Dropping the blank between these would form a different token.
fn would_fuse(left: &Token<'_>, right: &Token<'_>) -> bool {
    matches!(
        (left.text.chars().last(), right.text.chars().next()),
        (Some('+'), Some('+')) | (Some('-'), Some('-')) | (Some('/'), Some('/' | '*'))
    )
}

/// Drops whitespace next to `; , + - * / ( ) { } =` and squeezes the other
/// whitespace runs to a single space.
pub fn collapse_punctuation_space(source: &str) -> String {
    let tokens = tokenize(source);
    let mut output = String::with_capacity(source.len());

    for (index, token) in tokens.iter().enumerate() {
        if !matches!(token.kind, TokenKind::Whitespace | TokenKind::Newline) {
            output.push_str(token.text);
            continue;
        }

        let (Some(left), Some(right)) = (
            index.checked_sub(1).map(|i| &tokens[i]),
            tokens.get(index + 1),
        ) else {
            continue;
        };

        if (is_tight(left) || is_tight(right)) && !would_fuse(left, right) {
            continue;
        }

        output.push(' ');
    }

    output
}
