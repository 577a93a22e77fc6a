//! A small lexer over shader source.
//!
//! It only knows enough of the language to classify the tokens the
//! minifier cares about; everything it does not recognise is emitted as a
//! single-character [`TokenKind::Punctuation`]. Concatenating the text of
//! all tokens gives back the input unchanged.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Number,
    Punctuation,
    /// A run of blanks, never containing `\n`.
    Whitespace,
    Newline,
    /// A whole preprocessor line, from `#` up to (not including) the newline.
    Directive,
    /// `/* ... */` or `// ...` up to (not including) the newline.
    CommentSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the token in the source.
    pub start: usize,
}

impl Token<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_trivia(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::CommentSpan
        )
    }

    pub fn is_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.text == punct
    }

    pub fn is_ident(&self, ident: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == ident
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    offset: usize,
    line_start: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            offset: 0,
            line_start: true,
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.offset + ahead).copied()
    }

    fn take_while<F: Fn(u8) -> bool>(&self, from: usize, f: F) -> usize {
        let mut end = from;
        while end < self.bytes.len() && f(self.bytes[end]) {
            end += 1;
        }
        end
    }

    fn line_end(&self, from: usize) -> usize {
        self.take_while(from, |b| b != b'\n')
    }

    fn number_end(&self) -> usize {
        let start = self.offset;
        let hex = matches!(&self.bytes[start..], [b'0', b'x' | b'X', ..]);
        let mut end = start;

        while end < self.bytes.len() {
            let b = self.bytes[end];
            let exponent_sign = !hex
                && matches!(b, b'+' | b'-')
                && end > start
                && matches!(self.bytes[end - 1], b'e' | b'E');

            if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || exponent_sign {
                end += 1;
            } else {
                break;
            }
        }

        end
    }

    fn scan_token(&self) -> (TokenKind, usize) {
        let start = self.offset;
        let b = self.bytes[start];

        match b {
            b'\n' => (TokenKind::Newline, start + 1),
            b' ' | b'\t' | b'\r' | 0x0b | 0x0c => (
                TokenKind::Whitespace,
                self.take_while(start, |b| matches!(b, b' ' | b'\t' | b'\r' | 0x0b | 0x0c)),
            ),
            b'#' if self.line_start => (TokenKind::Directive, self.line_end(start)),
            b'/' if self.peek(1) == Some(b'/') => (TokenKind::CommentSpan, self.line_end(start)),
            b'/' if self.peek(1) == Some(b'*') => {
                let end = self.source[start + 2..]
                    .find("*/")
                    .map_or(self.bytes.len(), |pos| start + 2 + pos + 2);
                (TokenKind::CommentSpan, end)
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => (
                TokenKind::Identifier,
                self.take_while(start, |b| b.is_ascii_alphanumeric() || b == b'_'),
            ),
            b'0'..=b'9' => (TokenKind::Number, self.number_end()),
            b'.' if self.peek(1).is_some_and(|b| b.is_ascii_digit()) => {
                (TokenKind::Number, self.number_end())
            }
            _ => {
                let width = self.source[start..].chars().next().map_or(1, char::len_utf8);
                (TokenKind::Punctuation, start + width)
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let (kind, end) = self.scan_token();
        let token = Token {
            kind,
            text: &self.source[self.offset..end],
            start: self.offset,
        };

        self.offset = end;
        self.line_start = match kind {
            TokenKind::Newline => true,
            TokenKind::Whitespace | TokenKind::CommentSpan => self.line_start,
            _ => false,
        };

        Some(token)
    }
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

/// Indices of the non-trivia tokens, in order.
pub fn significant(tokens: &[Token<'_>]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| !token.is_trivia())
        .map(|(index, _)| index)
        .collect()
}

/// The closest non-trivia token before `index`.
pub fn prev_significant<'t, 'a>(tokens: &'t [Token<'a>], index: usize) -> Option<&'t Token<'a>> {
    tokens[..index].iter().rev().find(|token| !token.is_trivia())
}

/// The closest non-trivia token after `index`.
pub fn next_significant<'t, 'a>(tokens: &'t [Token<'a>], index: usize) -> Option<&'t Token<'a>> {
    tokens.get(index + 1..)?.iter().find(|token| !token.is_trivia())
}
