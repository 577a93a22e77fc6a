#![deny(clippy::all)]

mod collector;
mod filter;
mod lexer;
mod replacer;
mod stripper;
mod transformer;

pub use collector::{is_rename_site, IdentCollector, ProtectedNames};
pub use filter::{
    IdentFilterPlugin, IdentFilterPluginAdapter, IdentItem, NamingConventionFilter,
    PreserveNamesFilter, ProtectedNamesFilter,
};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use replacer::IdentReplacer;
pub use stripper::{
    collapse_punctuation_space, compact, compact_segments, join_segments, strip_comments,
    trim_and_drop_blank, LineKind, Segment, ESCAPED_NEWLINE, TIGHT_PUNCTUATION,
};
pub use transformer::*;
