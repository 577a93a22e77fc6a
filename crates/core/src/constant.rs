/// Number of letters aliases are drawn from (`a..=z`).
pub const ALIAS_ALPHABET_WIDTH: usize = 26;

/// Prefix the language reserves for built-in variables and functions.
pub const RESERVED_PREFIX: &str = "gl_";

/// Storage qualifiers that make a global declaration visible to the host program.
pub const INTERFACE_QUALIFIERS: &[&str] = &["uniform", "in", "out", "attribute", "varying", "buffer"];

/// Qualifiers that may open a named block (`uniform Lights { ... }`).
pub const BLOCK_QUALIFIERS: &[&str] = &["uniform", "buffer", "in", "out"];
