use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::trace;

use shmin_core::TokenAllocator;

use crate::collector::is_rename_site;
use crate::lexer::Token;

#[derive(Debug, Default)]
pub struct IdentReplacer {
    pub ident_map: FxHashMap<String, String>,
    pub allocator: TokenAllocator,
}

impl IdentReplacer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Names no alias may take.
    pub fn extend_used_ident<I: IntoIterator<Item = String>>(&mut self, set: I) {
        self.allocator.extends(set);
    }

    pub fn alloc_ident(&mut self, ident: &str) -> String {
        if let Some(v) = self.ident_map.get(ident) {
            return v.to_string();
        }

        let s = self.allocator.alloc();
        trace!(original = ident, alias = %s, "alias assigned");

        self.ident_map.insert(ident.to_string(), s.clone());

        s
    }

    /// `(original, alias)` pairs ordered by original name.
    pub fn alias_table(&self) -> Vec<(String, String)> {
        self.ident_map
            .iter()
            .map(|(original, alias)| (original.clone(), alias.clone()))
            .sorted()
            .collect()
    }

    /// Rewrites every rename site of a mapped identifier in one pass.
    pub fn replace(&self, tokens: &[Token<'_>]) -> String {
        let mut output = String::with_capacity(tokens.last().map_or(0, |t| t.end()));

        for (index, token) in tokens.iter().enumerate() {
            match self.ident_map.get(token.text) {
                Some(alias) if is_rename_site(tokens, index) => output.push_str(alias),
                _ => output.push_str(token.text),
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn assigns_in_call_order() {
        let mut replacer = IdentReplacer::new();
        replacer.extend_used_ident(["a".to_string()]);

        assert_eq!(replacer.alloc_ident("alpha"), "b");
        assert_eq!(replacer.alloc_ident("beta"), "c");
        assert_eq!(replacer.alloc_ident("alpha"), "b");
        assert_eq!(
            replacer.alias_table(),
            vec![
                ("alpha".to_string(), "b".to_string()),
                ("beta".to_string(), "c".to_string())
            ]
        );
    }

    #[test]
    fn replaces_only_rename_sites() {
        let mut replacer = IdentReplacer::new();
        replacer.alloc_ident("color");

        let tokens = tokenize("vec4 color = s.color;\ncolor (x);\n#define color 1");

        assert_eq!(
            replacer.replace(&tokens),
            "vec4 a = s.color;\ncolor (x);\n#define color 1"
        );
    }

    #[test]
    fn single_pass_does_not_chain() {
        let mut replacer = IdentReplacer::new();
        replacer.ident_map.insert("x".to_string(), "y".to_string());
        replacer.ident_map.insert("y".to_string(), "z".to_string());

        let tokens = tokenize("x + y");

        assert_eq!(replacer.replace(&tokens), "y + z");
    }
}
