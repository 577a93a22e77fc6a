use rustc_hash::{FxHashMap, FxHashSet};

use shmin_core::{is_keyword, BLOCK_QUALIFIERS, INTERFACE_QUALIFIERS};

use crate::lexer::{next_significant, prev_significant, significant, tokenize, Token, TokenKind};

/// Names that keep their spelling no matter what.
#[derive(Debug, Default)]
pub struct ProtectedNames {
    pub function_names: FxHashSet<String>,
    pub struct_names: FxHashSet<String>,
    pub struct_members: FxHashSet<String>,
    /// Every identifier mentioned on a preprocessor line.
    pub directive_names: FxHashSet<String>,
    /// Globals declared `uniform`, `in`, `out`, ... that the host binds by name.
    pub interface_names: FxHashSet<String>,
    pub layout_names: FxHashSet<String>,
}

impl ProtectedNames {
    pub fn contains(&self, ident: &str) -> bool {
        is_keyword(ident)
            || [
                &self.function_names,
                &self.struct_names,
                &self.struct_members,
                &self.directive_names,
                &self.interface_names,
                &self.layout_names,
            ]
            .iter()
            .any(|set| set.contains(ident))
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.function_names
            .iter()
            .chain(&self.struct_names)
            .chain(&self.struct_members)
            .chain(&self.directive_names)
            .chain(&self.interface_names)
            .chain(&self.layout_names)
    }
}

/// Whether the identifier at `index` may be rewritten: not a member access
/// (`.name`), not a directive-like `#name`, and not in call position
/// (`name (`).
pub fn is_rename_site(tokens: &[Token<'_>], index: usize) -> bool {
    if tokens[index].kind != TokenKind::Identifier {
        return false;
    }

    if prev_significant(tokens, index).is_some_and(|t| t.is_punct(".") || t.is_punct("#")) {
        return false;
    }

    !next_significant(tokens, index).is_some_and(|t| t.is_punct("("))
}

fn is_declarator_end(token: Option<&Token<'_>>) -> bool {
    token.is_some_and(|t| t.is_punct(";") || t.is_punct(",") || t.is_punct("["))
}

#[derive(Debug, Default)]
pub struct IdentCollector {
    pub protected: ProtectedNames,
    /// Number of rename sites per identifier.
    pub field: FxHashMap<String, usize>,
    /// Every identifier spelled outside a member access.
    pub used_ident: FxHashSet<String>,
    /// Identifiers spelled outside a member access at a position the
    /// rewrite leaves alone (`name (`, `#name`).
    pub fixed_ident: FxHashSet<String>,
}

impl IdentCollector {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn collect(&mut self, tokens: &[Token<'_>]) {
        let sig = significant(tokens);

        self.collect_directives(tokens);
        self.collect_functions(tokens, &sig);
        self.collect_blocks(tokens, &sig);
        self.collect_layouts(tokens, &sig);
        self.collect_interfaces(tokens, &sig);
        self.collect_sites(tokens);
    }

    fn collect_directives(&mut self, tokens: &[Token<'_>]) {
        for token in tokens.iter().filter(|t| t.kind == TokenKind::Directive) {
            self.protected.directive_names.extend(
                tokenize(&token.text[1..])
                    .into_iter()
                    .filter(|t| t.kind == TokenKind::Identifier)
                    .map(|t| t.text.to_string()),
            );
        }
    }

    // `<type> <name> (`
    fn collect_functions(&mut self, tokens: &[Token<'_>], sig: &[usize]) {
        for window in sig.windows(3) {
            let [ty, name, paren] = [&tokens[window[0]], &tokens[window[1]], &tokens[window[2]]];

            if ty.kind == TokenKind::Identifier
                && name.kind == TokenKind::Identifier
                && paren.is_punct("(")
            {
                self.protected.function_names.insert(name.text.to_string());
            }
        }
    }

    // `struct <name> { ... }` and `uniform <name> { ... }`
    fn collect_blocks(&mut self, tokens: &[Token<'_>], sig: &[usize]) {
        for i in 0..sig.len().saturating_sub(2) {
            let [keyword, name, brace] = [&tokens[sig[i]], &tokens[sig[i + 1]], &tokens[sig[i + 2]]];

            let opens_block = keyword.is_ident("struct")
                || (keyword.kind == TokenKind::Identifier && BLOCK_QUALIFIERS.contains(&keyword.text));

            if !opens_block || name.kind != TokenKind::Identifier || !brace.is_punct("{") {
                continue;
            }

            if keyword.is_ident("struct") {
                self.protected.struct_names.insert(name.text.to_string());
            } else {
                self.protected.interface_names.insert(name.text.to_string());
            }

            let mut depth = 1usize;
            for &index in &sig[i + 3..] {
                let token = &tokens[index];

                if token.is_punct("{") {
                    depth += 1;
                } else if token.is_punct("}") {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                } else if depth == 1
                    && token.kind == TokenKind::Identifier
                    && is_declarator_end(next_significant(tokens, index))
                {
                    self.protected.struct_members.insert(token.text.to_string());
                }
            }
        }
    }

    // every identifier inside `layout( ... )`
    fn collect_layouts(&mut self, tokens: &[Token<'_>], sig: &[usize]) {
        for i in 0..sig.len().saturating_sub(1) {
            if !tokens[sig[i]].is_ident("layout") || !tokens[sig[i + 1]].is_punct("(") {
                continue;
            }

            let mut depth = 0usize;
            for &index in &sig[i + 1..] {
                let token = &tokens[index];

                if token.is_punct("(") {
                    depth += 1;
                } else if token.is_punct(")") {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                } else if token.kind == TokenKind::Identifier {
                    self.protected.layout_names.insert(token.text.to_string());
                }
            }
        }
    }

    // global declarations carrying a storage qualifier
    fn collect_interfaces(&mut self, tokens: &[Token<'_>], sig: &[usize]) {
        let mut braces = 0usize;
        let mut parens = 0usize;
        let mut in_interface = false;

        for &index in sig {
            let token = &tokens[index];

            match token.text {
                "{" if token.kind == TokenKind::Punctuation => {
                    braces += 1;
                    in_interface = false;
                }
                "}" if token.kind == TokenKind::Punctuation => {
                    braces = braces.saturating_sub(1);
                    in_interface = false;
                }
                "(" if token.kind == TokenKind::Punctuation => parens += 1,
                ")" if token.kind == TokenKind::Punctuation => parens = parens.saturating_sub(1),
                ";" if token.kind == TokenKind::Punctuation && braces == 0 && parens == 0 => {
                    in_interface = false;
                }
                _ if token.kind == TokenKind::Identifier && braces == 0 && parens == 0 => {
                    if INTERFACE_QUALIFIERS.contains(&token.text) {
                        in_interface = true;
                    } else if in_interface {
                        let next = next_significant(tokens, index);
                        if is_declarator_end(next) || next.is_some_and(|t| t.is_punct("=")) {
                            self.protected.interface_names.insert(token.text.to_string());
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn collect_sites(&mut self, tokens: &[Token<'_>]) {
        for (index, token) in tokens.iter().enumerate() {
            if token.kind != TokenKind::Identifier {
                continue;
            }

            let member = prev_significant(tokens, index).is_some_and(|t| t.is_punct("."));
            if !member {
                self.used_ident.insert(token.text.to_string());
            }

            if is_rename_site(tokens, index) {
                *self.field.entry(token.text.to_string()).or_insert(0) += 1;
            } else if !member {
                self.fixed_ident.insert(token.text.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(source: &str) -> IdentCollector {
        let tokens = tokenize(source);
        let mut collector = IdentCollector::new();
        collector.collect(&tokens);
        collector
    }

    fn set(names: &[&str]) -> FxHashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn function_names() {
        let c = collect("vec3 shade(vec3 n) { return helper (n); }\nfloat x = max(a, b);");

        assert_eq!(c.protected.function_names, set(&["shade", "helper"]));
    }

    #[test]
    fn struct_names_and_members() {
        let c = collect("struct Light {\n vec3 position;\n float intensity, range;\n float w[4];\n};\nLight l;");

        assert_eq!(c.protected.struct_names, set(&["Light"]));
        assert_eq!(c.protected.struct_members, set(&["position", "intensity", "range", "w"]));
        assert!(c.field.contains_key("l"));
    }

    #[test]
    fn interface_declarations() {
        let c = collect(
            "uniform float Time;\nlayout(location = 0) in vec3 aPos;\nout vec4 color, extra[2];\nuniform Lights { vec3 dir; } lights;\nvoid f(in vec3 p) { float local; }",
        );

        assert_eq!(
            c.protected.interface_names,
            set(&["Time", "aPos", "color", "extra", "Lights"])
        );
        assert_eq!(c.protected.layout_names, set(&["location"]));
        assert!(c.protected.struct_members.contains("dir"));
        assert!(!c.protected.contains("p"));
        assert!(!c.protected.contains("lights"));
        assert!(!c.protected.contains("local"));
    }

    #[test]
    fn directive_names() {
        let c = collect("#version 330 core\n#define SCALE(x) (x * factor)\nfloat y;");

        assert_eq!(
            c.protected.directive_names,
            set(&["version", "core", "define", "SCALE", "x", "factor"])
        );
        assert!(!c.field.contains_key("core"));
    }

    #[test]
    fn rename_sites() {
        let tokens = tokenize("a.b + c (d) # e");
        let site = |name: &str| {
            let index = tokens.iter().position(|t| t.text == name).unwrap();
            is_rename_site(&tokens, index)
        };

        assert!(site("a"));
        assert!(!site("b"));
        assert!(!site("c"));
        assert!(site("d"));
        assert!(!site("e"));
    }

    #[test]
    fn counts_sites_and_used_names() {
        let c = collect("float v = v + s.v;\nfoo(v);\nw (v);\nfloat w;");

        assert_eq!(c.field["v"], 4);
        assert_eq!(c.field["w"], 1);
        assert!(c.used_ident.contains("foo"));
        assert!(!c.field.contains_key("foo"));
        assert_eq!(c.fixed_ident, set(&["foo", "w"]));
    }

    #[test]
    fn protected_includes_keywords() {
        let c = collect("");

        assert!(c.protected.contains("float"));
        assert!(c.protected.contains("gl_Position"));
        assert!(!c.protected.contains("myVar"));
    }
}
