use rustc_hash::FxHashSet;
use tracing::trace;

use crate::constant::ALIAS_ALPHABET_WIDTH;

/// Generates aliases shortest-first: `a..z`, then `aa..zz`, then `aaa..`,
/// skipping every reserved name.
#[derive(Debug, Default)]
pub struct TokenAllocator {
    pos: usize,
    reserved: FxHashSet<String>,
}

impl TokenAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extends<I: IntoIterator<Item = String>>(&mut self, set: I) {
        self.reserved.extend(set);
    }

    // bijective base-26 rendering of `pos`
    fn ident(&self) -> String {
        let mut n = self.pos + 1;
        let mut r = Vec::new();

        while n > 0 {
            n -= 1;
            r.push(b'a' + (n % ALIAS_ALPHABET_WIDTH) as u8);
            n /= ALIAS_ALPHABET_WIDTH;
        }

        r.iter().rev().map(|&ch| ch as char).collect()
    }

    pub fn alloc(&mut self) -> String {
        loop {
            let s = self.ident();
            self.pos += 1;

            if self.reserved.contains(&s) {
                trace!(alias = %s, "skip reserved alias");
                continue;
            }

            self.reserved.insert(s.clone());
            return s;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_alloc() {
        let mut token = TokenAllocator::new();

        let v = (0..800).map(|_| token.alloc()).collect::<Vec<_>>();

        assert_eq!(v[0], "a");
        assert_eq!(v[25], "z");
        assert_eq!(v[26], "aa");
        assert_eq!(v[27], "ab");
        assert_eq!(v[52], "ba");
        assert_eq!(v[199], "gr");
        assert_eq!(v[701], "zz");
        assert_eq!(v[702], "aaa");
    }

    #[test]
    fn ident_alloc_with_reserved() {
        let mut token = TokenAllocator::new();

        token.extends(["b".to_string(), "do".to_string()]);

        let v = (0..200).map(|_| token.alloc()).collect::<Vec<_>>();

        assert_eq!(v[0], "a");
        assert_eq!(v[1], "c");
        assert!(!v.contains(&"do".to_string()));
        assert_eq!(v[199], "gt");
    }

    #[test]
    fn alloc_is_unique() {
        let mut token = TokenAllocator::new();
        token.extends(["a".to_string()]);

        let v = (0..1000).map(|_| token.alloc()).collect::<FxHashSet<_>>();

        assert_eq!(v.len(), 1000);
        assert!(!v.contains("a"));
    }
}
