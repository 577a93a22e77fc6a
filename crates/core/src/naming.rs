/// `uTime`, `vTexCoord`: a single lowercase letter directly followed by an
/// uppercase one. Shaders conventionally use this shape for uniforms and
/// varyings the host looks up by name.
pub fn is_prefixed_camel(ident: &str) -> bool {
    let mut chars = ident.chars();

    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second)) if first.is_ascii_lowercase() && second.is_ascii_uppercase()
    )
}

/// `PI`, `NUM_LIGHTS`, `MAX2`: no lowercase letters at all, treated as a
/// macro-like constant.
pub fn is_constant_like(ident: &str) -> bool {
    ident.chars().any(|c| c.is_ascii_uppercase()) && !ident.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_camel() {
        assert!(is_prefixed_camel("uTime"));
        assert!(is_prefixed_camel("vTexCoord"));
        assert!(!is_prefixed_camel("myVar"));
        assert!(!is_prefixed_camel("u"));
        assert!(!is_prefixed_camel("Time"));
        assert!(!is_prefixed_camel("_uTime"));
    }

    #[test]
    fn constant_like() {
        assert!(is_constant_like("PI"));
        assert!(is_constant_like("NUM_LIGHTS"));
        assert!(is_constant_like("MAX2"));
        assert!(!is_constant_like("Time"));
        assert!(!is_constant_like("_"));
        assert!(!is_constant_like("x1"));
    }
}
