/// Trunca uma string sem cortar um caractere UTF-8 no meio.
///
/// Usado para logar codes e tokens sem expor o valor completo.
///
/// # Exemplo
/// ```
/// use myob_items_middleware::utils::string_utils::truncate_safe;
///
/// assert_eq!(truncate_safe("açaí-token", 3), "aç");
/// ```
pub fn truncate_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }

    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

/// Mascara um segredo para log: primeiros `visible` bytes + `...`
pub fn mask_secret(s: &str, visible: usize) -> String {
    if s.is_empty() {
        return "<empty>".to_string();
    }
    format!("{}...", truncate_safe(s, visible))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_safe_respects_char_boundaries() {
        assert_eq!(truncate_safe("abc", 10), "abc");
        assert_eq!(truncate_safe("abcdef", 3), "abc");
        // "ç" ocupa 2 bytes
        assert_eq!(truncate_safe("aç", 2), "a");
        assert_eq!(truncate_safe("🌍", 2), "");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdefghijkl", 4), "abcd...");
        assert_eq!(mask_secret("", 4), "<empty>");
    }
}
