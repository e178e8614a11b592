//! Command Template
//!
//! Substitutes the size placeholder into the user-supplied benchmark command.

/// Placeholder token substituted with the current input size.
pub const PLACEHOLDER: &str = "{N}";

/// Placeholder in the common `--n=<size>` calling convention.
pub const PLACEHOLDER_FLAG: &str = "--n={N}";

/// Instantiate the command template for one input size.
///
/// Every occurrence of `--n={N}` and `{N}` in each token is replaced by the
/// decimal form of `n`. Pure function of `(tokens, n)`; the template itself
/// is never mutated.
pub fn instantiate(tokens: &[String], n: u64) -> Vec<String> {
    let size = n.to_string();
    let flag = format!("--n={}", size);
    tokens
        .iter()
        .map(|t| t.replace(PLACEHOLDER_FLAG, &flag).replace(PLACEHOLDER, &size))
        .collect()
}

/// Whether the template carries the placeholder as an argument of its own,
/// in either the bare `{N}` or the `--n={N}` form.
pub fn has_placeholder(tokens: &[String]) -> bool {
    tokens
        .iter()
        .any(|t| t == PLACEHOLDER || t == PLACEHOLDER_FLAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_instantiate_replaces_every_occurrence() {
        let template = tokens(&["./bench", "{N}", "--size", "{N}", "--mode", "fast"]);
        let argv = instantiate(&template, 42);
        assert_eq!(argv, tokens(&["./bench", "42", "--size", "42", "--mode", "fast"]));
    }

    #[test]
    fn test_instantiate_flag_form() {
        let template = tokens(&["./bench", "--n={N}"]);
        let argv = instantiate(&template, 1024);
        assert_eq!(argv, tokens(&["./bench", "--n=1024"]));
    }

    #[test]
    fn test_instantiate_embedded_placeholder() {
        let template = tokens(&["./bench", "--input=data-{N}.bin"]);
        let argv = instantiate(&template, 7);
        assert_eq!(argv, tokens(&["./bench", "--input=data-7.bin"]));
    }

    #[test]
    fn test_instantiate_leaves_other_tokens_alone() {
        let template = tokens(&["./bench", "{N}", "--threads", "4"]);
        let argv = instantiate(&template, 42);
        assert_eq!(argv[2], "--threads");
        assert_eq!(argv[3], "4");
    }

    #[test]
    fn test_has_placeholder_bare_and_flag() {
        assert!(has_placeholder(&tokens(&["./bench", "{N}"])));
        assert!(has_placeholder(&tokens(&["./bench", "--n={N}"])));
    }

    #[test]
    fn test_has_placeholder_requires_exact_token() {
        // Embedded forms do not count as the placeholder argument.
        assert!(!has_placeholder(&tokens(&["./bench", "--size={N}"])));
        assert!(!has_placeholder(&tokens(&["./bench", "--n", "100"])));
        assert!(!has_placeholder(&[]));
    }
}
