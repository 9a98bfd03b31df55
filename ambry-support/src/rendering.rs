//! Text rendering utilities for human-friendly error messages.
//!
//! Helpers to format dependency chains and suggestion lists in error
//! output.

/// Renders a dependency chain as a readable string.
///
/// # Examples
/// ```
/// use ambry_support::rendering::render_chain;
///
/// let chain = vec!["UserService", "Database", "UserService"];
/// assert_eq!(render_chain(&chain), "UserService → Database → UserService");
/// ```
pub fn render_chain(chain: &[impl AsRef<str>]) -> String {
    chain
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Renders a list of items as indented bullet lines.
///
/// ```text
///     - ServiceOne
///     - ServiceTwo
/// ```
pub fn render_bullets(items: &[impl AsRef<str>]) -> String {
    items
        .iter()
        .map(|s| format!("    - {}", s.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_joins_with_arrows() {
        assert_eq!(render_chain(&["A", "B", "C"]), "A → B → C");
    }

    #[test]
    fn chain_single_entry() {
        assert_eq!(render_chain(&["A"]), "A");
    }

    #[test]
    fn chain_empty() {
        let empty: Vec<&str> = vec![];
        assert_eq!(render_chain(&empty), "");
    }

    #[test]
    fn bullets_indent_each_item() {
        let rendered = render_bullets(&["ServiceOne", "ServiceTwo"]);
        assert_eq!(rendered, "    - ServiceOne\n    - ServiceTwo");
    }

    #[test]
    fn bullets_empty() {
        let empty: Vec<&str> = vec![];
        assert_eq!(render_bullets(&empty), "");
    }
}
