//! Candidate filename composition.

/// Separator placed between prefix, name, suffix and extension.
const SEPARATOR: char = '.';

/// Expand base names into the ordered list of candidate filenames.
///
/// Each name becomes `prefix.name.suffix`, with empty parts left out, and is
/// then repeated once per non-empty extension. Output keeps the order of
/// `names` first and `extensions` second.
///
/// ```rust
/// use rosetil::resolve_filenames;
///
/// let names = vec!["pkg".to_string()];
/// let extensions = vec!["json".to_string(), ".yaml".to_string()];
/// assert_eq!(
///     resolve_filenames(&names, "my", "config", &extensions),
///     vec!["my.pkg.config.json", "my.pkg.config.yaml"],
/// );
/// ```
pub fn resolve_filenames(
    names: &[String],
    prefix: &str,
    suffix: &str,
    extensions: &[String],
) -> Vec<String> {
    let extensions: Vec<&str> = extensions
        .iter()
        .map(String::as_str)
        .filter(|extension| !extension.is_empty())
        .collect();

    let mut filenames = Vec::with_capacity(names.len() * extensions.len().max(1));

    for name in names {
        let mut base = String::new();
        if !prefix.is_empty() {
            base.push_str(prefix);
            base.push(SEPARATOR);
        }
        base.push_str(name);
        if !suffix.is_empty() {
            base.push(SEPARATOR);
            base.push_str(suffix);
        }

        if extensions.is_empty() {
            filenames.push(base);
            continue;
        }

        for extension in &extensions {
            if extension.starts_with(SEPARATOR) {
                filenames.push(format!("{base}{extension}"));
            } else {
                filenames.push(format!("{base}{SEPARATOR}{extension}"));
            }
        }
    }

    filenames
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_plain_name() {
        let result = resolve_filenames(&strings(&["package.json"]), "", "", &[]);
        assert_eq!(result, vec!["package.json"]);
    }

    #[test]
    fn test_prefix_suffix_extensions() {
        let result = resolve_filenames(
            &strings(&["pkg"]),
            "my",
            "config",
            &strings(&["json", ".yaml"]),
        );
        assert_eq!(result, vec!["my.pkg.config.json", "my.pkg.config.yaml"]);
    }

    #[test]
    fn test_names_then_extensions_order() {
        let result = resolve_filenames(
            &strings(&["a", "b"]),
            "",
            "",
            &strings(&["js", "ts"]),
        );
        assert_eq!(result, vec!["a.js", "a.ts", "b.js", "b.ts"]);
    }

    #[test]
    fn test_empty_extensions_are_ignored() {
        let result = resolve_filenames(&strings(&["a"]), "", "", &strings(&["", ""]));
        assert_eq!(result, vec!["a"]);

        let result = resolve_filenames(&strings(&["a"]), "", "", &strings(&["", "rs"]));
        assert_eq!(result, vec!["a.rs"]);
    }

    #[test]
    fn test_empty_name_still_yields_candidate() {
        let result = resolve_filenames(&strings(&[""]), "", "", &[]);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_no_names() {
        assert!(resolve_filenames(&[], "p", "s", &strings(&["x"])).is_empty());
    }
}
