use regex::Regex;

/// Splits raw input into the lines the roster generator consumes.
///
/// With clause splitting on, every line is further cut on the literal
/// separators `" and "` and `"; "`. The cut is purely syntactic:
/// "Bob and Sam are both free" becomes two clauses.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    separator: Option<Regex>,
}

impl Preprocessor {
    /// Newline splitting only.
    pub fn lines_only() -> Self {
        Self { separator: None }
    }

    /// Newline splitting followed by clause splitting.
    pub fn with_clauses() -> Self {
        Self {
            separator: Some(Regex::new(" and |; ").expect("static separator pattern")),
        }
    }

    /// Trimmed, non-empty pieces in input order.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match &self.separator {
                Some(separator) => {
                    for part in separator.split(line) {
                        let part = part.trim();
                        if !part.is_empty() {
                            pieces.push(part.to_string());
                        }
                    }
                }
                None => pieces.push(line.trim().to_string()),
            }
        }

        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_only_drops_blank_lines() {
        let pieces =
            Preprocessor::lines_only().split("Bob is free\n\n  \n Sam and Erin are out \r\n");
        assert_eq!(pieces, vec!["Bob is free", "Sam and Erin are out"]);
    }

    #[test]
    fn splits_compound_sentences() {
        let pieces = Preprocessor::with_clauses().split(
            "Alice can only work Monday 9-5 as a cashier and Wednesday 1-9 on the floor.\n\
             Open early; close late",
        );
        assert_eq!(
            pieces,
            vec![
                "Alice can only work Monday 9-5 as a cashier",
                "Wednesday 1-9 on the floor.",
                "Open early",
                "close late",
            ]
        );
    }

    #[test]
    fn conjoined_names_are_split_too() {
        let pieces = Preprocessor::with_clauses().split("Bob and Sam are both free");
        assert_eq!(pieces, vec!["Bob", "Sam are both free"]);
    }

    #[test]
    fn separator_needs_surrounding_spaces() {
        let pieces = Preprocessor::with_clauses().split("Sandra handles stock;restock\nand more");
        assert_eq!(pieces, vec!["Sandra handles stock;restock", "and more"]);
    }
}
