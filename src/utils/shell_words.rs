//! Split a session line into arguments.
//!
//! Whitespace separates words; double or single quotes group them
//! (`class add "Physics 101"`), and a backslash escapes the next character
//! outside single quotes.

use crate::errors::{AppError, AppResult};

pub fn split(line: &str) -> AppResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(AppError::InvalidCommand(format!("unterminated quote in: {line}")));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split("  mark 1001   present ").unwrap(), ["mark", "1001", "present"]);
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split(r#"class add "Physics 101""#).unwrap(),
            ["class", "add", "Physics 101"]
        );
        assert_eq!(split("use 'History 202'").unwrap(), ["use", "History 202"]);
        assert_eq!(split(r#"student add 7 """#).unwrap(), ["student", "add", "7", ""]);
    }

    #[test]
    fn backslash_escapes() {
        assert_eq!(split(r"import my\ roster.csv").unwrap(), ["import", "my roster.csv"]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(split(r#"class add "Physics"#).is_err());
    }
}
