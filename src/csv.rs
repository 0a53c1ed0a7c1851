use crate::models::Question;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected question, at least two options and a correct index")]
    TooFewFields { line: usize },

    #[error("line {line}: correct index '{value}' is not a number")]
    BadIndex { line: usize, value: String },

    #[error("line {line}: {reason}")]
    InvalidQuestion { line: usize, reason: String },

    #[error("deck contains no questions")]
    Empty,
}

/// Loads a multiple-choice deck. Each non-blank line is
/// `question,option1,...,optionN,correct_index` with a 0-based index.
pub fn load_deck(path: &Path) -> Result<Vec<Question>, DeckError> {
    let content = fs::read_to_string(path)?;
    parse_deck(&content)
}

pub fn parse_deck(content: &str) -> Result<Vec<Question>, DeckError> {
    let mut questions = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        questions.push(parse_question_line(line, i + 1)?);
    }

    if questions.is_empty() {
        return Err(DeckError::Empty);
    }
    Ok(questions)
}

fn parse_question_line(line: &str, line_no: usize) -> Result<Question, DeckError> {
    let mut fields = parse_csv_fields(line);
    // question + 2 options + index
    if fields.len() < 4 {
        return Err(DeckError::TooFewFields { line: line_no });
    }

    let raw_index = fields.pop().unwrap_or_default();
    let correct_index = raw_index
        .trim()
        .parse::<usize>()
        .map_err(|_| DeckError::BadIndex {
            line: line_no,
            value: raw_index.clone(),
        })?;
    let text = fields.remove(0);
    let options = fields.iter().map(|f| f.trim().to_string()).collect();

    Question::new(text.trim(), options, correct_index).map_err(|reason| {
        DeckError::InvalidQuestion {
            line: line_no,
            reason,
        }
    })
}

/// Splits one CSV line into fields. Quoted fields may contain commas and
/// `""` stands for a literal quote.
pub fn parse_csv_fields(line: &str) -> Vec<String> {
    let mut chars = line.chars().peekable();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_simple() {
        let fields = parse_csv_fields("What is 2+2?,Three,Four,1");
        assert_eq!(fields, vec!["What is 2+2?", "Three", "Four", "1"]);
    }

    #[test]
    fn test_parse_csv_with_quotes() {
        let fields = parse_csv_fields("\"What is 2+2?\",\"Three\",\"Four\",1");
        assert_eq!(fields, vec!["What is 2+2?", "Three", "Four", "1"]);
    }

    #[test]
    fn test_parse_csv_with_commas_in_question() {
        let fields = parse_csv_fields("\"What is 2+2, 3+3?\",\"Four, Six\",Five,0");
        assert_eq!(fields[0], "What is 2+2, 3+3?");
        assert_eq!(fields[1], "Four, Six");
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_parse_csv_with_escaped_quotes() {
        let fields = parse_csv_fields("\"What is \"\"quoted\"\"?\",\"a \"\"b\"\"\",c,0");
        assert_eq!(fields[0], "What is \"quoted\"?");
        assert_eq!(fields[1], "a \"b\"");
    }

    #[test]
    fn test_parse_csv_empty_fields() {
        assert_eq!(parse_csv_fields(","), vec!["", ""]);
    }

    #[test]
    fn test_parse_deck_skips_blank_lines() {
        let content = "Q1,a,b,0\n\nQ2,a,b,c,2\n\n";
        let questions = parse_deck(content).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "Q1");
        assert_eq!(questions[1].options, vec!["a", "b", "c"]);
        assert_eq!(questions[1].correct_index, 2);
    }

    #[test]
    fn test_parse_deck_rejects_single_option() {
        let err = parse_deck("Q1,a,0").unwrap_err();
        assert!(matches!(err, DeckError::TooFewFields { line: 1 }));
    }

    #[test]
    fn test_parse_deck_rejects_bad_index() {
        let err = parse_deck("Q1,a,b,0\nQ2,a,b,x").unwrap_err();
        assert!(matches!(err, DeckError::BadIndex { line: 2, .. }));
    }

    #[test]
    fn test_parse_deck_rejects_out_of_range_index() {
        let err = parse_deck("Q1,a,b,2").unwrap_err();
        assert!(matches!(err, DeckError::InvalidQuestion { line: 1, .. }));
    }

    #[test]
    fn test_parse_deck_empty() {
        assert!(matches!(parse_deck("\n\n"), Err(DeckError::Empty)));
    }

    #[test]
    fn test_load_deck_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rust.csv");
        std::fs::write(&path, "\"Which keyword makes a binding mutable?\",let,mut,ref,1\n").unwrap();

        let questions = load_deck(&path).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_option(), "mut");
    }

    #[test]
    fn test_bundled_sample_deck_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("decks/rust.csv");
        let questions = load_deck(&path).unwrap();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.options.len() == 4));
    }

    #[test]
    fn test_load_deck_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_deck(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
    }
}
