use crate::logger;
use crate::models::Question;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why no usable question set could be produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("question file not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("question file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question file must contain a JSON array")]
    NotAList,
    #[error("question file contains no questions")]
    Empty,
}

impl LoadError {
    pub fn title(&self) -> &'static str {
        match self {
            LoadError::Missing { .. } => "Missing file",
            _ => "No questions",
        }
    }

    pub fn user_message(&self, file_name: &str) -> String {
        match self {
            LoadError::Missing { .. } => {
                format!("{} not found in the application folder.", file_name)
            }
            _ => format!("{} is empty or invalid.", file_name),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawQuestion {
    #[serde(default)]
    question: Option<Value>,
    #[serde(default)]
    options: Option<Value>,
    #[serde(default)]
    answer: Option<Value>,
}

/// Directories searched for the question file, most preferred first: the
/// executable's own folder, then the working directory.
pub fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        dirs.push(dir.to_path_buf());
    }
    if let Ok(cwd) = std::env::current_dir()
        && !dirs.contains(&cwd)
    {
        dirs.push(cwd);
    }
    dirs
}

pub fn locate_questions_file(file_name: &str, dirs: &[PathBuf]) -> Result<PathBuf, LoadError> {
    dirs.iter()
        .map(|dir| dir.join(file_name))
        .find(|path| path.is_file())
        .ok_or_else(|| LoadError::Missing {
            path: dirs
                .first()
                .map(|dir| dir.join(file_name))
                .unwrap_or_else(|| PathBuf::from(file_name)),
        })
}

pub fn load_questions(path: &Path) -> Result<Vec<Question>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_questions(&content)?;
    logger::log(&format!(
        "Loaded {} questions from {}",
        questions.len(),
        path.display()
    ));
    Ok(questions)
}

pub fn parse_questions(content: &str) -> Result<Vec<Question>, LoadError> {
    let Value::Array(items) = serde_json::from_str::<Value>(content)? else {
        return Err(LoadError::NotAList);
    };
    if items.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(items.into_iter().map(question_from_value).collect())
}

fn question_from_value(value: Value) -> Question {
    let raw = serde_json::from_value::<RawQuestion>(value).unwrap_or_default();

    let text = raw.question.map(value_to_text).unwrap_or_default();
    let options = match raw.options {
        Some(Value::Array(items)) => items.into_iter().map(value_to_text).collect(),
        _ => Vec::new(),
    };
    let correct_answer = match raw.answer {
        None => Some(0),
        Some(answer) => answer_index(&answer),
    };

    Question {
        text,
        options,
        correct_answer,
    }
}

/// Whole non-negative numbers (including `1.0`) index an option.
fn answer_index(answer: &Value) -> Option<usize> {
    if let Some(n) = answer.as_u64() {
        return usize::try_from(n).ok();
    }
    answer
        .as_f64()
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= usize::MAX as f64)
        .map(|f| f as usize)
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_well_formed_list() {
        let content = r#"[
            {"question": "Q1", "options": ["A", "B", "C", "D"], "answer": 1},
            {"question": "Q2", "options": ["E", "F"], "answer": 0}
        ]"#;
        let questions = parse_questions(content).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0], Question::new("Q1", &["A", "B", "C", "D"], 1));
        assert_eq!(questions[1].options, vec!["E", "F"]);
        assert_eq!(questions[1].correct_answer, Some(0));
    }

    #[test]
    fn test_parse_object_is_not_a_list() {
        let result = parse_questions(r#"{"question": "Q1"}"#);
        assert!(matches!(result, Err(LoadError::NotAList)));
    }

    #[test]
    fn test_parse_bare_string_is_not_a_list() {
        let result = parse_questions(r#""just a string""#);
        assert!(matches!(result, Err(LoadError::NotAList)));
    }

    #[test]
    fn test_parse_garbage_is_parse_error() {
        let result = parse_questions("[{ not json");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(matches!(parse_questions("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_missing_fields_are_tolerated() {
        let questions = parse_questions(r#"[{"question": "Only text"}]"#).unwrap();
        assert_eq!(questions[0].text, "Only text");
        assert!(questions[0].options.is_empty());
        assert_eq!(questions[0].option_label(0), "");
        // Missing answer defaults to the first slot.
        assert_eq!(questions[0].correct_answer, Some(0));
    }

    #[test]
    fn test_unusable_answers_never_match() {
        let content = r#"[
            {"question": "neg", "options": ["A"], "answer": -1},
            {"question": "str", "options": ["A"], "answer": "0"},
            {"question": "float", "options": ["A"], "answer": 0.5}
        ]"#;
        let questions = parse_questions(content).unwrap();
        assert!(questions.iter().all(|q| q.correct_answer.is_none()));
    }

    #[test]
    fn test_whole_float_answer_is_an_index() {
        let content = r#"[
            {"question": "one", "options": ["A", "B"], "answer": 1.0},
            {"question": "zero", "options": ["A", "B"], "answer": -0.0},
            {"question": "half", "options": ["A", "B"], "answer": 1.5}
        ]"#;
        let questions = parse_questions(content).unwrap();
        assert_eq!(questions[0].correct_answer, Some(1));
        assert_eq!(questions[1].correct_answer, Some(0));
        assert_eq!(questions[2].correct_answer, None);
    }

    #[test]
    fn test_out_of_range_answer_is_kept() {
        let questions =
            parse_questions(r#"[{"question": "Q", "options": ["A", "B"], "answer": 7}]"#).unwrap();
        assert_eq!(questions[0].correct_answer, Some(7));
    }

    #[test]
    fn test_non_object_items_become_blank_questions() {
        let questions = parse_questions(r#"[42, "text", null]"#).unwrap();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.text.is_empty() && q.options.is_empty()));
    }

    #[test]
    fn test_non_string_values_render_as_json() {
        let questions =
            parse_questions(r#"[{"question": 12, "options": [1, true, "x"], "answer": 2}]"#)
                .unwrap();
        assert_eq!(questions[0].text, "12");
        assert_eq!(questions[0].options, vec!["1", "true", "x"]);
    }

    #[test]
    fn test_load_questions_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("questions.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"question":"Q1","options":["A","B","C","D"],"answer":1}}]"#
        )
        .unwrap();

        let questions = load_questions(&path).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Q1");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("questions.json");
        let result = load_questions(&path);
        assert!(matches!(result, Err(LoadError::Missing { .. })));
    }

    #[test]
    fn test_locate_prefers_first_directory() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("questions.json"), "[]").unwrap();
        fs::write(second.path().join("questions.json"), "[]").unwrap();

        let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let found = locate_questions_file("questions.json", &dirs).unwrap();
        assert_eq!(found, first.path().join("questions.json"));
    }

    #[test]
    fn test_locate_falls_back_to_later_directory() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("questions.json"), "[]").unwrap();

        let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let found = locate_questions_file("questions.json", &dirs).unwrap();
        assert_eq!(found, second.path().join("questions.json"));
    }

    #[test]
    fn test_locate_missing_reports_first_directory() {
        let first = tempfile::tempdir().unwrap();
        let dirs = vec![first.path().to_path_buf()];
        match locate_questions_file("questions.json", &dirs) {
            Err(LoadError::Missing { path }) => {
                assert_eq!(path, first.path().join("questions.json"))
            }
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[test]
    fn test_user_messages() {
        let missing = LoadError::Missing {
            path: PathBuf::from("questions.json"),
        };
        assert_eq!(missing.title(), "Missing file");
        assert_eq!(
            missing.user_message("questions.json"),
            "questions.json not found in the application folder."
        );
        assert_eq!(LoadError::NotAList.title(), "No questions");
        assert_eq!(
            LoadError::Empty.user_message("questions.json"),
            "questions.json is empty or invalid."
        );
    }
}
