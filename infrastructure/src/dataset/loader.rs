//! Loader for the question and document files
//!
//! Two inputs: `docs.json`, an array of topics each carrying its
//! evidence documents, and `questions.jsonl`, one question object per
//! line. Questions join their topic's documents by `topic_id`; a
//! malformed line is skipped with a warning rather than failing the
//! whole load.

use aer_domain::AerItem;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode JSON from {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct TopicDocs {
    topic_id: i64,
    docs: Vec<DocEntry>,
}

#[derive(Deserialize)]
struct DocEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    content: String,
}

#[derive(Deserialize)]
struct QuestionLine {
    topic_id: i64,
    target_event: String,
    uuid: String,
    #[serde(rename = "option_A")]
    option_a: String,
    #[serde(rename = "option_B")]
    option_b: String,
    #[serde(rename = "option_C")]
    option_c: String,
    #[serde(rename = "option_D")]
    option_d: String,
    golden_answer: String,
}

/// Loads questions joined with their topic documents
pub struct DatasetLoader {
    docs_path: PathBuf,
    questions_path: PathBuf,
}

impl DatasetLoader {
    pub fn new(docs_path: impl Into<PathBuf>, questions_path: impl Into<PathBuf>) -> Self {
        Self {
            docs_path: docs_path.into(),
            questions_path: questions_path.into(),
        }
    }

    /// Load the full question list.
    ///
    /// Questions whose topic has no document entry get empty document
    /// lists; they still load.
    pub fn load(&self) -> Result<Vec<AerItem>, DatasetError> {
        let topics = self.load_topics()?;
        self.load_questions(&topics)
    }

    fn load_topics(&self) -> Result<HashMap<i64, (Vec<String>, Vec<String>)>, DatasetError> {
        let raw = fs::read_to_string(&self.docs_path).map_err(|source| DatasetError::Io {
            path: self.docs_path.clone(),
            source,
        })?;
        let topics: Vec<TopicDocs> =
            serde_json::from_str(&raw).map_err(|source| DatasetError::Json {
                path: self.docs_path.clone(),
                source,
            })?;

        Ok(topics
            .into_iter()
            .map(|topic| {
                let contents = topic.docs.iter().map(|d| d.content.clone()).collect();
                let title_snippets = topic
                    .docs
                    .iter()
                    .map(|d| format!("{} {}", d.title, d.snippet))
                    .collect();
                (topic.topic_id, (contents, title_snippets))
            })
            .collect())
    }

    fn load_questions(
        &self,
        topics: &HashMap<i64, (Vec<String>, Vec<String>)>,
    ) -> Result<Vec<AerItem>, DatasetError> {
        let file = fs::File::open(&self.questions_path).map_err(|source| DatasetError::Io {
            path: self.questions_path.clone(),
            source,
        })?;

        let mut items = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| DatasetError::Io {
                path: self.questions_path.clone(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let question: QuestionLine = match serde_json::from_str(&line) {
                Ok(q) => q,
                Err(e) => {
                    warn!(
                        "Skipping malformed question line {} in {}: {}",
                        line_no + 1,
                        self.questions_path.display(),
                        e
                    );
                    continue;
                }
            };

            let (documents, title_snippets) = topics
                .get(&question.topic_id)
                .cloned()
                .unwrap_or_default();

            items.push(AerItem {
                id: question.topic_id,
                event: question.target_event,
                event_uuid: question.uuid,
                title_snippets,
                documents,
                options: vec![
                    question.option_a,
                    question.option_b,
                    question.option_c,
                    question.option_d,
                ],
                answer: question.golden_answer,
            });
        }

        Ok(items)
    }
}

/// Convenience for tests and callers holding paths
pub fn load_dataset(
    docs_path: impl AsRef<Path>,
    questions_path: impl AsRef<Path>,
) -> Result<Vec<AerItem>, DatasetError> {
    DatasetLoader::new(
        docs_path.as_ref().to_path_buf(),
        questions_path.as_ref().to_path_buf(),
    )
    .load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOCS: &str = r#"[
        {"topic_id": 10, "docs": [
            {"title": "T1", "snippet": "S1", "content": "first document"},
            {"title": "T2", "snippet": "S2", "content": "second document"}
        ]}
    ]"#;

    fn question_line(topic_id: i64, uuid: &str) -> String {
        format!(
            r#"{{"topic_id": {}, "target_event": "the event", "uuid": "{}", "option_A": "a", "option_B": "b", "option_C": "c", "option_D": "d", "golden_answer": "A,C"}}"#,
            topic_id, uuid
        )
    }

    fn write_files(docs: &str, questions: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let docs_path = dir.path().join("docs.json");
        let questions_path = dir.path().join("questions.jsonl");
        fs::write(&docs_path, docs).unwrap();
        let mut f = fs::File::create(&questions_path).unwrap();
        writeln!(f, "{}", questions).unwrap();
        (dir, docs_path, questions_path)
    }

    #[test]
    fn test_load_joins_documents() {
        let (_dir, docs, questions) = write_files(DOCS, &question_line(10, "uuid-a"));
        let items = load_dataset(&docs, &questions).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].event_uuid, "uuid-a");
        assert_eq!(items[0].documents, vec!["first document", "second document"]);
        assert_eq!(items[0].title_snippets[0], "T1 S1");
        assert_eq!(items[0].golden_answer().to_string(), "A, C");
    }

    #[test]
    fn test_unknown_topic_gets_empty_documents() {
        let (_dir, docs, questions) = write_files(DOCS, &question_line(99, "uuid-b"));
        let items = load_dataset(&docs, &questions).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].documents.is_empty());
    }

    #[test]
    fn test_malformed_line_skipped() {
        let questions = format!("not json at all\n{}", question_line(10, "uuid-c"));
        let (_dir, docs, questions) = write_files(DOCS, &questions);
        let items = load_dataset(&docs, &questions).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].event_uuid, "uuid-c");
    }

    #[test]
    fn test_missing_docs_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dataset(dir.path().join("missing.json"), dir.path().join("q.jsonl"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
