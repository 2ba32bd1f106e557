/*!
 * Roster Parsing
 * Line-oriented student roster shared by the pipeline workers
 */

use crate::core::limits::MAX_EXAM_SCORE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Roster operation result
pub type RosterResult<T> = Result<T, RosterError>;

/// Roster errors
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed roster line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// One roster record: student identifier, exam variant, current score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Student {
    pub id: String,
    pub variant: char,
    pub score: u32,
}

impl Student {
    /// Minimum score on this exam required to pass the course.
    pub fn required_score(&self) -> u32 {
        2 * MAX_EXAM_SCORE - self.score
    }
}

/// Student roster loaded from the whitespace-delimited roster file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn load(path: impl AsRef<Path>) -> RosterResult<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Parse roster text: one `id variant score` record per line, blank
    /// lines skipped. Scores above the exam maximum are rejected.
    pub fn parse(input: &str) -> RosterResult<Self> {
        let mut students = Vec::new();
        for (idx, raw) in input.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = raw.split_whitespace().collect();
            let &[id, variant, score] = fields.as_slice() else {
                return Err(RosterError::Malformed {
                    line,
                    reason: format!("expected 3 fields, got {}", fields.len()),
                });
            };

            let mut chars = variant.chars();
            let variant = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => c,
                _ => {
                    return Err(RosterError::Malformed {
                        line,
                        reason: format!("invalid exam variant `{variant}'"),
                    })
                }
            };

            let score: u32 = score.parse().map_err(|_| RosterError::Malformed {
                line,
                reason: format!("invalid score `{score}'"),
            })?;
            if score > MAX_EXAM_SCORE {
                return Err(RosterError::Malformed {
                    line,
                    reason: format!("score {score} exceeds maximum {MAX_EXAM_SCORE}"),
                });
            }

            students.push(Student {
                id: id.to_string(),
                variant,
                score,
            });
        }
        Ok(Self { students })
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Arithmetic mean of all scores, computed in f32 exactly as it is
    /// exchanged over the channel. Empty rosters yield 0.0.
    pub fn mean_score(&self) -> f32 {
        if self.students.is_empty() {
            return 0.0;
        }
        let total: u32 = self.students.iter().map(|s| s.score).sum();
        total as f32 / self.students.len() as f32
    }
}
