//! Student roster module
//!
//! Generates the synthetic student dataset once at process start. Records
//! are immutable afterwards; a student's total is derived from `marks` on
//! every read and never stored.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DatasetConfig;

/// Fixed subject set; every record carries a score for each subject
pub const SUBJECTS: [&str; 5] = ["math", "science", "english", "history", "geography"];

/// Highest score per subject
pub const MAX_SCORE: u32 = 100;

/// A single student record
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    /// Subject name -> score in [0, `MAX_SCORE`]
    pub marks: HashMap<String, u32>,
}

impl StudentRecord {
    /// Sum of all subject scores, recomputed from `marks` on each call
    pub fn total(&self) -> u32 {
        self.marks.values().sum()
    }
}

/// The full student collection, in generation order
pub struct Roster {
    students: Vec<StudentRecord>,
}

const FIRST_NAMES: [&str; 12] = [
    "Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry", "Irene", "James", "Karen",
    "Liam",
];

const LAST_NAMES: [&str; 12] = [
    "Johnson", "Smith", "Williams", "Brown", "Davis", "Miller", "Wilson", "Moore", "Taylor",
    "Anderson", "Thomas", "Jackson",
];

impl Roster {
    /// Generate a synthetic roster.
    ///
    /// Names are drawn from fixed pools and scores uniformly from
    /// [0, `MAX_SCORE`]. A configured seed makes generation reproducible.
    pub fn generate(cfg: &DatasetConfig) -> Self {
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let students = (0..cfg.size)
            .map(|i| {
                let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
                let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
                let marks = SUBJECTS
                    .iter()
                    .map(|subject| ((*subject).to_string(), rng.gen_range(0..=MAX_SCORE)))
                    .collect();

                StudentRecord {
                    id: format!("stu-{:04}", i + 1),
                    name: format!("{first} {last}"),
                    marks,
                }
            })
            .collect();

        Self { students }
    }

    /// All records in generation order
    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(size: usize, seed: u64) -> DatasetConfig {
        DatasetConfig {
            size,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_generate_size_and_unique_ids() {
        let roster = Roster::generate(&dataset(40, 7));
        assert_eq!(roster.len(), 40);

        let mut ids: Vec<&str> = roster.students().iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 40, "student ids must be unique");
    }

    #[test]
    fn test_marks_cover_all_subjects_in_range() {
        let roster = Roster::generate(&dataset(20, 3));
        for student in roster.students() {
            assert_eq!(student.marks.len(), SUBJECTS.len());
            for subject in SUBJECTS {
                let score = student.marks[subject];
                assert!(score <= MAX_SCORE, "{subject} score {score} out of range");
            }
        }
    }

    #[test]
    fn test_total_is_sum_of_marks() {
        let roster = Roster::generate(&dataset(10, 11));
        for student in roster.students() {
            let manual: u32 = SUBJECTS.iter().map(|s| student.marks[*s]).sum();
            assert_eq!(student.total(), manual);
        }
    }

    #[test]
    fn test_total_of_known_marks() {
        let marks: HashMap<String, u32> = [
            ("math", 80),
            ("science", 70),
            ("english", 60),
            ("history", 90),
            ("geography", 50),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let student = StudentRecord {
            id: "stu-0001".to_string(),
            name: "Alice Johnson".to_string(),
            marks,
        };
        assert_eq!(student.total(), 350);
    }

    #[test]
    fn test_same_seed_reproduces_roster() {
        let a = Roster::generate(&dataset(25, 42));
        let b = Roster::generate(&dataset(25, 42));

        for (x, y) in a.students().iter().zip(b.students()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.name, y.name);
            assert_eq!(x.marks, y.marks);
        }
    }
}
