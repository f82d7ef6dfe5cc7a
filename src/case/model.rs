use chrono::{DateTime, Utc};

/// Runtime case type used by the game loop.
#[derive(Debug)]
pub struct Case {
    pub title: String,
    pub intro: String,
    /// Name of the guilty suspect; matches exactly one entry in `suspects`
    /// (case-insensitively, enforced by the validator).
    pub culprit: String,
    /// Ordered: display order, and `locations[0]` is where the player starts.
    pub locations: Vec<Location>,
    pub suspects: Vec<Suspect>,
}

#[derive(Debug)]
pub struct Location {
    pub name: String,
    pub desc: String,
    /// At most one riddle per location; some locations are just scenery.
    pub puzzle: Option<Puzzle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleCategory {
    Math,
    Chemistry,
}

#[derive(Debug)]
pub struct Puzzle {
    pub category: PuzzleCategory,
    pub prompt: String,
    /// Canonical answer, compared textually after normalization.
    pub answer: String,
    pub hint: String,
    /// Revealed when the riddle is solved.
    pub clue: String,
    /// Worked explanation, shown if the player gives up.
    pub solution: String,
    /// Once true, never reverts. Only the inspect flow flips it.
    pub solved: bool,
    /// Set when the player answers correctly; stays `None` on a
    /// revealed-solution bailout.
    pub solve_time: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct Suspect {
    pub name: String,
    pub desc: String,
}

impl Puzzle {
    /// Textual answer check. Both sides are trimmed, lowercased, and have
    /// commas turned into periods (decimal-separator tolerance); beyond that
    /// the match is exact. "1.33" does not match a canonical "4/3".
    pub fn check_answer(&self, attempt: &str) -> bool {
        normalize(attempt) == normalize(&self.answer)
    }

    pub fn reveal_clue(&self) -> &str {
        &self.clue
    }

    pub fn short_result(&self) -> &str {
        if self.solved {
            &self.clue
        } else {
            "(não resolvido)"
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(',', ".")
}

impl Case {
    /// Case-insensitive location lookup: first location (in case order) whose
    /// name starts with or contains the query. Both halves of the OR are kept
    /// so partial names like "lab" resolve.
    pub fn find_location(&self, query: &str) -> Option<usize> {
        let q = query.trim().to_lowercase();
        self.locations.iter().position(|l| {
            let name = l.name.to_lowercase();
            name.starts_with(&q) || name.contains(&q)
        })
    }

    /// Suspect lookup is exact-name only (case-insensitive), unlike location
    /// lookup. An accusation should not resolve by prefix.
    pub fn find_suspect(&self, name: &str) -> Option<usize> {
        let n = name.trim().to_lowercase();
        self.suspects.iter().position(|s| s.name.to_lowercase() == n)
    }

    pub fn solved_count(&self) -> usize {
        self.locations
            .iter()
            .filter(|l| l.puzzle.as_ref().is_some_and(|p| p.solved))
            .count()
    }

    pub fn total_puzzles(&self) -> usize {
        self.locations.iter().filter(|l| l.puzzle.is_some()).count()
    }

    /// Vacuously true for a case with no riddles.
    pub fn all_puzzles_solved(&self) -> bool {
        self.solved_count() == self.total_puzzles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(answer: &str) -> Puzzle {
        Puzzle {
            category: PuzzleCategory::Math,
            prompt: "?".to_string(),
            answer: answer.to_string(),
            hint: String::new(),
            clue: "uma pista".to_string(),
            solution: String::new(),
            solved: false,
            solve_time: None,
        }
    }

    fn location(name: &str, puzzle: Option<Puzzle>) -> Location {
        Location {
            name: name.to_string(),
            desc: String::new(),
            puzzle,
        }
    }

    fn sample_case() -> Case {
        Case {
            title: String::new(),
            intro: String::new(),
            culprit: "Carlos".to_string(),
            locations: vec![
                location("Biblioteca", Some(puzzle("8"))),
                location("Laboratório", Some(puzzle("4/3"))),
                location("Jardim", None),
            ],
            suspects: vec![
                Suspect {
                    name: "Carlos".to_string(),
                    desc: String::new(),
                },
                Suspect {
                    name: "Mariana".to_string(),
                    desc: String::new(),
                },
            ],
        }
    }

    #[test]
    fn check_answer_normalizes_case_and_whitespace() {
        let p = puzzle("H2O");
        assert!(p.check_answer("h2o"));
        assert!(p.check_answer("  H2o  "));
        assert!(!p.check_answer("h2o2"));
    }

    #[test]
    fn check_answer_treats_comma_as_decimal_point() {
        let p = puzzle("1.5");
        assert!(p.check_answer("1,5"));
        assert!(p.check_answer("1.5"));
        let q = puzzle("4,3");
        assert!(q.check_answer("4.3"));
    }

    #[test]
    fn check_answer_requires_literal_text_not_numeric_equality() {
        let p = puzzle("4/3");
        assert!(p.check_answer("4/3"));
        assert!(!p.check_answer("1.33"));
        assert!(!p.check_answer("1,3333"));
    }

    #[test]
    fn check_answer_rejects_empty_attempt() {
        let p = puzzle("7");
        assert!(!p.check_answer(""));
        assert!(!p.check_answer("   "));
    }

    #[test]
    fn find_location_matches_exact_name_case_insensitively() {
        let case = sample_case();
        assert_eq!(case.find_location("Biblioteca"), Some(0));
        assert_eq!(case.find_location("biblioteca"), Some(0));
        assert_eq!(case.find_location("LABORATÓRIO"), Some(1));
    }

    #[test]
    fn find_location_matches_prefix_and_substring() {
        let case = sample_case();
        assert_eq!(case.find_location("bibli"), Some(0));
        assert_eq!(case.find_location("ratóri"), Some(1));
    }

    #[test]
    fn find_location_takes_first_match_in_case_order() {
        let case = sample_case();
        // "b" prefixes Biblioteca and is a substring of nothing earlier.
        assert_eq!(case.find_location("b"), Some(0));
    }

    #[test]
    fn find_location_misses_unknown_names() {
        let case = sample_case();
        assert_eq!(case.find_location("Quartoqualquer"), None);
    }

    #[test]
    fn find_suspect_is_exact_match_only() {
        let case = sample_case();
        assert_eq!(case.find_suspect("carlos"), Some(0));
        assert_eq!(case.find_suspect("  MARIANA "), Some(1));
        // No prefix or substring resolution for suspects.
        assert_eq!(case.find_suspect("carl"), None);
        assert_eq!(case.find_suspect("arian"), None);
    }

    #[test]
    fn solved_counts_follow_puzzle_state() {
        let mut case = sample_case();
        assert_eq!(case.total_puzzles(), 2);
        assert_eq!(case.solved_count(), 0);
        assert!(!case.all_puzzles_solved());

        case.locations[0].puzzle.as_mut().unwrap().solved = true;
        assert_eq!(case.solved_count(), 1);
        assert!(!case.all_puzzles_solved());

        case.locations[1].puzzle.as_mut().unwrap().solved = true;
        assert_eq!(case.solved_count(), 2);
        assert!(case.all_puzzles_solved());
    }

    #[test]
    fn all_puzzles_solved_is_vacuously_true_without_puzzles() {
        let case = Case {
            title: String::new(),
            intro: String::new(),
            culprit: "Ninguém".to_string(),
            locations: vec![location("Jardim", None)],
            suspects: Vec::new(),
        };
        assert!(case.all_puzzles_solved());
    }

    #[test]
    fn short_result_shows_clue_only_when_solved() {
        let mut p = puzzle("7");
        assert_eq!(p.short_result(), "(não resolvido)");
        p.solved = true;
        assert_eq!(p.short_result(), "uma pista");
        assert_eq!(p.reveal_clue(), "uma pista");
    }
}
