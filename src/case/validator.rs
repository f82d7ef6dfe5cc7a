use std::collections::HashSet;

use super::model::Case;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Cross-checks a loaded case before play starts. Returns every problem found
/// rather than stopping at the first.
pub fn validate_case(case: &Case) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if case.locations.is_empty() {
        errors.push(ValidationError::new("case has no locations"));
    }

    // Location names must be unique case-insensitively, or lookup by partial
    // name stops being deterministic.
    let mut seen_locations: HashSet<String> = HashSet::new();
    for loc in &case.locations {
        if loc.name.trim().is_empty() {
            errors.push(ValidationError::new("a location has an empty name"));
            continue;
        }
        if !seen_locations.insert(loc.name.to_lowercase()) {
            errors.push(ValidationError::new(format!(
                "duplicate location name '{}'",
                loc.name
            )));
        }

        if let Some(puzzle) = &loc.puzzle {
            if puzzle.prompt.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "location '{}' puzzle has an empty prompt",
                    loc.name
                )));
            }
            if puzzle.answer.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "location '{}' puzzle has an empty answer",
                    loc.name
                )));
            }
        }
    }

    if case.suspects.is_empty() {
        errors.push(ValidationError::new("case has no suspects"));
    }

    let mut seen_suspects: HashSet<String> = HashSet::new();
    for suspect in &case.suspects {
        if suspect.name.trim().is_empty() {
            errors.push(ValidationError::new("a suspect has an empty name"));
            continue;
        }
        if !seen_suspects.insert(suspect.name.to_lowercase()) {
            errors.push(ValidationError::new(format!(
                "duplicate suspect name '{}'",
                suspect.name
            )));
        }
    }

    // The accusation endgame depends on the culprit actually being someone
    // the player can accuse.
    let culprit = case.culprit.to_lowercase();
    let matches = case
        .suspects
        .iter()
        .filter(|s| s.name.to_lowercase() == culprit)
        .count();
    if matches != 1 {
        errors.push(ValidationError::new(format!(
            "culprit '{}' matches {} suspects (expected exactly 1)",
            case.culprit, matches
        )));
    }

    errors
}
