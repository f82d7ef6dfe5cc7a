use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use super::model::{Case, Location, Puzzle, PuzzleCategory, Suspect};

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct CaseFile {
    case: CaseHeader,
    #[serde(default)]
    location: Vec<LocationConfig>, // [[location]] blocks
    #[serde(default)]
    suspect: Vec<SuspectConfig>, // [[suspect]] blocks
}

#[derive(Deserialize)]
struct CaseHeader {
    title: String,
    culprit: String,
    #[serde(default)]
    intro: String,
}

#[derive(Deserialize)]
struct LocationConfig {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    puzzle: Option<PuzzleConfig>, // [location.puzzle]
}

#[derive(Deserialize)]
struct PuzzleConfig {
    category: String,
    prompt: String,
    answer: String,
    #[serde(default)]
    hint: String,
    #[serde(default)]
    clue: String,
    #[serde(default)]
    solution: String,
}

#[derive(Deserialize)]
struct SuspectConfig {
    name: String,
    #[serde(default)]
    desc: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a case from a .toml file on disk.
pub fn load_case_from_file(path: &Path) -> io::Result<Case> {
    let contents = fs::read_to_string(path)?;
    load_case_from_str(&contents)
}

/// Public API: load a case from TOML text (used for the embedded sample case
/// and by tests).
pub fn load_case_from_str(contents: &str) -> io::Result<Case> {
    let case_file: CaseFile = toml::from_str(contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    if case_file.case.title.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "case.title may not be empty",
        ));
    }
    if case_file.case.culprit.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "case.culprit may not be empty",
        ));
    }

    let mut locations: Vec<Location> = Vec::new();
    for lc in case_file.location {
        let puzzle = match lc.puzzle {
            Some(pc) => Some(build_puzzle(&lc.name, pc)?),
            None => None,
        };

        locations.push(Location {
            name: lc.name,
            desc: reflow_text(&lc.desc),
            puzzle,
        });
    }

    let suspects: Vec<Suspect> = case_file
        .suspect
        .into_iter()
        .map(|sc| Suspect {
            name: sc.name,
            desc: reflow_text(&sc.desc),
        })
        .collect();

    Ok(Case {
        title: case_file.case.title,
        intro: reflow_text(&case_file.case.intro),
        culprit: case_file.case.culprit,
        locations,
        suspects,
    })
}

fn build_puzzle(location_name: &str, pc: PuzzleConfig) -> io::Result<Puzzle> {
    let category = parse_category(&pc.category).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "location '{}' puzzle has unknown category '{}'",
                location_name, pc.category
            ),
        )
    })?;

    Ok(Puzzle {
        category,
        prompt: reflow_text(&pc.prompt),
        answer: pc.answer,
        hint: reflow_text(&pc.hint),
        clue: reflow_text(&pc.clue),
        solution: reflow_text(&pc.solution),
        solved: false,
        solve_time: None,
    })
}

/// Older case files spell the categories with and without accents; all four
/// historical spellings collapse onto the two real variants.
fn parse_category(s: &str) -> Option<PuzzleCategory> {
    match s.trim().to_lowercase().as_str() {
        "matematica" | "matemática" | "math" => Some(PuzzleCategory::Math),
        "quimica" | "química" | "chemistry" => Some(PuzzleCategory::Chemistry),
        _ => None,
    }
}

/// Reflow multi-line TOML prose so indentation and wrapping in the case file
/// don't leak into what the player sees: a single newline becomes a space, a
/// blank line becomes a visible newline, two or more become a paragraph break.
fn reflow_text(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !first_text_seen {
            result.push_str(trimmed);
            first_text_seen = true;
        } else {
            match pending_blank_lines {
                0 => {
                    result.push(' ');
                    result.push_str(trimmed);
                }
                1 => {
                    result.push('\n');
                    result.push_str(trimmed);
                }
                _ => {
                    result.push_str("\n\n");
                    result.push_str(trimmed);
                }
            }
        }

        pending_blank_lines = 0;
    }

    result
}
