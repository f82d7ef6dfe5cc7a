mod loader;
mod model;
mod validator;

pub use loader::{load_case_from_file, load_case_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Case, Location, Puzzle, PuzzleCategory, Suspect};
pub use validator::{ValidationError, validate_case};
