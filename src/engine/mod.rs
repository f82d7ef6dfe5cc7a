mod accuse;
mod command;
mod explore;
mod inspect;
mod output;

pub use accuse::{handle_accuse, handle_confirm};
pub use command::{Command, is_affirmative, parse_command};
pub use explore::{handle_go, handle_recap, handle_suspects, print_map};
pub use inspect::{handle_answer, handle_inspect};
pub use output::{Output, OutputBlock};
