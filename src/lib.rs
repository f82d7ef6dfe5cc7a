pub mod case;
pub mod engine;

use case::Case;
use engine::{Command, Output};

pub use case::{load_case_from_file, load_case_from_str, validate_case};

/// The player is just a cursor into the case's location list; locations are
/// never added or removed after load, so the index stays valid for the whole
/// game.
pub struct Player {
    pub location: usize,
}

/// What the next input line means. While a sub-flow mode is active every
/// line feeds that sub-flow, so inspect and accuse always run to completion
/// before ordinary commands resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Exploring,
    Solving {
        location: usize,
        attempts: u32,
        /// True after a wrong answer triggered the "see the solution?"
        /// question; the next line is the yes/no reply.
        offered: bool,
    },
    Accusing {
        suspect: usize,
    },
}

/// What the caller should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    /// The player asked to leave.
    Quit,
    /// The culprit was accused and confirmed; the game is won.
    CaseClosed,
}

pub struct Game {
    pub case: Case,
    pub player: Player,
    pub mode: Mode,
}

impl Game {
    /// The player starts at the first location of the case.
    pub fn new(case: Case) -> Self {
        Game {
            case,
            player: Player { location: 0 },
            mode: Mode::Exploring,
        }
    }

    /// One line for the header printed before each command prompt.
    pub fn status_line(&self) -> String {
        format!(
            "Local atual: {} | Pistas resolvidas: {}/{}",
            self.case.locations[self.player.location].name,
            self.case.solved_count(),
            self.case.total_puzzles()
        )
    }

    /// Process a single input line; returns (output, what to do next).
    pub fn step(&mut self, input: &str) -> (Output, Signal) {
        let mut out = Output::new();
        let input = input.trim();

        let signal = match self.mode {
            Mode::Solving { .. } => {
                engine::handle_answer(&mut out, &mut self.case, &mut self.mode, input);
                Signal::Continue
            }
            Mode::Accusing { .. } => {
                if engine::handle_confirm(&mut out, &self.case, &mut self.mode, input) {
                    Signal::CaseClosed
                } else {
                    Signal::Continue
                }
            }
            Mode::Exploring => {
                if input.is_empty() {
                    return (out, Signal::Continue);
                }
                self.dispatch(&mut out, input)
            }
        };

        // The endgame reminder repeats after every completed command once all
        // riddles are done; it nags on purpose, no dedup.
        if signal == Signal::Continue
            && self.mode == Mode::Exploring
            && self.case.all_puzzles_solved()
        {
            out.event(
                "Você solucionou todas as charadas — agora recomponha o caso \
                 (use 'suspeitos' e depois 'acusar <nome>').",
            );
        }

        (out, signal)
    }

    fn dispatch(&mut self, out: &mut Output, input: &str) -> Signal {
        match engine::parse_command(input) {
            Command::Map => engine::print_map(out, &self.case, &self.player),
            Command::Go(target) => {
                engine::handle_go(out, &self.case, &mut self.player, &target)
            }
            Command::GoMissingTarget => {
                out.say("Diga para qual local deseja ir (ex: ir Biblioteca)")
            }
            Command::Inspect => {
                engine::handle_inspect(out, &self.case, &self.player, &mut self.mode)
            }
            Command::Recap => engine::handle_recap(out, &self.case),
            Command::Suspects => engine::handle_suspects(out, &self.case),
            Command::Accuse(name) => {
                engine::handle_accuse(out, &self.case, &name, &mut self.mode)
            }
            Command::AccuseMissingTarget => {
                out.say("Diga quem você quer acusar (ex: acusar Carlos)")
            }
            Command::Quit => {
                out.say("Saindo... Obrigado por jogar!");
                return Signal::Quit;
            }
            Command::Unknown => out.say("Comando desconhecido."),
        }
        Signal::Continue
    }
}
