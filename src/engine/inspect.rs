use chrono::Utc;

use crate::case::Case;
use crate::engine::command::is_affirmative;
use crate::engine::output::Output;
use crate::{Mode, Player};

/// Entry point of the riddle sub-flow. Switches the game into
/// `Mode::Solving` when the current location holds an unsolved riddle;
/// otherwise answers immediately and stays in exploration.
pub fn handle_inspect(out: &mut Output, case: &Case, player: &Player, mode: &mut Mode) {
    let loc = &case.locations[player.location];

    let Some(puzzle) = &loc.puzzle else {
        out.say("Nada de interessante aqui.");
        return;
    };

    if puzzle.solved {
        out.say(format!("Pista já resolvida: {}", puzzle.short_result()));
        return;
    }

    out.say(format!("Pista encontrada em {}:", loc.name));
    out.say(puzzle.prompt.clone());
    *mode = Mode::Solving {
        location: player.location,
        attempts: 0,
        offered: false,
    };
}

/// One answer attempt (or one reply to the solution offer) while in
/// `Mode::Solving`. This is the only place `solved`/`solve_time` change.
pub fn handle_answer(out: &mut Output, case: &mut Case, mode: &mut Mode, input: &str) {
    let Mode::Solving {
        location,
        attempts,
        offered,
    } = mode
    else {
        return;
    };

    let idx = *location;
    let Some(puzzle) = case.locations[idx].puzzle.as_mut() else {
        *mode = Mode::Exploring;
        return;
    };

    if *offered {
        // The previous wrong attempt triggered the solution offer; this
        // line is the yes/no reply, not an answer.
        if is_affirmative(input) {
            out.say(format!("Solução: {}", puzzle.solution));
            puzzle.solved = true;
            *mode = Mode::Exploring;
        } else {
            *offered = false;
        }
        return;
    }

    *attempts += 1;

    if puzzle.check_answer(input) {
        out.say("Correto! Você ganhou a pista:");
        out.say(puzzle.reveal_clue().to_string());
        puzzle.solved = true;
        puzzle.solve_time = Some(Utc::now());
        *mode = Mode::Exploring;
        return;
    }

    out.say("Errado.");
    if *attempts == 1 {
        out.say(format!("Dica: {}", puzzle.hint));
    } else if *attempts >= 3 {
        // Re-offered on every wrong attempt from the third onward.
        out.say("Quer ver a solução (sim/não)?");
        *offered = true;
    }
}
