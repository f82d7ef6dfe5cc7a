use crate::Player;
use crate::case::Case;
use crate::engine::output::Output;

/// One line per location, in case order: name, a marker at the player's
/// position, the puzzle status tag, and the description.
pub fn print_map(out: &mut Output, case: &Case, player: &Player) {
    out.title("Mapa:");
    for (idx, loc) in case.locations.iter().enumerate() {
        let status = match &loc.puzzle {
            None => "[vazio]",
            Some(p) if p.solved => "[resolvido]",
            Some(_) => "[pista]",
        };
        if idx == player.location {
            out.say(format!("- {} (Você) - {} - {}", loc.name, status, loc.desc));
        } else {
            out.say(format!("- {} - {} - {}", loc.name, status, loc.desc));
        }
    }
}

pub fn handle_go(out: &mut Output, case: &Case, player: &mut Player, target: &str) {
    match case.find_location(target) {
        Some(idx) => {
            player.location = idx;
            let loc = &case.locations[idx];
            out.say(format!("Você foi para: {} — {}", loc.name, loc.desc));
        }
        None => out.say("Local não encontrado."),
    }
}

/// Every clue recovered so far, for piecing the case back together.
pub fn handle_recap(out: &mut Output, case: &Case) {
    out.say("Pistas obtidas:");
    for loc in &case.locations {
        if let Some(puzzle) = &loc.puzzle {
            if puzzle.solved {
                out.say(format!("- {}: {}", loc.name, puzzle.short_result()));
            }
        }
    }
}

pub fn handle_suspects(out: &mut Output, case: &Case) {
    out.say("Suspeitos:");
    for suspect in &case.suspects {
        out.say(format!("- {}: {}", suspect.name, suspect.desc));
    }
}
