use crate::Mode;
use crate::case::Case;
use crate::engine::command::is_affirmative;
use crate::engine::output::Output;

/// Entry point of the accusation sub-flow. Suspects resolve by exact name
/// only; a hit asks for confirmation via `Mode::Accusing`.
pub fn handle_accuse(out: &mut Output, case: &Case, name: &str, mode: &mut Mode) {
    match case.find_suspect(name) {
        Some(idx) => {
            out.say(format!(
                "Você acusou {}. Confirmar acusação? (sim/não)",
                case.suspects[idx].name
            ));
            *mode = Mode::Accusing { suspect: idx };
        }
        None => out.say("Suspeito não encontrado."),
    }
}

/// The confirmation reply. Returns true when the accusation was confirmed
/// and named the culprit, which ends the game.
pub fn handle_confirm(out: &mut Output, case: &Case, mode: &mut Mode, input: &str) -> bool {
    let Mode::Accusing { suspect } = mode else {
        return false;
    };
    let idx = *suspect;
    *mode = Mode::Exploring;

    if !is_affirmative(input) {
        out.say("Acusação cancelada.");
        return false;
    }

    let accused = &case.suspects[idx].name;
    if accused.to_lowercase() == case.culprit.to_lowercase() {
        out.say(format!(
            "Parabéns — você descobriu o culpado: {}!",
            case.culprit
        ));
        out.say("Caso solucionado.");
        true
    } else {
        out.say(format!("{} não é o culpado.", accused));
        out.say("Tente continuar a investigar.");
        false
    }
}
