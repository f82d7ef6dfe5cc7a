/// A parsed main-loop command: lowercased command word plus one optional
/// argument. The argument is never tokenized further, so
/// `ir Sala de Estar` carries "Sala de Estar" whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Map,
    Go(String),
    GoMissingTarget,
    Inspect,
    Recap,
    Suspects,
    Accuse(String),
    AccuseMissingTarget,
    Quit,
    Unknown,
}

pub fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let word = match parts.next() {
        Some(w) => w.to_lowercase(),
        None => return Command::Unknown,
    };
    let arg = parts.collect::<Vec<&str>>().join(" ");

    match word.as_str() {
        "mapa" => Command::Map,
        "ir" => {
            if arg.is_empty() {
                Command::GoMissingTarget
            } else {
                Command::Go(arg)
            }
        }
        "inspecionar" => Command::Inspect,
        "recompor" => Command::Recap,
        "suspeitos" => Command::Suspects,
        "acusar" => {
            if arg.is_empty() {
                Command::AccuseMissingTarget
            } else {
                Command::Accuse(arg)
            }
        }
        "sair" => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Confirmation replies accepted by the inspect and accuse sub-flows.
pub fn is_affirmative(reply: &str) -> bool {
    let r = reply.trim().to_lowercase();
    r == "sim" || r == "s"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_word_is_case_insensitive() {
        assert_eq!(parse_command("MAPA"), Command::Map);
        assert_eq!(parse_command("Sair"), Command::Quit);
        assert_eq!(parse_command("InSpEcIoNaR"), Command::Inspect);
    }

    #[test]
    fn argument_is_kept_whole() {
        assert_eq!(
            parse_command("ir Sala de Estar"),
            Command::Go("Sala de Estar".to_string())
        );
        assert_eq!(
            parse_command("acusar Maria Luiza"),
            Command::Accuse("Maria Luiza".to_string())
        );
    }

    #[test]
    fn missing_arguments_are_distinguished() {
        assert_eq!(parse_command("ir"), Command::GoMissingTarget);
        assert_eq!(parse_command("ir   "), Command::GoMissingTarget);
        assert_eq!(parse_command("acusar"), Command::AccuseMissingTarget);
    }

    #[test]
    fn unknown_words_fall_through() {
        assert_eq!(parse_command("dançar"), Command::Unknown);
        assert_eq!(parse_command("map"), Command::Unknown);
    }

    #[test]
    fn affirmative_accepts_sim_and_s_only() {
        assert!(is_affirmative("sim"));
        assert!(is_affirmative("SIM"));
        assert!(is_affirmative(" s "));
        assert!(!is_affirmative("não"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative(""));
    }
}
