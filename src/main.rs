use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use detetive::engine::{Output, OutputBlock};
use detetive::{Game, Mode, Signal};

const DEFAULT_CASE: &str = include_str!("../cases/detetive.toml");

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
            }
        }
    }
}

fn main() -> io::Result<()> {
    let case = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => match detetive::load_case_from_file(&path) {
            Ok(c) => {
                println!("Usando arquivo de caso: {}", path.display());
                c
            }
            Err(e) => {
                eprintln!("Falha ao carregar o caso '{}': {e}", path.display());
                std::process::exit(1);
            }
        },
        None => match detetive::load_case_from_str(DEFAULT_CASE) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Falha ao carregar o caso embutido: {e}");
                std::process::exit(1);
            }
        },
    };

    let problems = detetive::validate_case(&case);
    if !problems.is_empty() {
        for p in &problems {
            eprintln!("Caso inválido: {}", p.message);
        }
        std::process::exit(1);
    }

    println!("--- {} ---\n", case.title);
    if !case.intro.trim().is_empty() {
        println!("{}\n", case.intro.trim());
    }

    let mut game = Game::new(case);
    let stdin = io::stdin();

    loop {
        match &game.mode {
            Mode::Exploring => {
                println!("{}\n", game.status_line());
                println!(
                    "Comandos: mapa | ir <local> | inspecionar | recompor | suspeitos | acusar <nome> | sair"
                );
                print!("Digite um comando: ");
            }
            Mode::Solving { offered: false, .. } => print!("Resposta: "),
            // A yes/no question was just printed; read the reply directly.
            _ => {}
        }
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nSaindo... Obrigado por jogar!");
            break;
        }

        let (out, signal) = game.step(&input);
        flush_output(out);

        match signal {
            Signal::Continue => {}
            // A confirmed correct accusation or an explicit "sair" both end
            // the process with a normal exit.
            Signal::Quit | Signal::CaseClosed => break,
        }
    }

    Ok(())
}
