use scorebot::ScoreBot;
use std::io::{BufRead, Write, stdin, stdout};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .format_target(false)
        .init();

    let bot = ScoreBot::new();
    println!("{}\n", bot.help());

    let mut out = stdout();
    let mut lines = stdin().lock().lines();
    loop {
        print!("> ");
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }
        println!("\n{}\n", bot.respond(input).await);
    }

    Ok(())
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("scorebot {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "scorebot - live scores and schedules for tracked teams

Usage:
  scorebot
  scorebot --help
  scorebot --version

Environment:
  RUST_LOG   Log filter in env_logger syntax, e.g. RUST_LOG=scorebot=debug

Type questions at the prompt (\"nfl scores\", \"duke schedule\").
\"quit\", \"exit\", or end-of-input leaves the loop."
}
