mod input;
mod render;

use anyhow::Context;
use game_core::Game;
use proto::Update;
use session::{CsvHighscoreStore, Session, Settings};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use crate::input::{parse_line, Input, HELP};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stderr keeps stdout for the rendered game
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn print_updates(updates: &[Update], chart: bool) {
    for update in updates {
        if let Some(text) = render::render(update, chart) {
            println!("{text}");
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let chart = !std::env::args().any(|arg| arg == "--no-chart");
    let settings = Settings::from_env();
    tracing::info!(?settings, "starting");

    let store = CsvHighscoreStore::open(&settings.highscore_path).with_context(|| {
        format!(
            "opening highscore file {}",
            settings.highscore_path.display()
        )
    })?;
    let game = Game::new(settings.config.clone(), settings.rng());
    let mut session = Session::new(game, Box::new(store));

    println!("{HELP}\n");
    print_updates(&session.handle(proto::Command::RefreshHighscores), chart);
    print_updates(&[Update::Frame(session.view())], chart);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = tokio::time::interval(settings.tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                session.close();
                break;
            }

            _ = interval.tick(), if session.game().is_firing() => {
                print_updates(&session.tick(), chart);
            }

            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    session.close();
                    break;
                };
                match parse_line(&line) {
                    Ok(Input::Command(command)) => {
                        print_updates(&session.handle(command), chart);
                    }
                    Ok(Input::Help) => println!("{HELP}"),
                    Ok(Input::Quit) => {
                        session.close();
                        break;
                    }
                    Err(message) => println!("{message}"),
                }
            }
        }
    }

    // A shot still in flight resolves as cancelled
    print_updates(&session.tick(), chart);
    tracing::info!(highscore = session.game().score().highscore, "session closed");
    Ok(())
}
