//! Text command parsing

use proto::Command;

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Command(Command),
    Help,
    Quit,
}

/// Parse one line typed at the prompt
pub fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" | "f" | "fire" => Ok(Input::Command(Command::Fire)),
        "a" | "angle" => parse_number(rest, "angle")
            .map(|degrees| Input::Command(Command::SetAngle { degrees })),
        "s" | "speed" => {
            parse_number(rest, "speed").map(|mps| Input::Command(Command::SetSpeed { mps }))
        }
        "submit" => Ok(Input::Command(Command::SubmitHighscore {
            name: rest.to_string(),
        })),
        "r" | "refresh" => Ok(Input::Command(Command::RefreshHighscores)),
        "h" | "help" | "?" => Ok(Input::Help),
        "q" | "quit" | "exit" => Ok(Input::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

fn parse_number(value: &str, what: &str) -> Result<f64, String> {
    value
        .parse()
        .map_err(|_| format!("{what} needs a number, got {value:?}"))
}

pub const HELP: &str = "\
commands:
  fire | f | <enter>   launch a shot
  angle <degrees>      aim (0-90)
  speed <m/s>          launch speed
  submit [name]        save your highscore
  refresh              reload the highscore table
  quit                 leave";
