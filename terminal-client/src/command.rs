use caro_engine::games::caro::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    ToggleHints,
    NewGame,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => return Err("Empty command".to_string()),
        "h" | "hints" => return Ok(Command::ToggleHints),
        "n" | "new" => return Ok(Command::NewGame),
        "?" | "help" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(format!("Unknown command: {}", line));
    };

    let row = row
        .parse::<usize>()
        .map_err(|_| format!("Invalid row: {}", row))?;
    let col = col
        .parse::<usize>()
        .map_err(|_| format!("Invalid column: {}", col))?;

    Ok(Command::Place(Position::new(row, col)))
}

pub const HELP: &str = "\
Commands:
  <row> <col>  place a stone, e.g. `4 5` or `4,5`
  h            toggle threat hints
  n            abandon the current game and start a new one
  ?            show this help
  q            quit";
