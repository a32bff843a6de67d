mod broadcaster;
mod command;
mod render;

use std::time::Instant;

use caro_engine::config::{CaroConfig, ConfigManager, Validate};
use caro_engine::games::caro::SessionState;
use caro_engine::{CaroSession, CaroSessionSettings, log, logger};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Duration, interval};

use broadcaster::{TerminalBroadcaster, describe_summary};
use command::{Command, HELP, parse_command};
use render::render_board;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "caro_terminal_client")]
struct Args {
    #[arg(long, default_value = "caro.yaml")]
    config: String,

    #[arg(long)]
    depth: Option<u8>,

    #[arg(long)]
    hints: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

type Session = CaroSession<TerminalBroadcaster>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Caro".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args)?;
    let settings = CaroSessionSettings::from(&config);
    let mut session = CaroSession::new(settings, TerminalBroadcaster::new());

    println!("{}", HELP);
    session.start();
    print_board(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tick_timer = interval(TICK_INTERVAL);
    let mut last_tick = Instant::now();

    loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                let moves_before = session.moves().len();
                let state_before = session.state();

                session.advance_timer(last_tick.elapsed());
                last_tick = Instant::now();

                if session.moves().len() != moves_before || session.state() != state_before {
                    present(&mut session).await;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{} (type ? for help)", e);
                        continue;
                    }
                };

                match command {
                    Command::Place(pos) => {
                        if session.submit_player_move(pos) {
                            present(&mut session).await;
                        } else {
                            println!("Cannot play {} right now", pos);
                        }
                    }
                    Command::ToggleHints => {
                        session.toggle_hints();
                        println!("Hints {}", if session.hints_enabled() { "on" } else { "off" });
                        print_board(&session);
                    }
                    Command::NewGame => {
                        session.reset_to_idle();
                        session.start();
                        print_board(&session);
                    }
                    Command::Help => println!("{}", HELP),
                    Command::Quit => break,
                }
            }
        }
    }

    log!("Terminal client exiting");
    Ok(())
}

fn load_config(args: &Args) -> Result<CaroConfig, String> {
    let manager = ConfigManager::<_, CaroConfig>::from_yaml_file(&args.config);
    let mut config = manager.get_config()?;

    if let Some(depth) = args.depth {
        config.search.depth = depth;
    }
    if args.hints {
        config.hints_enabled = true;
    }

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    log!("Loaded config from {}", args.config);
    Ok(config)
}

async fn present(session: &mut Session) {
    print_board(session);

    match session.state() {
        SessionState::PlayerTurn => match session.turn_time_remaining() {
            Some(remaining) => println!("Your move ({}s left)", remaining.as_secs()),
            None => println!("Your move"),
        },
        SessionState::GameOver => {
            let Some(summary) = session.broadcaster_mut().take_summary() else {
                return;
            };
            tokio::time::sleep(session.settings().game_over_delay).await;
            println!("{}", describe_summary(&summary));
            println!("Type n for a new game or q to quit");
        }
        SessionState::Idle | SessionState::OpponentThinking => {}
    }
}

fn print_board(session: &Session) {
    if let Some(board) = session.board() {
        let last_move = session.last_move().map(|mv| mv.position);
        println!("{}", render_board(board, session.dangerous_cells(), last_move));
    }
}
