//! Terminal front end for the tilemerge engine.
//!
//! Owns everything the engine deliberately does not: key bindings (including
//! remapping), rendering, and the interactive loop. Also provides a headless
//! simulation mode for quick policy runs.

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Read, Write};
use std::process::ExitCode;
use tilemerge_core::{Direction, GameSession};

mod keys;
mod raw;

use keys::KeyBindings;

#[derive(Parser, Debug)]
#[command(name = "tilemerge")]
#[command(author, version, about = "Play the merge puzzle in the terminal or run simulations")]
struct Args {
    /// Board side length
    #[arg(short = 'n', long, default_value = "4")]
    size: usize,

    /// Random seed for deterministic runs
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of episodes to run in headless mode
    #[arg(short, long)]
    episodes: Option<u32>,

    /// Maximum steps per episode (0 = unlimited)
    #[arg(short, long, default_value = "10000")]
    max_steps: u32,

    /// Policy for headless mode
    #[arg(short, long, value_enum, default_value = "random")]
    policy: Policy,

    /// Show board after each move in headless mode
    #[arg(long)]
    verbose: bool,

    /// Key that slides tiles up
    #[arg(long, default_value = "w")]
    key_up: char,

    /// Key that slides tiles down
    #[arg(long, default_value = "s")]
    key_down: char,

    /// Key that slides tiles left
    #[arg(long, default_value = "a")]
    key_left: char,

    /// Key that slides tiles right
    #[arg(long, default_value = "d")]
    key_right: char,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Random legal moves
    Random,
    /// Cycle through directions: Left, Down, Right, Up
    Cycle,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.size < 2 {
        eprintln!("error: board size must be at least 2");
        return ExitCode::from(2);
    }

    let bindings =
        match KeyBindings::new(args.key_up, args.key_down, args.key_left, args.key_right) {
            Ok(b) => b,
            Err(msg) => {
                eprintln!("error: {}", msg);
                return ExitCode::from(2);
            }
        };

    if let Some(episodes) = args.episodes {
        tracing::debug!(episodes, policy = ?args.policy, seed = args.seed, "headless run");
        run_headless(&args, episodes);
    } else {
        run_interactive(&args, &bindings);
    }
    ExitCode::SUCCESS
}

enum InputAction {
    Move(Direction),
    Restart,
    Quit,
    None,
}

/// Map raw terminal bytes to an action. Arrow keys always work; letter keys
/// follow the user's bindings.
fn parse_input(bytes: &[u8], bindings: &KeyBindings) -> InputAction {
    match bytes {
        [27, 91, 65] => InputAction::Move(Direction::Up),
        [27, 91, 66] => InputAction::Move(Direction::Down),
        [27, 91, 67] => InputAction::Move(Direction::Right),
        [27, 91, 68] => InputAction::Move(Direction::Left),
        [b'q'] | [b'Q'] | [3] | [27] => InputAction::Quit,
        [b'r'] | [b'R'] => InputAction::Restart,
        [b] => match bindings.direction_for(*b as char) {
            Some(direction) => InputAction::Move(direction),
            None => InputAction::None,
        },
        _ => InputAction::None,
    }
}

/// Run interactive mode where the user plays with the keyboard.
fn run_interactive(args: &Args, bindings: &KeyBindings) {
    let _guard = raw::RawModeGuard::enable();

    let mut session = GameSession::new(args.size, args.seed);
    let mut stdin = io::stdin();
    let mut buffer = [0u8; 3];

    draw(&session, bindings);

    loop {
        let bytes_read = stdin.read(&mut buffer).unwrap_or(0);
        if bytes_read == 0 {
            continue;
        }

        match parse_input(&buffer[..bytes_read], bindings) {
            InputAction::Move(direction) => {
                // A move after game over is rejected by the engine; just
                // redraw in that case so the overlay stays visible.
                if let Ok(result) = session.apply_move(direction) {
                    draw(&session, bindings);
                    if result.score_delta > 0 {
                        println!("  +{} points!", result.score_delta);
                    }
                    if result.game_over {
                        print_game_over(&session);
                    }
                }
            }
            InputAction::Restart => {
                session.restart();
                draw(&session, bindings);
            }
            InputAction::Quit => {
                println!("\nGoodbye!");
                break;
            }
            InputAction::None => {}
        }
    }
}

fn draw(session: &GameSession, bindings: &KeyBindings) {
    println!("\x1b[2J\x1b[H"); // Clear screen
    println!("=== tilemerge ===");
    println!(
        "Controls: {} or Arrow Keys | Q to quit | R to restart\n",
        bindings
    );
    println!("Score: {}", session.score());
    print!("{}", session.grid());
    io::stdout().flush().ok();
}

fn print_game_over(session: &GameSession) {
    println!("\n  *** GAME OVER ***");
    println!("  Final Score: {}", session.score());
    println!("  Max Tile: {}", session.grid().max_tile());
    println!("\n  Press R to restart or Q to quit");
}

/// Run headless simulation mode and print parseable statistics.
fn run_headless(args: &Args, episodes: u32) {
    if episodes == 0 {
        println!("=== Simulation Results ===");
        println!("episodes=0");
        return;
    }

    let mut total_score: u64 = 0;
    let mut max_tile_overall: u32 = 0;
    let mut scores: Vec<u32> = Vec::with_capacity(episodes as usize);
    let mut max_tiles: Vec<u32> = Vec::with_capacity(episodes as usize);

    // Separate RNG stream for action selection so spawns stay comparable
    // across policies.
    let mut action_rng = SmallRng::seed_from_u64(args.seed.wrapping_add(1000));

    for episode in 0..episodes {
        let episode_seed = args.seed.wrapping_add(episode as u64);
        let mut session = GameSession::new(args.size, episode_seed);
        let mut steps = 0;
        let mut cycle = 0usize;

        while !session.is_over() && (args.max_steps == 0 || steps < args.max_steps) {
            let action = match args.policy {
                Policy::Random => select_random_move(&session, &mut action_rng),
                Policy::Cycle => select_cycle_move(&session, &mut cycle),
            };

            let Some(direction) = action else {
                break;
            };
            if session.apply_move(direction).is_err() {
                break;
            }
            steps += 1;

            if args.verbose {
                println!("Episode {} Step {}: {:?}", episode + 1, steps, direction);
                println!("Score: {}", session.score());
                print!("{}", session.grid());
            }
        }

        let score = session.score();
        let max_tile = session.grid().max_tile();
        scores.push(score);
        max_tiles.push(max_tile);
        total_score += score as u64;
        max_tile_overall = max_tile_overall.max(max_tile);

        if args.verbose {
            println!(
                "Episode {}: Score={}, MaxTile={}, Steps={}",
                episode + 1,
                score,
                max_tile,
                steps
            );
        }
    }

    let avg_score = total_score as f64 / episodes as f64;
    scores.sort();
    let median_score = if episodes % 2 == 0 {
        (scores[(episodes / 2 - 1) as usize] + scores[(episodes / 2) as usize]) as f64 / 2.0
    } else {
        scores[(episodes / 2) as usize] as f64
    };

    let mut tile_counts = std::collections::HashMap::new();
    for tile in &max_tiles {
        *tile_counts.entry(*tile).or_insert(0u32) += 1;
    }

    println!("=== Simulation Results ===");
    println!("episodes={}", episodes);
    println!("policy={:?}", args.policy);
    println!("seed={}", args.seed);
    println!("size={}", args.size);
    println!("max_steps={}", args.max_steps);
    println!("avg_score={:.2}", avg_score);
    println!("median_score={:.2}", median_score);
    println!("min_score={}", scores.first().unwrap_or(&0));
    println!("max_score={}", scores.last().unwrap_or(&0));
    println!("max_tile_overall={}", max_tile_overall);

    let mut tile_list: Vec<_> = tile_counts.iter().collect();
    tile_list.sort_by_key(|&(tile, _)| *tile);
    print!("tile_distribution=");
    for (i, (tile, count)) in tile_list.iter().enumerate() {
        if i > 0 {
            print!(",");
        }
        print!("{}:{}", tile, count);
    }
    println!();
}

/// Pick a random direction that would change the board.
fn select_random_move(session: &GameSession, rng: &mut SmallRng) -> Option<Direction> {
    let legal: Vec<Direction> = Direction::all()
        .into_iter()
        .filter(|&d| session.can_move(d))
        .collect();
    if legal.is_empty() {
        None
    } else {
        Some(legal[rng.gen_range(0..legal.len())])
    }
}

/// Pick the next legal direction in a fixed Left, Down, Right, Up cycle.
fn select_cycle_move(session: &GameSession, cycle: &mut usize) -> Option<Direction> {
    let order = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];
    for _ in 0..4 {
        let direction = order[*cycle % 4];
        *cycle += 1;
        if session.can_move(direction) {
            return Some(direction);
        }
    }
    None
}
