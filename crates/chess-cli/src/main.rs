//! Chess CLI - inspect positions and play move strings.
//!
//! Every command starts from the standard position (or a layout file), plays
//! the given moves, and prints the result as a board or as JSON.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chess_core::{Color, PieceId};
use chess_engine::{format_move, perft, perft_divide, Board, Game, Position, RulesConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Piece-registry chess move engine")]
struct Cli {
    /// Rules configuration file [default: rules.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from a board layout file instead of the standard position
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Black moves first (only with --layout)
    #[arg(long, requires = "layout")]
    black_to_move: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the position after the given moves
    Show {
        /// Moves to play first, e.g. e2-e4 e7-e5
        moves: Vec<String>,
        /// Print JSON instead of a board
        #[arg(long)]
        json: bool,
    },
    /// List the candidate moves of one piece
    Moves {
        /// Piece id, e.g. BC2
        piece: String,
        /// Moves to play first
        #[arg(long, num_args = 1..)]
        after: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Play moves one by one, printing the board after each
    Play {
        /// Moves to play, e.g. e2-e4 e7-e5 O-O
        moves: Vec<String>,
    },
    /// Count leaf nodes of the candidate tree
    Perft {
        /// Search depth
        depth: u32,
        /// Show the count below each root move
        #[arg(long)]
        divide: bool,
    },
}

#[derive(Serialize)]
struct PositionJson<'a> {
    side_to_move: Color,
    board: &'a Board,
    history: Vec<&'a str>,
    candidates: Vec<String>,
}

#[derive(Serialize)]
struct MovesJson {
    piece: String,
    square: Option<String>,
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(RulesConfig::config_path);
    let config = RulesConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    tracing::debug!(?config, "rules loaded");

    let side = if cli.black_to_move {
        Color::Black
    } else {
        Color::White
    };
    let start = match &cli.layout {
        Some(path) => load_layout(path, side)?,
        None => Position::startpos(),
    };
    let mut game = Game::from_position(start.with_config(config));

    match cli.command {
        Commands::Show { moves, json } => {
            play_all(&mut game, &moves)?;
            if json {
                let position = game.position();
                let out = PositionJson {
                    side_to_move: position.side_to_move,
                    board: position.board(),
                    history: game.history().iter().map(|m| m.text.as_str()).collect(),
                    candidates: game.legal_moves().into_iter().map(format_move).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", game.position());
            }
        }
        Commands::Moves { piece, after, json } => {
            play_all(&mut game, &after)?;
            let id = PieceId::parse(&piece)?;
            let position = game.position();
            let square = position.locate(id);
            let moves: Vec<String> = position.moves_for(id).into_iter().map(format_move).collect();
            if json {
                let out = MovesJson {
                    piece: id.to_string(),
                    square: square.map(|sq| sq.to_string()),
                    moves,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                match square {
                    Some(sq) => println!("{id} on {sq}: {}", moves.join(" ")),
                    None => println!("{id} is not on the board"),
                }
            }
        }
        Commands::Play { moves } => {
            print!("{}", game.position());
            for text in &moves {
                game.play(text).with_context(|| format!("playing {text}"))?;
                println!();
                println!("{text}");
                print!("{}", game.position());
            }
        }
        Commands::Perft { depth, divide } => {
            let position = game.position();
            if divide {
                let results = perft_divide(position, depth);
                let total: u64 = results.iter().map(|(_, n)| n).sum();
                for (mv, nodes) in results {
                    println!("{mv}: {nodes}");
                }
                println!();
                println!("Nodes: {total}");
            } else {
                println!("Nodes: {}", perft(position, depth));
            }
        }
    }

    Ok(())
}

fn load_layout(path: &Path, side: Color) -> anyhow::Result<Position> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let position = Position::from_layout(&text, side)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(position)
}

fn play_all(game: &mut Game, moves: &[String]) -> anyhow::Result<()> {
    for text in moves {
        game.play(text).with_context(|| format!("playing {text}"))?;
    }
    Ok(())
}
