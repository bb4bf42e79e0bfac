//! Noughts - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{
    ComputerSeat, GameEvent, GameOutcome, Grid, MatchConfig, Marker, MinimaxAgent, MoveDecider,
    Orchestrator, Position, Sides,
};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, delay_ms } => run_play(config, delay_ms).await,
        Command::Selfplay { games } => run_selfplay(games).await,
        Command::Suggest {
            grid,
            marker,
            opponent,
            opening,
        } => run_suggest(&grid, marker, opponent, opening),
    }
}

/// Play one interactive game.
#[instrument]
async fn run_play(config: Option<PathBuf>, delay_ms: Option<u64>) -> Result<()> {
    let mut config = match config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };
    if let Some(delay_ms) = delay_ms {
        config = config.with_thinking_delay_ms(delay_ms);
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::from_config(&config)?.with_events(tx);

    let renderer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            render(&event);
        }
    });

    println!("{}\n", Grid::new());
    let report = orchestrator.run().await;
    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;

    let report = report?;
    info!(outcome = %report.outcome, "Match finished");
    Ok(())
}

fn render(event: &GameEvent) {
    match event {
        GameEvent::Started { first } => println!("Seat {} opens.", first),
        GameEvent::AgentThinking { seat } => println!("{} is thinking...", seat),
        GameEvent::MoveMade {
            seat,
            position,
            marker,
            grid,
        } => println!("{} plays {} at {}\n\n{}\n", seat, marker, position + 1, grid),
        GameEvent::MoveRejected { seat, position } => {
            println!("{}: cell {} is taken.", seat, position + 1)
        }
        GameEvent::GameOver { outcome, .. } => match outcome {
            GameOutcome::Winner(name) => println!("Congratulations {}!", name),
            GameOutcome::Draw => println!("Draw!"),
            GameOutcome::Ongoing => {}
        },
    }
}

/// Agent against agent, tallying results.
#[instrument]
async fn run_selfplay(games: u32) -> Result<()> {
    let x = ComputerSeat::new("Agent X", Marker::x(), Marker::o(), Duration::ZERO);
    let o = ComputerSeat::new("Agent O", Marker::o(), Marker::x(), Duration::ZERO);
    let mut orchestrator = Orchestrator::new(Box::new(x), Marker::x(), Box::new(o), Marker::o())?;

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for game in 1..=games {
        let report = orchestrator.run().await?;
        match &report.outcome {
            GameOutcome::Winner(name) if name == "Agent X" => x_wins += 1,
            GameOutcome::Winner(_) => o_wins += 1,
            _ => draws += 1,
        }
        println!("Game {}: {}\n{}\n", game, describe(&report.outcome), report.grid);
    }

    println!("X wins: {}, O wins: {}, draws: {}", x_wins, o_wins, draws);
    Ok(())
}

fn describe(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(name) => format!("{} wins", name),
        GameOutcome::Draw => "draw".to_string(),
        GameOutcome::Ongoing => "unfinished".to_string(),
    }
}

/// Print the agent's choice and the score of every legal move.
#[instrument]
fn run_suggest(grid: &str, marker: String, opponent: String, opening: bool) -> Result<()> {
    let grid: Grid = grid.parse()?;
    let own = Marker::new(marker)?;
    let opponent = Marker::new(opponent)?;
    noughts_board::validate_markers(&own, &opponent)?;

    let mut agent = MinimaxAgent::new();
    agent.configure(true, own.clone(), opponent.clone());

    println!("{}\n", grid);
    let sides = Sides::new(own, opponent);
    for (coord, score) in noughts_agent::score_moves(&grid, &sides) {
        let cell = Position::from(coord);
        println!("  cell {} {}: {:+}", coord.position() + 1, cell, score);
    }

    match agent.decide_move(&grid, opening) {
        Some(position) => println!("Best move: cell {}", position + 1),
        None => println!("No move: {}", noughts_board::is_game_complete(&grid)),
    }
    Ok(())
}
