//! End-to-end games driven through the orchestrator.

use anyhow::{Result, bail};
use async_trait::async_trait;
use noughts::{
    ComputerSeat, FirstAvailable, GameEvent, GameOutcome, Grid, Marker, MoveDecider,
    Orchestrator, Seat,
};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;

/// Plays a fixed list of positions, in order.
struct ScriptedSeat {
    name: String,
    script: VecDeque<usize>,
    rejections: Vec<usize>,
}

impl ScriptedSeat {
    fn new(name: &str, script: &[usize]) -> Self {
        Self {
            name: name.to_string(),
            script: script.iter().copied().collect(),
            rejections: Vec::new(),
        }
    }
}

#[async_trait]
impl Seat for ScriptedSeat {
    async fn choose_position(&mut self, _grid: &Grid, _is_opening_move: bool) -> Result<usize> {
        match self.script.pop_front() {
            Some(position) => Ok(position),
            None => bail!("{} ran out of moves", self.name),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        false
    }

    fn rejected(&mut self, position: usize) {
        self.rejections.push(position);
    }
}

/// Always takes the first free cell.
struct NaiveSeat(String);

#[async_trait]
impl Seat for NaiveSeat {
    async fn choose_position(&mut self, grid: &Grid, is_opening_move: bool) -> Result<usize> {
        match FirstAvailable.decide_move(grid, is_opening_move) {
            Some(position) => Ok(position),
            None => bail!("no free cell"),
        }
    }

    fn name(&self) -> &str {
        &self.0
    }

    fn is_computer(&self) -> bool {
        true
    }
}

fn computer(name: &str, own: Marker, opponent: Marker) -> Box<dyn Seat> {
    Box::new(ComputerSeat::new(name, own, opponent, Duration::ZERO))
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_computer_vs_computer_is_a_draw() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        computer("Nadya", Marker::x(), Marker::o()),
        Marker::x(),
        computer("DOM", Marker::o(), Marker::x()),
        Marker::o(),
    )?
    .with_events(tx);

    let report = orchestrator.run().await?;
    assert_eq!(report.outcome, GameOutcome::Draw);
    assert_eq!(report.moves.len(), 9);
    assert_eq!(report.moves[0].position, 0);
    assert!(report.grid.is_full());

    let events = drain(&mut rx);
    assert_eq!(events.first(), Some(&GameEvent::Started { first: 1 }));
    let thinking = events
        .iter()
        .filter(|e| matches!(e, GameEvent::AgentThinking { .. }))
        .count();
    assert_eq!(thinking, 9);
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver { outcome: GameOutcome::Draw, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_occupied_cell_is_rejected_and_asked_again() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedSeat::new("Nadya", &[0, 0, 1, 2])),
        Marker::x(),
        Box::new(ScriptedSeat::new("DOM", &[3, 4])),
        Marker::o(),
    )?
    .with_events(tx);

    let report = orchestrator.run().await?;
    assert_eq!(report.outcome, GameOutcome::Winner("Nadya".to_string()));
    let positions: Vec<usize> = report.moves.iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![0, 3, 1, 4, 2]);

    let events = drain(&mut rx);
    let rejected: Vec<&GameEvent> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveRejected { .. }))
        .collect();
    assert_eq!(
        rejected,
        vec![&GameEvent::MoveRejected {
            seat: "Nadya".to_string(),
            position: 0,
        }]
    );
    assert_eq!(orchestrator.session().grid().to_string().lines().next(), Some("X|X|X"));
    Ok(())
}

#[tokio::test]
async fn test_o_holder_waits_for_x() -> Result<()> {
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedSeat::new("Nadya", &[4, 8])),
        Marker::o(),
        Box::new(ScriptedSeat::new("DOM", &[0, 1, 2])),
        Marker::x(),
    )?;

    let report = orchestrator.run().await?;
    assert_eq!(report.moves[0].seat, 2);
    assert_eq!(report.outcome, GameOutcome::Winner("DOM".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_agent_beats_naive_seat() -> Result<()> {
    for agent_first in [true, false] {
        let (agent, naive) = (
            computer("Agent", Marker::x(), Marker::o()),
            Box::new(NaiveSeat("Naive".to_string())) as Box<dyn Seat>,
        );
        let mut orchestrator = if agent_first {
            Orchestrator::new(agent, Marker::x(), naive, Marker::o())?
        } else {
            // The naive seat holds X here, so it opens.
            let agent = computer("Agent", Marker::o(), Marker::x());
            Orchestrator::new(agent, Marker::o(), naive, Marker::x())?
        };

        let report = orchestrator.run().await?;
        assert_eq!(report.outcome, GameOutcome::Winner("Agent".to_string()));
    }
    Ok(())
}

#[tokio::test]
async fn test_session_is_reused_across_games() -> Result<()> {
    let mut orchestrator = Orchestrator::new(
        computer("Nadya", Marker::x(), Marker::o()),
        Marker::x(),
        computer("DOM", Marker::o(), Marker::x()),
        Marker::o(),
    )?;

    for _ in 0..2 {
        let report = orchestrator.run().await?;
        assert_eq!(report.outcome, GameOutcome::Draw);
    }
    assert_eq!(orchestrator.session().players().len(), 2);
    Ok(())
}

#[test]
fn test_duplicate_markers_are_refused() {
    let result = Orchestrator::new(
        computer("Nadya", Marker::x(), Marker::o()),
        Marker::x(),
        computer("DOM", Marker::x(), Marker::o()),
        Marker::x(),
    );
    assert!(result.is_err());
}
