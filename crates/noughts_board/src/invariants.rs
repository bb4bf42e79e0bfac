//! First-class invariants for a live [`GameSession`].
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The session checks them in debug builds; they are also testable on
//! their own.

use crate::{GameSession, LineScores};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Returns both players when they exist and their markers differ.
///
/// With a shared marker the grid cannot attribute cells to a player, so the
/// grid-derived invariants hold vacuously.
fn distinct_players(session: &GameSession) -> Option<(&crate::Player, &crate::Player)> {
    match session.players() {
        [a, b] if a.marker() != b.marker() => Some((a, b)),
        _ => None,
    }
}

/// Invariant: each player's incremental counters equal counters rebuilt
/// from the grid.
pub struct ScoresMatchGrid;

impl Invariant<GameSession> for ScoresMatchGrid {
    fn holds(session: &GameSession) -> bool {
        let Some((a, b)) = distinct_players(session) else {
            return true;
        };
        [a, b]
            .iter()
            .all(|p| *p.scores() == LineScores::from_grid(session.grid(), p.marker()))
    }

    fn description() -> &'static str {
        "Line counters match the cells each player holds"
    }
}

/// Invariant: turns alternate, so the first mover holds as many cells as the
/// other player or exactly one more.
pub struct TurnsAlternate;

impl Invariant<GameSession> for TurnsAlternate {
    fn holds(session: &GameSession) -> bool {
        let Some((a, b)) = distinct_players(session) else {
            return true;
        };
        let (first, second) = if session.first_turn() == 1 { (a, b) } else { (b, a) };
        let leads = session.grid().count_of(first.marker());
        let trails = session.grid().count_of(second.marker());
        leads == trails || leads == trails + 1
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

/// Invariant: play is open exactly when the session is set up and the game
/// has not ended.
pub struct CanPlayMatchesStatus;

impl Invariant<GameSession> for CanPlayMatchesStatus {
    fn holds(session: &GameSession) -> bool {
        let terminal =
            session.players().iter().any(|p| p.has_won()) || session.grid().is_full();
        let open = !session.players().is_empty() && !terminal;
        session.can_play() == open
    }

    fn description() -> &'static str {
        "can_play is false iff the session is unset or the game has ended"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (ScoresMatchGrid, TurnsAlternate, CanPlayMatchesStatus);
