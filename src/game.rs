//! Match controller: alternates turns between two players firing at each
//! other's grids and detects the end of the match.

use alloc::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, MatchError, ShotOutcome},
    coordinate::Coordinate,
    grid::{Grid, Phase},
    player::Player,
};

/// One side of a match. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Whose move it is.
///
/// The move index is even for [`Side::First`] and odd for [`Side::Second`].
/// A hit keeps the index where it is so the shooter goes again; a miss or a
/// sink passes the move to the other side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnOrder {
    index: u64,
}

impl TurnOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn active(&self) -> Side {
        if self.index % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Apply the outcome of the active side's shot.
    pub fn advance(&mut self, outcome: ShotOutcome) {
        if !outcome.repeats_turn() {
            self.index += 1;
        }
    }
}

/// Structured notifications produced while a match runs. Turning them into
/// text is up to the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    TurnStarted { side: Side },
    TargetChosen { side: Side, target: Coordinate },
    ShotRejected { side: Side, target: Coordinate, error: BoardError },
    ShotResolved { side: Side, target: Coordinate, outcome: ShotOutcome },
    MatchEnded { winner: Side },
}

/// Receiver of [`GameEvent`]s.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

impl<F: FnMut(&GameEvent)> EventSink for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Report of one completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Number of refused targets before this one was accepted.
    pub rejected: usize,
}

/// A running match between two players.
///
/// `first` fires at the second grid and `second` fires at the first grid.
pub struct Match<A, B> {
    grids: [Grid; 2],
    first: A,
    second: B,
    rng: SmallRng,
    turn: TurnOrder,
    shots: [usize; 2],
    winner: Option<Side>,
}

impl<A: Player, B: Player> Match<A, B> {
    /// Start a match. Both grids must have finished setup.
    pub fn new(
        first_grid: Grid,
        second_grid: Grid,
        first: A,
        second: B,
        rng: SmallRng,
    ) -> Result<Self, MatchError> {
        if first_grid.phase() != Phase::Playing {
            return Err(MatchError::GridNotReady(Side::First));
        }
        if second_grid.phase() != Phase::Playing {
            return Err(MatchError::GridNotReady(Side::Second));
        }
        Ok(Match {
            grids: [first_grid, second_grid],
            first,
            second,
            rng,
            turn: TurnOrder::new(),
            shots: [0; 2],
            winner: None,
        })
    }

    /// Grid owned by `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    pub fn active_side(&self) -> Side {
        self.turn.active()
    }

    pub fn turn_order(&self) -> TurnOrder {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Accepted shots fired by `side` so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Play one move for the active side.
    ///
    /// Targets refused by the opponent's grid are reported and the same side
    /// is asked again until one is accepted.
    pub fn play_turn<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<TurnReport, MatchError> {
        if self.winner.is_some() {
            return Err(MatchError::Finished);
        }
        let side = self.turn.active();
        sink.on_event(&GameEvent::TurnStarted { side });

        let mut rejected = 0;
        let (target, outcome) = loop {
            let target = match side {
                Side::First => self.first.select_target(&mut self.rng)?,
                Side::Second => self.second.select_target(&mut self.rng)?,
            };
            sink.on_event(&GameEvent::TargetChosen { side, target });
            match self.grids[side.opponent().index()].resolve_shot(target) {
                Ok(outcome) => break (target, outcome),
                Err(error) => {
                    rejected += 1;
                    log::trace!("{:?} target {:?} refused: {}", side, target, error);
                    sink.on_event(&GameEvent::ShotRejected { side, target, error });
                }
            }
        };
        self.shots[side.index()] += 1;
        sink.on_event(&GameEvent::ShotResolved { side, target, outcome });
        log::debug!("turn {}: {:?} fired at {:?} -> {:?}", self.turn.index(), side, target, outcome);
        self.turn.advance(outcome);

        if let Some(winner) = self.check_winner() {
            self.winner = Some(winner);
            log::info!("match ended, winner {:?}", winner);
            sink.on_event(&GameEvent::MatchEnded { winner });
        }
        Ok(TurnReport { side, target, outcome, rejected })
    }

    /// Play until one side has no vessels left and return the winner.
    pub fn run<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<Side, MatchError> {
        loop {
            self.play_turn(sink)?;
            if let Some(winner) = self.winner {
                return Ok(winner);
            }
        }
    }

    fn check_winner(&self) -> Option<Side> {
        if self.grid(Side::Second).is_defeated() {
            Some(Side::First)
        } else if self.grid(Side::First).is_defeated() {
            Some(Side::Second)
        } else {
            None
        }
    }
}
