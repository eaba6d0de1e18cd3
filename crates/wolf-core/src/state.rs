//! Game State Store
//!
//! The canonical mutable simulation state. Fields are private so the
//! store's invariants hold independent of the scheduler's control flow:
//! the transcript is append-only, a seat dies at most once, the winner is
//! assigned at most once, and the day and tick counters never go backwards.
//!
//! No timing or transition logic lives here.

use wolf_events::{
    generate_log_id, Faction, GameSnapshot, LogEntry, LogKind, Phase, Seat, SeatId,
};

use crate::error::DecisionError;

/// Canonical game state for one session.
pub struct GameState {
    day: u32,
    phase: Phase,
    seats: Vec<Seat>,
    transcript: Vec<LogEntry>,
    countdown: u32,
    winner: Option<Faction>,
    self_id: Option<SeatId>,
    sheriff_id: Option<SeatId>,
    tick: u64,
    next_log_seq: u64,
}

impl GameState {
    /// Creates a fresh state: day 1, announce phase, empty transcript.
    ///
    /// `self_id` is derived from whichever seat is marked human.
    pub fn new(seats: Vec<Seat>, initial_countdown: u32) -> Self {
        let self_id = seats.iter().find(|s| s.is_human).map(|s| s.id);
        Self {
            day: 1,
            phase: Phase::DayAnnounce,
            seats,
            transcript: Vec::new(),
            countdown: initial_countdown,
            winner: None,
            self_id,
            // TODO: sheriff election is an unimplemented extension point;
            // no transition sets this yet.
            sheriff_id: None,
            tick: 0,
            next_log_seq: 1,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn winner(&self) -> Option<Faction> {
        self.winner
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn self_id(&self) -> Option<SeatId> {
        self.self_id
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn transcript(&self) -> &[LogEntry] {
        &self.transcript
    }

    /// Looks up a seat by id.
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// Returns the living seats, in seat order.
    pub fn living_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.is_alive)
    }

    /// Counts living seats on each side: `(werewolves, others)`.
    pub fn living_by_faction(&self) -> (usize, usize) {
        let wolves = self
            .living_seats()
            .filter(|s| s.role.is_werewolf())
            .count();
        let others = self.living_seats().count() - wolves;
        (wolves, others)
    }

    /// Advances the simulation clock by one tick.
    pub fn advance_clock(&mut self) {
        self.tick += 1;
    }

    /// Decrements the countdown, saturating at zero, and returns the new value.
    pub fn decrement_countdown(&mut self) -> u32 {
        self.countdown = self.countdown.saturating_sub(1);
        self.countdown
    }

    pub fn set_countdown(&mut self, secs: u32) {
        self.countdown = secs;
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Increments the day counter. The counter only ever grows.
    pub fn increment_day(&mut self) {
        self.day += 1;
    }

    /// Appends a transcript entry, stamping day, phase, and timestamp from
    /// current state at call time.
    pub fn append_log(
        &mut self,
        kind: LogKind,
        speaker: Option<SeatId>,
        content: impl Into<String>,
    ) -> &LogEntry {
        let entry = LogEntry {
            id: generate_log_id(self.next_log_seq),
            day: self.day,
            phase: self.phase,
            speaker,
            content: content.into(),
            kind,
            timestamp: self.tick,
        };
        self.next_log_seq += 1;
        let index = self.transcript.len();
        self.transcript.push(entry);
        &self.transcript[index]
    }

    /// Marks a seat dead. A seat dies at most once; eliminating a dead or
    /// unknown seat is an error.
    pub fn eliminate(&mut self, id: SeatId) -> Result<(), DecisionError> {
        let seat = self
            .seats
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DecisionError::UnknownSeat(id))?;
        if !seat.is_alive {
            return Err(DecisionError::DeadSeat(id));
        }
        seat.is_alive = false;
        Ok(())
    }

    /// Assigns the winner. Returns false (and changes nothing) if a winner
    /// was already set.
    pub fn set_winner(&mut self, faction: Faction) -> bool {
        if self.winner.is_some() {
            return false;
        }
        self.winner = Some(faction);
        true
    }

    /// Produces a deep, independent copy suitable for cross-boundary
    /// delivery. Observers can never reach engine-owned state through it.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            day: self.day,
            phase: self.phase,
            seats: self.seats.clone(),
            transcript: self.transcript.clone(),
            countdown: self.countdown,
            winner: self.winner,
            self_id: self.self_id,
            sheriff_id: self.sheriff_id,
            tick: self.tick,
        }
    }
}
