//! Session module - the game loop controller
//!
//! A [`Session`] owns all state of one play session: the field, the piece
//! catalog, the falling piece, the shape source and the cleared-line counter.
//! It is a small state machine:
//!
//! ```text
//! Spawning --fits--> Falling --tick blocked--> Locking --> Spawning
//!     \                                                      ^
//!      `--blocked--> GameOver --(field cleared, lines = 0)---'
//! ```
//!
//! Two stimuli drive it, both synchronous and run-to-completion: player
//! actions ([`Session::apply_action`]) and gravity ticks ([`Session::on_tick`]).
//! Locking, clearing, spawning and the automatic restart all happen inside the
//! tick that triggered them, so input can never observe a half-finished
//! transition.

use crate::catalog::{ActivePiece, Catalog};
use crate::grid::{in_bounds, Field};
use crate::lines::{self, Rows};
use crate::placement;
use crate::rng::{ShapeSource, SimpleRng};
use crate::snapshot::Snapshot;
use crate::speed::fall_interval_ms;
use crate::timer::{TickRequest, TickToken};
use crate::types::{GameAction, Point, VISIBLE_HEIGHT};

const DOWN: Point = Point::new(0, -1);

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choosing and placing the next piece.
    Spawning,
    /// A piece is falling and accepts input.
    Falling,
    /// The piece is being merged and full rows removed.
    Locking,
    /// A spawn was blocked; the next step resets the field and counter.
    GameOver,
}

/// What happened when a piece locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// Rows removed by this lock.
    pub cleared: u32,
    /// Indices of the removed rows, highest first.
    pub rows: Rows,
    /// Progress counter right after the lock.
    pub total_lines: u32,
    /// The following spawn was blocked and a fresh game started.
    pub restarted: bool,
}

/// Result of delivering a gravity tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Token did not match the live tick chain; nothing changed.
    Stale,
    /// The piece moved down one row.
    Fell,
    /// The piece could not move down and was locked.
    Locked(LockEvent),
}

/// One play session.
#[derive(Debug, Clone)]
pub struct Session<S = SimpleRng> {
    catalog: Catalog,
    field: Field,
    active: Option<ActivePiece>,
    phase: Phase,
    source: S,
    started: bool,
    /// Cumulative cleared lines this game.
    lines: u32,
    /// Pieces spawned this game.
    pieces: u32,
    /// Games played, the current one included.
    games: u32,
    /// Piece lifecycle counter (bumped on every spawn).
    generation: u32,
    /// Ticks consumed within the current generation.
    serial: u32,
    /// Bumped on every observable change.
    revision: u64,
    last_event: Option<LockEvent>,
}

impl Session<SimpleRng> {
    /// Create a session whose shapes come from a seeded [`SimpleRng`].
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<S: ShapeSource> Session<S> {
    /// Create a session with an injected shape source. Call [`Session::start`]
    /// to spawn the first piece.
    pub fn with_source(source: S) -> Self {
        Self {
            catalog: Catalog::build(),
            field: Field::new(),
            active: None,
            phase: Phase::Spawning,
            source,
            started: false,
            lines: 0,
            pieces: 0,
            games: 0,
            generation: 0,
            serial: 0,
            revision: 0,
            last_event: None,
        }
    }

    /// Spawn the first piece and return the first gravity request.
    ///
    /// Calling it again is harmless and returns the live request.
    pub fn start(&mut self) -> TickRequest {
        if !self.started {
            self.started = true;
            self.games = 1;
            self.phase = Phase::Spawning;
            self.spawn_next();
            self.bump();
        }
        self.tick_request()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current gravity interval.
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.lines)
    }

    /// The live gravity request, or `None` before [`Session::start`].
    pub fn pending_tick(&self) -> Option<TickRequest> {
        (self.started && self.phase == Phase::Falling).then(|| self.tick_request())
    }

    /// Take the event of the most recent lock.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply one player action. Returns whether the piece changed.
    ///
    /// A blocked move or rotation leaves the piece untouched. Soft drop never
    /// locks; only a gravity tick does.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let next = match action.delta() {
            Some(delta) => placement::try_translate(&self.field, &self.catalog, &piece, delta),
            None => placement::try_rotate_in(&self.field, &self.catalog, &piece),
        };

        match next {
            Some(next) => {
                if next != piece {
                    self.active = Some(next);
                    self.bump();
                }
                true
            }
            None => {
                tracing::trace!(action = action.as_str(), "action rejected");
                false
            }
        }
    }

    /// Deliver a gravity tick.
    ///
    /// Only the token from the latest [`TickRequest`] is honoured, and only
    /// once. Afterwards [`Session::pending_tick`] describes the next tick, at
    /// the possibly shorter interval.
    pub fn on_tick(&mut self, token: TickToken) -> TickOutcome {
        if self.phase != Phase::Falling || token != self.current_token() {
            tracing::trace!(?token, live = ?self.current_token(), "stale tick ignored");
            return TickOutcome::Stale;
        }
        let Some(piece) = self.active else {
            return TickOutcome::Stale;
        };
        self.serial = self.serial.wrapping_add(1);

        if let Some(moved) = placement::try_translate(&self.field, &self.catalog, &piece, DOWN) {
            self.active = Some(moved);
            self.bump();
            return TickOutcome::Fell;
        }

        let event = self.lock(piece);
        self.bump();
        self.last_event = Some(event.clone());
        TickOutcome::Locked(event)
    }

    /// Copy the visible state into `out`.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        for (row, layer_row) in out.field.iter_mut().enumerate() {
            let y = VISIBLE_HEIGHT - 1 - row as u8;
            layer_row.copy_from_slice(self.field.row(y));
        }

        for layer_row in out.piece.iter_mut() {
            layer_row.fill(None);
        }
        if let Some(piece) = self.active {
            let color = self.catalog.color(piece.kind);
            for p in placement::cells_at(&self.catalog, &piece, piece.pivot) {
                if in_bounds(p) && p.y < VISIBLE_HEIGHT as i8 {
                    let row = (VISIBLE_HEIGHT as i8 - 1 - p.y) as usize;
                    out.piece[row][p.x as usize] = Some(color);
                }
            }
        }

        out.lines = self.lines;
        out.interval_ms = self.fall_interval_ms();
        out.games = self.games;
        out.pieces = self.pieces;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn current_token(&self) -> TickToken {
        TickToken {
            generation: self.generation,
            serial: self.serial,
        }
    }

    fn tick_request(&self) -> TickRequest {
        TickRequest {
            token: self.current_token(),
            delay_ms: self.fall_interval_ms(),
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Falling -> Locking -> Spawning (-> GameOver -> Spawning) -> Falling.
    fn lock(&mut self, piece: ActivePiece) -> LockEvent {
        self.phase = Phase::Locking;
        self.active = None;

        placement::merge(&mut self.field, &self.catalog, &piece);
        let rows = lines::clear_lines(&mut self.field);
        let cleared = rows.len() as u32;
        self.lines += cleared;

        tracing::debug!(
            kind = piece.kind.letter(),
            x = piece.pivot.x,
            y = piece.pivot.y,
            cleared,
            total = self.lines,
            "piece locked"
        );

        self.phase = Phase::Spawning;
        let restarted = self.spawn_next();

        LockEvent {
            cleared,
            rows,
            total_lines: if restarted { 0 } else { self.lines },
            restarted,
        }
    }

    /// Run Spawning/GameOver until a piece is falling. Returns whether the game
    /// was restarted on the way.
    fn spawn_next(&mut self) -> bool {
        let mut restarted = false;
        loop {
            match self.phase {
                Phase::Spawning => {
                    let index = self.source.next_index(self.catalog.len());
                    let piece = self.catalog.spawn(self.catalog.kind_at(index));
                    if placement::can_place(&self.field, &self.catalog, &piece, piece.pivot) {
                        self.active = Some(piece);
                        self.generation = self.generation.wrapping_add(1);
                        self.serial = 0;
                        self.pieces += 1;
                        self.phase = Phase::Falling;
                    } else {
                        self.phase = Phase::GameOver;
                    }
                }
                Phase::GameOver => {
                    tracing::info!(
                        game = self.games,
                        lines = self.lines,
                        pieces = self.pieces,
                        "spawn blocked, starting a new game"
                    );
                    self.field.clear();
                    self.lines = 0;
                    self.pieces = 0;
                    self.games = self.games.wrapping_add(1);
                    restarted = true;
                    self.phase = Phase::Spawning;
                }
                Phase::Falling => return restarted,
                Phase::Locking => unreachable!("spawn_next entered while locking"),
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }
}

impl Default for Session<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
