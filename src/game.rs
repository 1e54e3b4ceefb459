//! Match controller sequencing human and computer moves
//!
//! Owns the board, the side to move, the cached outcome, and the running
//! scores. The GUI layer drives it through four commands (`play_move`,
//! `computer_move`, `restart`, `set_mode`) and reads state back through
//! accessors; all game logic stays on this side of that boundary.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Mark, Pos};
//! use tictactoe::game::{Game, GameMode};
//!
//! let mut game = Game::new(GameMode::HumanVsComputer);
//! assert!(game.play_move(Pos::new(1, 1)));
//! assert!(game.computer_move().is_some());
//! assert_eq!(game.turn(), Mark::X);
//! ```

use crate::board::{Board, Mark, Pos};
use crate::rules::{evaluate, find_winning_line, Outcome};
use crate::search::{SearchResult, Searcher};

/// X opens every round
const STARTING_MARK: Mark = Mark::X;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two players sharing the board (hotseat)
    HumanVsHuman,
    /// Human against the computer
    #[default]
    HumanVsComputer,
}

/// Match controller
pub struct Game {
    board: Board,
    turn: Mark,
    mode: GameMode,
    outcome: Outcome,
    score_x: u32,
    score_o: u32,
    last_move: Option<Pos>,
    last_search: Option<SearchResult>,
}

impl Game {
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            turn: STARTING_MARK,
            mode,
            outcome: Outcome::InProgress,
            score_x: 0,
            score_o: 0,
            last_move: None,
            last_search: None,
        }
    }

    /// Play a move for the side to move.
    ///
    /// Rejected without any state change when the match is over or the
    /// target cell is occupied or off the board. On success the outcome is
    /// re-evaluated and the turn advances only while still in progress.
    pub fn play_move(&mut self, pos: Pos) -> bool {
        if self.outcome.is_over() {
            return false;
        }
        if !self.board.place(pos, self.turn) {
            return false;
        }
        self.finish_move(pos);
        true
    }

    /// Let the computer play for the side to move.
    ///
    /// No-op returning `None` when the match is over. The searcher
    /// maximizes for the current side, so the computer can stand in for
    /// either mark. The move is applied through the same path as
    /// `play_move`; the caller decides when to invoke this.
    pub fn computer_move(&mut self) -> Option<Pos> {
        if self.outcome.is_over() {
            return None;
        }

        let mut searcher = Searcher::new(self.turn);
        let result = searcher.best_move(&self.board);
        self.last_search = Some(result);

        let pos = result.best_move?;
        if !self.board.place(pos, self.turn) {
            return None;
        }
        self.finish_move(pos);
        Some(pos)
    }

    /// Start a fresh round. Scores carry over.
    pub fn restart(&mut self) {
        self.board.reset();
        self.turn = STARTING_MARK;
        self.outcome = Outcome::InProgress;
        self.last_move = None;
        self.last_search = None;
    }

    /// Select the play mode. Pure configuration: board, turn, outcome, and
    /// scores are untouched.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    /// Shared tail of both placement paths: re-evaluate the position, apply
    /// the outcome, and advance the turn while still in progress.
    fn finish_move(&mut self, pos: Pos) {
        self.last_move = Some(pos);
        self.apply_outcome(evaluate(&self.board));
        if !self.outcome.is_over() {
            self.turn = self.turn.opponent();
        }
    }

    /// Record a freshly evaluated outcome.
    ///
    /// The winner's counter increments here and nowhere else, exactly once
    /// per transition into `Won`. Draws increment neither counter.
    fn apply_outcome(&mut self, outcome: Outcome) {
        debug_assert!(!self.outcome.is_over());
        if let Outcome::Won(mark) = outcome {
            match mark {
                Mark::X => self.score_x += 1,
                Mark::O => self.score_o += 1,
                Mark::Empty => {}
            }
        }
        self.outcome = outcome;
    }

    /// Current board contents
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Outcome as of the last accepted move
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Rounds won by `mark` since the process started
    pub fn score(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.score_x,
            Mark::O => self.score_o,
            Mark::Empty => 0,
        }
    }

    /// Most recently accepted move, if any this round
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Result of the most recent computer search this round
    #[inline]
    pub fn last_search(&self) -> Option<SearchResult> {
        self.last_search
    }

    /// Positions of the completed line once the match is won
    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        match self.outcome {
            Outcome::Won(mark) => find_winning_line(&self.board, mark),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
