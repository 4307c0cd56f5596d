//! Game engine and state management.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::join;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::{Computer, HAND_SIZE, Human, Player, PlayerState};
use crate::result::{GameResult, TurnOutcome};
use crate::scoring::{self, FINAL_BONUS};
use crate::table::Table;

pub mod state;

pub use state::{EndReason, GameState, Seat};

/// Number of cards placed on the table before the first turn.
pub const TABLE_SIZE: usize = 4;

/// One game of Indigo between a human reading from `R` and the computer,
/// with all console output written to `W`.
///
/// The game owns the deck, the table and both players. Turns alternate in
/// the order fixed by [`GameOptions::first`] until the human quits or every
/// card has been played.
pub struct Game<R, W> {
    /// Cards not yet dealt.
    pub deck: Deck,
    /// Cards in play.
    pub table: Table,
    /// The human player.
    pub player: Human<R>,
    /// The computer player.
    pub computer: Computer<ChaCha8Rng>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Who captured the table most recently.
    last_winner: Seat,
    /// Who received the end-of-game bonus.
    bonus: Option<Seat>,
    /// Console output.
    out: W,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Shuffles a fresh deck with the given seed and deals the table and
    /// both hands.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing fails, which a full deck never does.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::io;
    ///
    /// use indigo::{Game, GameOptions};
    ///
    /// let stdin = io::stdin();
    /// let mut game = Game::new(GameOptions::default(), 42, stdin.lock(), io::stdout())?;
    /// let result = game.play()?;
    /// println!("{result:?}");
    /// # Ok::<(), indigo::GameError>(())
    /// ```
    pub fn new(options: GameOptions, seed: u64, input: R, out: W) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let table = Table::from_cards(deck.draw(TABLE_SIZE)?);
        let player_hand = Hand::from_cards(deck.draw(HAND_SIZE)?);
        let computer_hand = Hand::from_cards(deck.draw(HAND_SIZE)?);
        debug!(seed, first = ?options.first, remaining = deck.len(), "cards dealt");

        let computer = Computer::new(computer_hand, ChaCha8Rng::from_rng(&mut rng))
            .with_show_hand(options.show_computer_hand);

        Ok(Self {
            deck,
            table,
            player: Human::new(player_hand, input),
            computer,
            last_winner: options.first,
            options,
            state: GameState::Dealt,
            bonus: None,
            out,
        })
    }

    /// Plays the game to the end.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if the game was already played,
    /// or an I/O error from the console.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        if self.state != GameState::Dealt {
            return Err(GameError::InvalidState);
        }
        self.state = GameState::InProgress;

        writeln!(
            self.out,
            "Initial cards on the table: {}",
            join(self.table.cards())
        )?;
        self.print_table()?;

        let order = [self.options.first, self.options.first.other()];
        let reason = 'game: loop {
            for seat in order {
                if self.is_exhausted() {
                    self.finish()?;
                    break 'game EndReason::DeckExhausted;
                }

                match self.take_turn(seat)? {
                    TurnOutcome::Continue => {}
                    TurnOutcome::Won { points, captured } => {
                        debug!(?seat, points, captured, "trick won");
                        self.last_winner = seat;
                        self.print_score()?;
                    }
                    TurnOutcome::Exit => break 'game EndReason::Exit,
                    TurnOutcome::InvalidDraw => {
                        self.finish()?;
                        break 'game EndReason::DeckExhausted;
                    }
                }
                self.print_table()?;
            }
        };

        writeln!(self.out, "Game over")?;
        self.out.flush()?;
        self.state = GameState::Over(reason);

        let result = self.build_result(reason);
        info!(
            ?reason,
            player_score = result.player_score,
            computer_score = result.computer_score,
            "game over"
        );
        Ok(result)
    }

    fn take_turn(&mut self, seat: Seat) -> Result<TurnOutcome, GameError> {
        let player: &mut dyn Player = match seat {
            Seat::Player => &mut self.player,
            Seat::Computer => &mut self.computer,
        };
        player.turn(&mut self.table, &mut self.deck, &mut self.out)
    }

    /// Returns whether neither player can be dealt another hand.
    fn is_exhausted(&self) -> bool {
        self.player.state().hand.is_empty()
            && self.computer.state().hand.is_empty()
            && self.deck.len() < HAND_SIZE
    }

    /// Gives the leftover table cards to the last winner and applies the
    /// end-of-game bonus.
    fn finish(&mut self) -> Result<(), GameError> {
        let winner = self.last_winner;
        let leftover = self.table.take_all();
        let count = leftover.len();
        let points = self.seat_state_mut(winner).collect(leftover);
        debug!(?winner, cards = count, points, "leftover cards awarded");

        let recipient = scoring::bonus_recipient(
            self.options.first,
            self.player.state().captured_count(),
            self.computer.state().captured_count(),
        );
        self.seat_state_mut(recipient).score += FINAL_BONUS;
        self.bonus = Some(recipient);
        debug!(?recipient, "final bonus awarded");

        self.print_score()
    }

    fn seat_state_mut(&mut self, seat: Seat) -> &mut PlayerState {
        match seat {
            Seat::Player => self.player.state_mut(),
            Seat::Computer => self.computer.state_mut(),
        }
    }

    fn print_table(&mut self) -> Result<(), GameError> {
        writeln!(self.out, "{}", self.table)?;
        Ok(())
    }

    fn print_score(&mut self) -> Result<(), GameError> {
        let player = self.player.state();
        let computer = self.computer.state();
        writeln!(
            self.out,
            "Score: {} {} - {} {}",
            player.name(),
            player.score,
            computer.name(),
            computer.score
        )?;
        writeln!(
            self.out,
            "Cards: {} {} - {} {}",
            player.name(),
            player.captured_count(),
            computer.name(),
            computer.captured_count()
        )?;
        Ok(())
    }

    fn build_result(&self, reason: EndReason) -> GameResult {
        let player = self.player.state();
        let computer = self.computer.state();
        GameResult {
            reason,
            player_score: player.score,
            computer_score: computer.score,
            player_cards: player.captured_count(),
            computer_cards: computer.captured_count(),
            bonus: self.bonus,
        }
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the final result once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            GameState::Over(reason) => Some(self.build_result(reason)),
            GameState::Dealt | GameState::InProgress => None,
        }
    }

    /// Returns who captured the table most recently.
    ///
    /// Before any capture this is the first mover.
    pub const fn last_winner(&self) -> Seat {
        self.last_winner
    }

    /// Counts every card the game knows about: deck, hands, table and both
    /// captured piles. Always [`DECK_SIZE`](crate::DECK_SIZE).
    pub fn cards_accounted(&self) -> usize {
        let player = self.player.state();
        let computer = self.computer.state();
        self.deck.len()
            + self.table.len()
            + player.hand.len()
            + computer.hand.len()
            + player.captured_count()
            + computer.captured_count()
    }

    /// Returns the console output written so far.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the game and returns the console output.
    pub fn into_output(self) -> W {
        self.out
    }
}
