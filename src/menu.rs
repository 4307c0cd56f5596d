//! Interactive deck inspection: reset, shuffle and draw from a deck by hand.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::card::join;
use crate::console::read_line;
use crate::deck::Deck;
use crate::error::GameError;

/// An action offered by the deck menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Rebuild the full ordered deck.
    Reset,
    /// Shuffle the deck.
    Shuffle,
    /// Draw a number of cards.
    Get,
    /// Leave the menu.
    Exit,
}

impl MenuOption {
    /// All options, in the order they are offered.
    pub const ALL: [Self; 4] = [Self::Reset, Self::Shuffle, Self::Get, Self::Exit];

    /// Returns the word that selects this option.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Shuffle => "shuffle",
            Self::Get => "get",
            Self::Exit => "exit",
        }
    }

    /// Looks up the option selected by `input`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|option| option.keyword() == input)
    }
}

/// Runs the deck menu until `exit` is chosen or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Unknown
/// actions and bad draw requests, including lines that are not valid UTF-8,
/// are reported on `out` and do not stop the menu.
pub fn run<R, W, G>(
    deck: &mut Deck,
    rng: &mut G,
    mut input: R,
    mut out: W,
) -> Result<(), GameError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let keywords = MenuOption::ALL.map(MenuOption::keyword).join(", ");
    loop {
        writeln!(out, "Choose an action ({keywords}):")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };

        match MenuOption::parse(&line) {
            Some(MenuOption::Reset) => {
                deck.reset();
                writeln!(out, "Card deck is reset.")?;
            }
            Some(MenuOption::Shuffle) => {
                deck.shuffle(rng);
                writeln!(out, "Card deck is shuffled.")?;
            }
            Some(MenuOption::Get) => {
                writeln!(out, "Number of cards:")?;
                out.flush()?;
                let Some(count) = read_line(&mut input)? else {
                    return Ok(());
                };
                match deck.draw_input(&count) {
                    Ok(cards) => writeln!(out, "{}", join(&cards))?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Some(MenuOption::Exit) => {
                writeln!(out, "Bye")?;
                return Ok(());
            }
            None => writeln!(out, "Wrong action.")?,
        }
    }
}
