use rand::Rng;

use crate::board::Tile;
use crate::dictionary::Dictionary;
use crate::engine::apply::{apply_move, MoveOutcome};
use crate::error::MoveError;
use crate::letters::is_alphabet_letter;
use crate::state::{GameData, Move};
use crate::types::{Orientation, Player, Position};
use crate::words::shared_orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Empty,
    LettersPlaced,
}

/// Builds one player's move a letter at a time against a fixed snapshot.
///
/// The first letter of a turn must touch a letter already on the board
/// (unless the board is empty); later letters must stay on the line the
/// first ones started. Withdrawn letters go back to the working rack.
#[derive(Debug, Clone)]
pub struct TurnBuilder<'g> {
    game: &'g GameData,
    player: Player,
    rack: Vec<char>,
    mv: Move,
}

impl<'g> TurnBuilder<'g> {
    pub fn new(game: &'g GameData, player: Player) -> Self {
        Self {
            game,
            player,
            rack: game.seat(player).rack.clone(),
            mv: Move::new(),
        }
    }

    #[inline]
    pub fn phase(&self) -> TurnPhase {
        if self.mv.is_empty() {
            TurnPhase::Empty
        } else {
            TurnPhase::LettersPlaced
        }
    }

    /// Letters still in hand.
    #[inline]
    pub fn rack(&self) -> &[char] {
        &self.rack
    }

    #[inline]
    pub fn pending(&self) -> &Move {
        &self.mv
    }

    pub fn place(&mut self, pos: Position, tile: Tile) -> Result<(), MoveError> {
        if self.game.board.is_occupied(pos) || self.mv.get(pos).is_some() {
            return Err(MoveError::OccupiedPosition(pos));
        }
        if !is_alphabet_letter(tile.letter) {
            return Err(MoveError::NotInAlphabet(tile.letter));
        }
        let symbol = tile.rack_symbol();
        let slot = self
            .rack
            .iter()
            .position(|c| *c == symbol)
            .ok_or(MoveError::LetterNotInRack(symbol))?;

        if self.mv.is_empty() {
            if !self.game.board.is_empty() && !self.game.board.has_neighbor(pos) {
                return Err(MoveError::NotAdjacent);
            }
        } else if !self.extends_line(pos) {
            return Err(MoveError::NotStraightLine);
        }

        self.rack.remove(slot);
        self.mv.place(pos, tile);
        Ok(())
    }

    fn extends_line(&self, pos: Position) -> bool {
        let placed = self.mv.positions();
        match shared_orientation(&placed) {
            Some(Orientation::Horizontal) => placed[0].row() == pos.row(),
            Some(Orientation::Vertical) => placed[0].col() == pos.col(),
            None => placed
                .first()
                .is_some_and(|p| p.row() == pos.row() || p.col() == pos.col()),
        }
    }

    /// Take back the letter on `pos`, returning it to the rack.
    pub fn withdraw(&mut self, pos: Position) -> Option<Tile> {
        let tile = self.mv.remove(pos)?;
        self.rack.push(tile.rack_symbol());
        Some(tile)
    }

    pub fn withdraw_all(&mut self) {
        for pos in self.mv.positions() {
            self.withdraw(pos);
        }
    }

    /// Commit the pending letters. On error the builder keeps them so the
    /// player can adjust.
    pub fn submit<D, R>(&self, dict: &D, rng: &mut R, now: u64) -> Result<(GameData, MoveOutcome), MoveError>
    where
        D: Dictionary + ?Sized,
        R: Rng + ?Sized,
    {
        apply_move(self.game, self.player, &self.mv, dict, rng, now)
    }
}
