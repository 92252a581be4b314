//! Shared board access for concurrent readers.
//!
//! Move generation only needs `&Board`, so any number of readers can run at
//! once. Whoever applies moves takes the write lock, which keeps generation
//! from ever seeing a half-updated board.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::board::{Board, Piece, Position};

/// A board behind a read-write lock, cheap to clone between threads.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<RwLock<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(RwLock::new(board)))
    }

    /// Targets of the piece on `from`, generated under a read lock.
    #[must_use]
    pub fn moves_from(&self, from: Position) -> Vec<Position> {
        self.0.read().moves_from(from)
    }

    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.0.read().piece_at(position)
    }

    /// Hold the read lock for several queries against one consistent board.
    #[must_use]
    pub fn read(&self) -> RwLockReadGuard<'_, Board> {
        self.0.read()
    }

    /// Copy of the current board, for snapshot-then-generate use.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.read().clone()
    }

    /// Mutate the board under the write lock.
    pub fn update<T>(&self, f: impl FnOnce(&mut Board) -> T) -> T {
        f(&mut *self.0.write())
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}
