// Coordinate (row, col), entrambi in 0..8. La riga 0 e' la traversa di partenza
// del giocatore +1 (Red), la riga 7 quella del giocatore -1 (White).

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

pub const BOARD_SIZE: usize = 8;

/// Side identified by the sign of its pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    /// `+1`: starts on rows 0-2 and moves toward increasing rows.
    Red = 1,
    /// `-1`: starts on rows 5-7 and moves toward decreasing rows.
    White = -1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::White];

    pub fn sign(self) -> i32 {
        self as i32
    }

    pub fn from_sign(sign: i32) -> Option<Player> {
        match sign {
            1 => Some(Player::Red),
            -1 => Some(Player::White),
            _ => None,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::White,
            Player::White => Player::Red,
        }
    }

    /// Row delta of a forward step for this side's men.
    pub fn forward(self) -> i8 {
        self as i8
    }

    /// Row on which this side's men are crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::Red => (BOARD_SIZE - 1) as u8,
            Player::White => 0,
        }
    }

    /// Maximizing side of the search.
    pub fn is_maximizer(self) -> bool {
        self == Player::Red
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "red"),
            Player::White => write!(f, "white"),
        }
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "1" | "+1" => Ok(Player::Red),
            "white" | "-1" => Ok(Player::White),
            other => Err(format!("unknown player '{}'", other)),
        }
    }
}

/// A cell of the 8x8 grid. Construction is bounds-checked, so every `Square`
/// in circulation is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> Result<Square, EngineError> {
        if Self::on_board(row, col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }

    fn on_board(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Neighbour `steps` diagonal steps away in direction `(dr, dc)`, if still on the board.
    pub fn offset(self, dr: i8, dc: i8, steps: i8) -> Option<Square> {
        let row = self.row as i32 + (dr as i32) * (steps as i32);
        let col = self.col as i32 + (dc as i32) * (steps as i32);
        Square::new(row, col).ok()
    }

    /// Dark squares are the playable ones in the initial layout.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A man or a king. `row`/`col` always mirror the cell holding the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub player: Player,
    pub king: bool,
    row: u8,
    col: u8,
}

impl Piece {
    pub fn new(player: Player, square: Square) -> Self {
        Self {
            player,
            king: false,
            row: square.row(),
            col: square.col(),
        }
    }

    pub fn square(&self) -> Square {
        Square {
            row: self.row,
            col: self.col,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn promote(&mut self) {
        self.king = true;
    }

    fn move_to(&mut self, square: Square) {
        self.row = square.row();
        self.col = square.col();
    }

    fn symbol(&self) -> char {
        match (self.player, self.king) {
            (Player::Red, false) => 'r',
            (Player::Red, true) => 'R',
            (Player::White, false) => 'w',
            (Player::White, true) => 'W',
        }
    }
}

/// Transient description of a transition: `start -> end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Bounds-checked construction from the raw 4-tuple.
    pub fn from_coords(
        start_row: i32,
        start_col: i32,
        end_row: i32,
        end_col: i32,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            from: Square::new(start_row, start_col)?,
            to: Square::new(end_row, end_col)?,
        })
    }

    pub fn row_delta(&self) -> i32 {
        self.to.row() as i32 - self.from.row() as i32
    }

    pub fn col_delta(&self) -> i32 {
        self.to.col() as i32 - self.from.col() as i32
    }

    /// Two-square diagonal jump.
    pub fn is_jump(&self) -> bool {
        self.row_delta().abs() == 2 && self.col_delta().abs() == 2
    }

    /// Cell jumped over by a two-square move.
    pub fn midpoint(&self) -> Option<Square> {
        if !self.is_jump() {
            return None;
        }
        let row = (self.from.row() + self.to.row()) / 2;
        let col = (self.from.col() + self.to.col()) / 2;
        Square::new(row as i32, col as i32).ok()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.from.row(),
            self.from.col(),
            self.to.row(),
            self.to.col()
        )
    }
}

/// Starting array: `1` for Red men, `-1` for White men, `0` for empty.
pub fn initial_layout() -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
    let mut layout = [[0i8; BOARD_SIZE]; BOARD_SIZE];
    for (row, cells) in layout.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            let dark = (row + col) % 2 == 1;
            *cell = match row {
                0..=2 if dark => 1,
                5..=7 if dark => -1,
                _ => 0,
            };
        }
    }
    layout
}

/// The position grid. `Copy`, so every search branch owns an independent
/// snapshot and no piece is ever shared between two boards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Standard starting position, 12 men per side.
    pub fn new() -> Self {
        Self::from_layout(&initial_layout())
    }

    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds pieces from a signed integer array; any value other than +1/-1 is empty.
    pub fn from_layout(layout: &[[i8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (row, cells) in layout.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if let Some(player) = Player::from_sign(value as i32) {
                    let sq = Square {
                        row: row as u8,
                        col: col as u8,
                    };
                    board.place(sq, player, false);
                }
            }
        }
        board
    }

    /// Position from explicit `(row, col, player, king)` entries.
    pub fn from_pieces(pieces: &[(i32, i32, Player, bool)]) -> Result<Self, EngineError> {
        let mut board = Self::empty();
        for &(row, col, player, king) in pieces {
            board.place(Square::new(row, col)?, player, king);
        }
        Ok(board)
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Puts a fresh piece on `sq`, replacing whatever was there.
    pub fn place(&mut self, sq: Square, player: Player, king: bool) {
        let mut piece = Piece::new(player, sq);
        piece.king = king;
        self.cells[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Moves the piece on `from` to `to`, keeping its stored coordinates in sync.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.remove(from)?;
        piece.move_to(to);
        self.cells[to.row() as usize][to.col() as usize] = Some(piece);
        Some(piece)
    }

    pub(crate) fn promote(&mut self, sq: Square) {
        if let Some(piece) = self.cells[sq.row() as usize][sq.col() as usize].as_mut() {
            piece.promote();
        }
    }

    /// All pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.player == player)
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    pub fn kings(&self, player: Player) -> usize {
        self.pieces_of(player).filter(|p| p.king).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

// Diagramma testuale, riga 0 in alto
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", row)?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, " {}", piece.symbol())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
