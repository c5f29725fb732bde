//! Position snapshots.

use std::fmt;

use super::error::PositionError;
use super::eval::Evaluator;
use super::types::{
    mirror, on_last_rank, parse_cell, step, CastlingRights, Cell, Move, Piece, Side, A1, A8,
    BOARD_SIZE, H1, H8, N, S,
};
use crate::zobrist::{
    board_hashes, castling_key, cell_key, en_passant_key, rook_hop_key, rotated_cell_key,
};

/// A board snapshot, always seen from the side to move.
///
/// Positions are values: making a move builds a new, fully owned position
/// and never touches the parent.
#[derive(Clone, Debug)]
pub struct Position {
    board: [Cell; BOARD_SIZE],
    score: i32,
    ours: CastlingRights,
    theirs: CastlingRights,
    en_passant: usize,
    rook_hop: usize,
    hash: u64,
    rotated_hash: u64,
    side: Side,
}

impl Position {
    /// Build a position from a FEN placement field, the side to move, castling
    /// letters (`KQkq` or `-`) and an en-passant square (`e3` or `-`).
    pub fn new(
        layout: &str,
        side: Side,
        castling: &str,
        en_passant: &str,
        eval: &Evaluator,
    ) -> Result<Self, PositionError> {
        let board = parse_layout(layout)?;

        let mut white = CastlingRights::NONE;
        let mut black = CastlingRights::NONE;
        for c in castling.chars() {
            match c {
                'Q' => white.west = true,
                'K' => white.east = true,
                // Black's kingside rook sits in the west of Black's own frame.
                'k' => black.west = true,
                'q' => black.east = true,
                '-' => {}
                _ => return Err(PositionError::InvalidCastling { char: c }),
            }
        }

        let en_passant = match en_passant {
            "-" | "" => 0,
            square => {
                let cell = parse_cell(square).map_err(|_| PositionError::InvalidEnPassant {
                    found: square.to_string(),
                })?;
                // A target square is always behind the pawn that just moved:
                // rank 3 when Black is to move, rank 6 when White is.
                let expected_row = if side == Side::White { 4 } else { 7 };
                if cell / 10 != expected_row {
                    return Err(PositionError::InvalidEnPassant {
                        found: square.to_string(),
                    });
                }
                cell
            }
        };

        let (hash, rotated_hash) = board_hashes(&board);
        let white_view = Position {
            score: eval.score_board(&board),
            board,
            ours: white,
            theirs: black,
            en_passant,
            rook_hop: 0,
            hash,
            rotated_hash,
            side: Side::White,
        };
        Ok(match side {
            Side::White => white_view,
            Side::Black => white_view.rotate(false),
        })
    }

    /// The standard opening position, White to move.
    #[must_use]
    pub fn initial(eval: &Evaluator) -> Self {
        let board = initial_board();
        let (hash, rotated_hash) = board_hashes(&board);
        Position {
            score: eval.score_board(&board),
            board,
            ours: CastlingRights::BOTH,
            theirs: CastlingRights::BOTH,
            en_passant: 0,
            rook_hop: 0,
            hash,
            rotated_hash,
            side: Side::White,
        }
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.board[index]
    }

    #[must_use]
    pub fn board(&self) -> &[Cell; BOARD_SIZE] {
        &self.board
    }

    /// Material plus positional score from the mover's perspective.
    #[inline]
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Castling rights of the side to move.
    #[must_use]
    pub fn castling(&self) -> CastlingRights {
        self.ours
    }

    /// Castling rights of the opponent, in the opponent's frame.
    #[must_use]
    pub fn opponent_castling(&self) -> CastlingRights {
        self.theirs
    }

    /// En-passant target cell, 0 when there is none.
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> usize {
        self.en_passant
    }

    /// Cell the opponent's rook landed on when castling last ply, 0 if none.
    /// Capturing it, or the king cells beside it, counts as capturing the king.
    #[inline]
    #[must_use]
    pub fn rook_hop(&self) -> usize {
        self.rook_hop
    }

    /// Absolute side to move.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Table key: board, castling rights and en-passant / rook-hop targets.
    #[inline]
    #[must_use]
    pub fn key(&self) -> u64 {
        self.hash
            ^ castling_key(self.ours, self.theirs)
            ^ en_passant_key(self.en_passant)
            ^ rook_hop_key(self.rook_hop)
    }

    /// Convert a move between this position's frame and White's frame.
    #[must_use]
    pub fn to_absolute(&self, mv: Move) -> Move {
        match self.side {
            Side::White => mv,
            Side::Black => mv.rotate(),
        }
    }

    /// The position with the other side to move and nothing played.
    #[must_use]
    pub fn null_move(&self) -> Position {
        self.rotate(true)
    }

    /// Rotate the board for the other side. En-passant and rook-hop targets
    /// survive a real move but are dropped by a null move.
    fn rotate(&self, null_move: bool) -> Position {
        let mut board = self.board;
        board.reverse();
        for cell in &mut board {
            *cell = cell.swap();
        }
        let carry = |cell: usize| {
            if cell != 0 && !null_move {
                mirror(cell)
            } else {
                0
            }
        };
        Position {
            board,
            score: -self.score,
            ours: self.theirs,
            theirs: self.ours,
            en_passant: carry(self.en_passant),
            rook_hop: carry(self.rook_hop),
            hash: self.rotated_hash,
            rotated_hash: self.hash,
            side: self.side.opponent(),
        }
    }

    /// Play a pseudo-legal move and return the child, from the opponent's view.
    #[must_use]
    pub fn make_move(&self, mv: Move, eval: &Evaluator) -> Position {
        let (from, to) = (mv.from(), mv.to());
        let moving = self.board[from];
        let mut next = Position {
            score: self.score + eval.delta(self, mv),
            en_passant: 0,
            rook_hop: 0,
            ..self.clone()
        };

        next.put(to, moving);
        next.put(from, Cell::Empty);

        if from == A1 {
            next.ours = next.ours.without_west();
        }
        if from == H1 {
            next.ours = next.ours.without_east();
        }
        if to == A8 {
            next.theirs = next.theirs.without_east();
        }
        if to == H8 {
            next.theirs = next.theirs.without_west();
        }

        match moving {
            Cell::Own(Piece::King) => {
                next.ours = CastlingRights::NONE;
                if from.abs_diff(to) == 2 {
                    let hop = (from + to) / 2;
                    next.rook_hop = hop;
                    next.put(if to < from { A1 } else { H1 }, Cell::Empty);
                    next.put(hop, Cell::Own(Piece::Rook));
                }
            }
            Cell::Own(Piece::Pawn) => {
                if on_last_rank(to) {
                    let promo = mv.promotion().unwrap_or(Piece::Queen);
                    next.put(to, Cell::Own(promo));
                }
                if to == step(from, 2 * N) {
                    next.en_passant = step(from, N);
                }
                if to == self.en_passant {
                    next.put(step(to, S), Cell::Empty);
                }
            }
            _ => {}
        }

        next.rotate(false)
    }

    /// Overwrite one cell, keeping both frame hashes in step.
    fn put(&mut self, index: usize, contents: Cell) {
        let old = self.board[index];
        self.hash ^= cell_key(index, old) ^ cell_key(index, contents);
        self.rotated_hash ^= rotated_cell_key(index, old) ^ rotated_cell_key(index, contents);
        self.board[index] = contents;
    }

    /// Human-readable dump: the eight ranks (uppercase = side to move) and
    /// the castling / target fields.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(96);
        for rank in 0..8 {
            for file in 0..8 {
                out.push(self.board[A8 + rank * 10 + file].to_char());
            }
            out.push('\n');
        }
        let flag = |b: bool| if b { '1' } else { '0' };
        out.push(flag(self.ours.west));
        out.push(flag(self.ours.east));
        out.push(flag(self.theirs.west));
        out.push(flag(self.theirs.east));
        out.push_str(&format!(" {} {}", self.en_passant, self.rook_hop));
        out
    }
}

/// Positions compare by their table identity, not by score or orientation.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.ours == other.ours
            && self.theirs == other.theirs
            && self.en_passant == other.en_passant
            && self.rook_hop == other.rook_hop
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

fn initial_board() -> [Cell; BOARD_SIZE] {
    const BACK_RANK: [Piece; 8] = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];
    let mut board = [Cell::Offboard; BOARD_SIZE];
    for (file, &piece) in BACK_RANK.iter().enumerate() {
        board[A8 + file] = Cell::Enemy(piece);
        board[A8 + 10 + file] = Cell::Enemy(Piece::Pawn);
        for row in 2..6 {
            board[A8 + row * 10 + file] = Cell::Empty;
        }
        board[A1 - 10 + file] = Cell::Own(Piece::Pawn);
        board[A1 + file] = Cell::Own(piece);
    }
    board
}

/// Expand a FEN placement field into a padded board in White's frame.
fn parse_layout(layout: &str) -> Result<[Cell; BOARD_SIZE], PositionError> {
    let ranks: Vec<&str> = layout.split('/').collect();
    if ranks.len() != 8 {
        return Err(PositionError::WrongRankCount { found: ranks.len() });
    }

    let mut board = [Cell::Offboard; BOARD_SIZE];
    for (row, rank) in ranks.iter().enumerate() {
        let mut file = 0usize;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                for _ in 0..skip {
                    if file < 8 {
                        board[A8 + row * 10 + file] = Cell::Empty;
                    }
                    file += 1;
                }
                continue;
            }
            let piece = Piece::from_char(c).ok_or(PositionError::InvalidPiece { char: c })?;
            if file < 8 {
                board[A8 + row * 10 + file] = if c.is_ascii_uppercase() {
                    Cell::Own(piece)
                } else {
                    Cell::Enemy(piece)
                };
            }
            file += 1;
        }
        if file != 8 {
            return Err(PositionError::BadRankWidth {
                rank: 8 - row,
                files: file,
            });
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::STANDARD;

    const INITIAL_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn initial_matches_layout_constructor() {
        let a = Position::initial(&STANDARD);
        let b = Position::new(INITIAL_LAYOUT, Side::White, "KQkq", "-", &STANDARD).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn initial_score_is_table_asymmetry() {
        // The tables are not left-right symmetric, so the start is not 0.
        assert_eq!(Position::initial(&STANDARD).score(), 38);
    }

    #[test]
    fn rejects_bad_layouts() {
        assert_eq!(
            Position::new("8/8/8", Side::White, "-", "-", &STANDARD).unwrap_err(),
            PositionError::WrongRankCount { found: 3 }
        );
        assert_eq!(
            Position::new("8/8/8/8/8/8/8/7", Side::White, "-", "-", &STANDARD).unwrap_err(),
            PositionError::BadRankWidth { rank: 1, files: 7 }
        );
        assert_eq!(
            Position::new("8/8/8/8/8/8/8/7x", Side::White, "-", "-", &STANDARD).unwrap_err(),
            PositionError::InvalidPiece { char: 'x' }
        );
        assert_eq!(
            Position::new(INITIAL_LAYOUT, Side::White, "KX", "-", &STANDARD).unwrap_err(),
            PositionError::InvalidCastling { char: 'X' }
        );
        assert!(matches!(
            Position::new(INITIAL_LAYOUT, Side::White, "-", "e9", &STANDARD),
            Err(PositionError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Position::new(INITIAL_LAYOUT, Side::White, "-", "e3", &STANDARD),
            Err(PositionError::InvalidEnPassant { .. })
        ));
    }

    #[test]
    fn sentinels_surround_the_board() {
        let pos = Position::initial(&STANDARD);
        assert_eq!(pos.cell(0), Cell::Offboard);
        assert_eq!(pos.cell(A8 - 1), Cell::Offboard);
        assert_eq!(pos.cell(H1 + 1), Cell::Offboard);
        assert_eq!(pos.cell(119), Cell::Offboard);
        assert_eq!(pos.cell(55), Cell::Empty);
    }

    #[test]
    fn make_move_rotates_and_negates() {
        let pos = Position::initial(&STANDARD);
        let mv: Move = "e2e4".parse().unwrap();
        let delta = STANDARD.delta(&pos, mv);
        let child = pos.make_move(mv, &STANDARD);

        assert_eq!(child.score(), -(pos.score() + delta));
        assert_eq!(child.side(), Side::Black);
        // e3 seen from Black's frame.
        assert_eq!(child.en_passant(), mirror(75));
        assert_eq!(child.cell(mirror(65)), Cell::Enemy(Piece::Pawn));
        // The parent is untouched.
        assert_eq!(pos.cell(85), Cell::Own(Piece::Pawn));
    }

    #[test]
    fn incremental_hash_matches_scratch_hash() {
        let pos = Position::initial(&STANDARD);
        let child = pos
            .make_move("g1f3".parse().unwrap(), &STANDARD)
            .make_move("b1c3".parse::<Move>().unwrap(), &STANDARD);
        let (hash, rotated) = board_hashes(&child.board);
        assert_eq!(child.hash, hash);
        assert_eq!(child.rotated_hash, rotated);
    }

    #[test]
    fn null_move_clears_targets() {
        let pos = Position::initial(&STANDARD).make_move("e2e4".parse().unwrap(), &STANDARD);
        assert_ne!(pos.en_passant(), 0);
        let passed = pos.null_move();
        assert_eq!(passed.en_passant(), 0);
        assert_eq!(passed.score(), -pos.score());
        assert_eq!(passed.null_move().side(), pos.side());
    }

    #[test]
    fn black_to_move_is_rotated() {
        let pos = Position::new(INITIAL_LAYOUT, Side::Black, "KQkq", "-", &STANDARD).unwrap();
        assert_eq!(pos.side(), Side::Black);
        // Black's king, on e8, sits on d1's cell in Black's frame.
        assert_eq!(pos.cell(94), Cell::Own(Piece::King));
        assert_eq!(pos.castling(), CastlingRights::BOTH);
    }

    #[test]
    fn serialize_shows_mover_in_uppercase() {
        let text = Position::initial(&STANDARD).serialize();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("rnbqkbnr"));
        assert_eq!(lines.nth(6), Some("RNBQKBNR"));
        assert_eq!(lines.next(), Some("1111 0 0"));
    }
}
