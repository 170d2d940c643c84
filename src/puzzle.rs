use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Read;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Direction the blank travels in a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Order in which [`Board::neighbors`] yields boards.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// (row, column) offset of the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable N×N sliding-tile configuration.
///
/// Tiles are stored row-major with `0` as the blank. The Manhattan distance
/// and blank position are computed once on construction; every operation that
/// "moves" a tile returns a new board.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
    distance: usize,
}

/// Largest board side accepted from input or generated at random.
pub const MAX_DIMENSION: usize = 1024;

impl Board {
    /// Fails with [`Error::InvalidDimension`] unless `1 <= size <= MAX_DIMENSION`.
    pub fn check_dimension(size: usize) -> Result<()> {
        if size == 0 || size > MAX_DIMENSION {
            return Err(Error::InvalidDimension {
                input: size.to_string(),
            });
        }
        Ok(())
    }

    /// Builds a board from rows, validating shape and tile set.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self> {
        let size = rows.len();
        Self::check_dimension(size)?;
        let mut tiles = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(Error::ColumnCount {
                    row,
                    expected: size,
                    got: values.len(),
                });
            }
            tiles.extend(values);
        }
        Self::from_tiles(size, tiles)
    }

    /// Builds a board from a row-major tile vector of length `size * size`.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Result<Self> {
        Self::check_dimension(size)?;
        if tiles.len() != size * size {
            return Err(Error::RowCount {
                expected: size,
                got: tiles.len() / size,
            });
        }

        let mut seen = vec![false; tiles.len()];
        for &value in &tiles {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(Error::TileOutOfRange {
                    value,
                    dimension: size,
                })?;
            if *slot {
                return Err(Error::DuplicateTile { value });
            }
            *slot = true;
        }

        Ok(Self::build(size, tiles))
    }

    /// The solved board: `1..N²-1` in row-major order, blank last.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or above [`MAX_DIMENSION`].
    pub fn goal(size: usize) -> Self {
        assert!(
            (1..=MAX_DIMENSION).contains(&size),
            "board dimension out of range"
        );
        let cells = (size * size) as u32;
        let tiles = (1..cells).chain(std::iter::once(0)).collect();
        Self::build(size, tiles)
    }

    /// Reads a board in the text interchange format.
    pub fn load<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    // Callers guarantee `tiles` is a permutation of 0..size².
    fn build(size: usize, tiles: Vec<u32>) -> Self {
        let blank = tiles.iter().position(|&value| value == 0).unwrap_or(0);
        let distance = manhattan_distance(size, &tiles);
        Self {
            size,
            tiles,
            blank,
            distance,
        }
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    /// (row, column) of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`Board::dimension`].
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) outside a {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        self.tiles[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.tiles.chunks(self.size)
    }

    /// Number of tiles, blank excluded, that are out of place.
    pub fn hamming(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(idx, &value)| value != 0 && value as usize != idx + 1)
            .count()
    }

    /// Sum of the grid distances of every tile from its goal cell.
    pub fn manhattan(&self) -> usize {
        self.distance
    }

    /// The search heuristic; an alias for [`Board::manhattan`].
    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn is_goal(&self) -> bool {
        self.distance == 0
    }

    /// Moves the blank one cell in `movement`'s direction.
    ///
    /// Returns `None` when the blank would leave the grid.
    pub fn slide(&self, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();
        let (row, col) = self.blank();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let size = self.size as isize;

        if new_row >= 0 && new_row < size && new_col >= 0 && new_col < size {
            let target = new_row as usize * self.size + new_col as usize;
            Some(self.swap(self.blank, target))
        } else {
            None
        }
    }

    /// Boards reachable by one slide, in [`Move::ALL`] order.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |movement| self.slide(movement))
    }

    /// The move that turns `self` into `next`, if they are neighbors.
    pub fn move_to(&self, next: &Board) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|&movement| self.slide(movement).as_ref() == Some(next))
    }

    /// Swaps two horizontally adjacent non-blank tiles.
    ///
    /// Uses the first two cells of row 0 when neither is blank, otherwise the
    /// first two cells of row 1. The result always has the opposite
    /// solvability of `self`.
    pub fn twin(&self) -> Result<Self> {
        if self.size < 2 {
            return Err(Error::TwinUndefined {
                dimension: self.size,
            });
        }
        if self.tiles[0] != 0 && self.tiles[1] != 0 {
            Ok(self.swap(0, 1))
        } else {
            Ok(self.swap(self.size, self.size + 1))
        }
    }

    fn swap(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Self::build(self.size, tiles)
    }

    /// Permutation-parity solvability check.
    ///
    /// The search never calls this; the twin engine decides solvability on
    /// its own. It is used to generate solvable random boards.
    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.tiles);

        if self.size % 2 == 1 {
            // Odd-sized puzzle: solvable if inversions count is even
            inversions % 2 == 0
        } else {
            // Even-sized puzzle: solvable if (inversions + blank row) is odd
            (inversions + self.blank / self.size) % 2 == 1
        }
    }

    /// A uniformly random permutation; may be unsolvable.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or above [`MAX_DIMENSION`].
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        assert!(
            (1..=MAX_DIMENSION).contains(&size),
            "board dimension out of range"
        );
        let mut tiles: Vec<u32> = (0..(size * size) as u32).collect();
        tiles.shuffle(rng);
        Self::build(size, tiles)
    }

    /// Shuffles until the result is solvable.
    pub fn random_solvable<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        loop {
            let board = Self::shuffled(size, rng);
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// A random walk of `steps` slides away from the goal.
    pub fn scrambled<R: Rng + ?Sized>(size: usize, steps: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(size);
        for _ in 0..steps {
            let options: Vec<Board> = board.neighbors().collect();
            match options.choose(rng) {
                Some(next) => board = next.clone(),
                None => break,
            }
        }
        board
    }
}

fn manhattan_distance(size: usize, tiles: &[u32]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != 0)
        .map(|(idx, &value)| {
            let target = (value - 1) as usize;
            (idx / size).abs_diff(target / size) + (idx % size).abs_diff(target % size)
        })
        .sum()
}

fn count_inversions(tiles: &[u32]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());

        let header = lines.next().ok_or(Error::MissingDimension)?;
        let size = header
            .parse::<usize>()
            .ok()
            .filter(|&n| (1..=MAX_DIMENSION).contains(&n))
            .ok_or_else(|| Error::InvalidDimension {
                input: header.to_string(),
            })?;

        let mut tiles = Vec::new();
        let mut rows = 0;
        for (row, line) in lines.take(size).enumerate() {
            let start = tiles.len();
            for token in line.split_whitespace() {
                let value = token.parse::<u32>().map_err(|_| Error::InvalidTile {
                    token: token.to_string(),
                    row,
                })?;
                tiles.push(value);
            }
            let got = tiles.len() - start;
            if got != size {
                return Err(Error::ColumnCount {
                    row,
                    expected: size,
                    got,
                });
            }
            rows += 1;
        }
        if rows != size {
            return Err(Error::RowCount {
                expected: size,
                got: rows,
            });
        }

        Board::from_tiles(size, tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size)?;
        for row in self.rows() {
            writeln!(f)?;
            for (col, &val) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:2}", val)?;
            }
        }
        Ok(())
    }
}
