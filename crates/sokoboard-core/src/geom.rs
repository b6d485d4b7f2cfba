//! Geometry primitives: [`Position`] and [`Direction`].
//!
//! Board coordinates are non-negative. Translating a position therefore goes
//! through signed checked arithmetic, so that "up from row 0" or "left from
//! column 0" comes back as `None` instead of wrapping around.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A board coordinate. X is the column and grows right, Y is the row and
/// grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new position from a column and a row.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The position one cell away in direction `dir`, or `None` if that
    /// would leave the non-negative quadrant.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        self.step_n(dir, 1)
    }

    /// The position `n` cells away in direction `dir`.
    #[inline]
    pub fn step_n(self, dir: Direction, n: usize) -> Option<Self> {
        let n = isize::try_from(n).ok()?;
        let (dx, dy) = dir.delta();
        Some(Self {
            x: self.x.checked_add_signed(dx.checked_mul(n)?)?,
            y: self.y.checked_add_signed(dy.checked_mul(n)?)?,
        })
    }

    #[inline]
    pub fn up(self) -> Option<Self> {
        self.step(Direction::Up)
    }

    #[inline]
    pub fn down(self) -> Option<Self> {
        self.step(Direction::Down)
    }

    #[inline]
    pub fn left(self) -> Option<Self> {
        self.step(Direction::Left)
    }

    #[inline]
    pub fn right(self) -> Option<Self> {
        self.step(Direction::Right)
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        manhattan(self, other) == 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> usize {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// The two movement axes of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Direction {
    /// All directions, clockwise from up. This is the neighbour order used
    /// everywhere on the board.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Signed `(dx, dy)` offset of a single step.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

impl Axis {
    /// Both axes, vertical first.
    pub const ALL: [Axis; 2] = [Axis::Vertical, Axis::Horizontal];

    /// The two directions along this axis, negative side first.
    #[inline]
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Vertical => [Direction::Up, Direction::Down],
            Axis::Horizontal => [Direction::Left, Direction::Right],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_at_origin_does_not_wrap() {
        let p = Position::ZERO;
        assert_eq!(p.up(), None);
        assert_eq!(p.left(), None);
        assert_eq!(p.down(), Some(Position::new(0, 1)));
        assert_eq!(p.right(), Some(Position::new(1, 0)));
    }

    #[test]
    fn step_n_checks_every_cell() {
        let p = Position::new(1, 3);
        assert_eq!(p.step_n(Direction::Left, 1), Some(Position::new(0, 3)));
        assert_eq!(p.step_n(Direction::Left, 2), None);
        assert_eq!(p.step_n(Direction::Up, 3), Some(Position::new(1, 0)));
        assert_eq!(p.step_n(Direction::Down, 2), Some(Position::new(1, 5)));
    }

    #[test]
    fn step_at_usize_max_is_none() {
        let p = Position::new(usize::MAX, 0);
        assert_eq!(p.right(), None);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Position::new(2, 0),
            Position::new(0, 1),
            Position::new(1, 0),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn axis_directions() {
        for axis in Axis::ALL {
            for d in axis.directions() {
                assert_eq!(d.axis(), axis);
            }
        }
        assert_eq!(Axis::Vertical.directions(), [Direction::Up, Direction::Down]);
    }

    #[test]
    fn adjacency() {
        let p = Position::new(2, 2);
        assert!(p.is_adjacent(Position::new(2, 1)));
        assert!(!p.is_adjacent(Position::new(3, 3)));
        assert!(!p.is_adjacent(p));
        assert_eq!(manhattan(Position::new(0, 4), Position::new(3, 0)), 7);
    }
}
