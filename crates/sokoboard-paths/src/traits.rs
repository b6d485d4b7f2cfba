use sokoboard_core::Position;

/// Neighbour enumeration for a breadth-first traversal.
pub trait Pather {
    /// Append the admissible neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

impl<P: Pather + ?Sized> Pather for &P {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        (**self).neighbors(p, buf)
    }
}
