use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction4 {
    Up,
    Right,
    Down,
    Left,
}

impl Direction4 {
    pub const ALL: [Direction4; 4] = [
        Direction4::Up,
        Direction4::Right,
        Direction4::Down,
        Direction4::Left,
    ];

    pub fn index(self) -> usize {
        match self {
            Direction4::Up => 0,
            Direction4::Right => 1,
            Direction4::Down => 2,
            Direction4::Left => 3,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Direction4::Up => Direction4::Down,
            Direction4::Right => Direction4::Left,
            Direction4::Down => Direction4::Up,
            Direction4::Left => Direction4::Right,
        }
    }

    /// Moves `(x, y)` one cell in this direction, staying inside `width`x`height`.
    pub fn move_pos(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        let pos = match self {
            Direction4::Up => (x, y.checked_sub(1)?),
            Direction4::Right => (x + 1, y),
            Direction4::Down => (x, y + 1),
            Direction4::Left => (x.checked_sub(1)?, y),
        };

        (pos.0 < width && pos.1 < height).then_some(pos)
    }
}

/// One value per side of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direction4Array<T>([T; 4]);

impl<T: Copy> Direction4Array<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Direction4, T)> + '_ {
        Direction4::ALL.into_iter().map(move |dir| (dir, self.0[dir.index()]))
    }
}

impl Direction4Array<bool> {
    pub const NONE: Self = Self([false; 4]);
    pub const ALL: Self = Self([true; 4]);

    pub fn only(dirs: &[Direction4]) -> Self {
        let mut arr = Self::NONE;
        for dir in dirs {
            arr[*dir] = true;
        }
        arr
    }

    pub fn sides(&self) -> impl Iterator<Item = Direction4> + '_ {
        self.iter().filter_map(|(dir, set)| set.then_some(dir))
    }
}

impl<T> Index<Direction4> for Direction4Array<T> {
    type Output = T;

    fn index(&self, dir: Direction4) -> &T {
        &self.0[dir.index()]
    }
}

impl<T> IndexMut<Direction4> for Direction4Array<T> {
    fn index_mut(&mut self, dir: Direction4) -> &mut T {
        &mut self.0[dir.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_pos_stays_in_bounds() {
        assert_eq!(Direction4::Up.move_pos(0, 0, 3, 3), None);
        assert_eq!(Direction4::Left.move_pos(0, 2, 3, 3), None);
        assert_eq!(Direction4::Right.move_pos(2, 0, 3, 3), None);
        assert_eq!(Direction4::Down.move_pos(1, 1, 3, 3), Some((1, 2)));
    }

    #[test]
    fn inverse_is_involution() {
        for dir in Direction4::ALL {
            assert_eq!(dir.inverse().inverse(), dir);
            assert_ne!(dir.inverse(), dir);
        }
    }

    #[test]
    fn only_sets_requested_sides() {
        let arr = Direction4Array::only(&[Direction4::Up, Direction4::Down]);
        let sides: Vec<_> = arr.sides().collect();
        assert_eq!(sides, vec![Direction4::Up, Direction4::Down]);
    }
}
