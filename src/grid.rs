use rand::seq::SliceRandom;
use rand::Rng;

/// A cell on the playfield. Coordinates may go out of bounds while a move is
/// being checked; the grid decides whether they are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Unit vector, y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub fn area(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// All cells not rejected by `occupied`, row by row.
    pub fn free_cells(&self, occupied: impl Fn(Cell) -> bool) -> Vec<Cell> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|&cell| !occupied(cell))
            .collect()
    }

    /// Uniform pick among the free cells, `None` once the board is full.
    pub fn spawn_food<R: Rng>(&self, rng: &mut R, occupied: impl Fn(Cell) -> bool) -> Option<Cell> {
        self.free_cells(occupied).choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds() {
        let grid = Grid::new(24, 20);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(23, 19)));
        assert!(!grid.contains(Cell::new(-1, 5)));
        assert!(!grid.contains(Cell::new(24, 5)));
        assert!(!grid.contains(Cell::new(5, 20)));
        assert!(!grid.contains(Cell::new(5, -1)));
    }

    #[test]
    fn test_heading_opposites() {
        for heading in [Heading::Up, Heading::Down, Heading::Left, Heading::Right] {
            let (dx, dy) = heading.delta();
            let (ox, oy) = heading.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(heading.opposite().opposite(), heading);
        }
    }

    #[test]
    fn test_free_cells_excludes_occupied() {
        let grid = Grid::new(3, 2);
        let taken = [Cell::new(0, 0), Cell::new(2, 1)];
        let free = grid.free_cells(|c| taken.contains(&c));
        assert_eq!(free.len(), 4);
        assert!(free.iter().all(|c| !taken.contains(c)));
    }

    #[test]
    fn test_spawn_food_avoids_occupied() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let food = grid.spawn_food(&mut rng, |c| c.x < 3).unwrap();
            assert_eq!(food.x, 3);
        }
    }

    #[test]
    fn test_spawn_food_on_full_board() {
        let grid = Grid::new(2, 2);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(grid.spawn_food(&mut rng, |_| true), None);
    }
}
