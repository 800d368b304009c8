use crate::grid::{Cell, Heading};
use std::collections::VecDeque;

/// Body segments, tail at the front, head at the back.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Lay out `length` cells ending just before `head_end`, travelling in
    /// `heading`.
    pub fn new(head_end: Cell, heading: Heading, length: usize) -> Self {
        let (dx, dy) = heading.delta();
        let body = (1..=length as i32)
            .rev()
            .map(|i| Cell::new(head_end.x - dx * i, head_end.y - dy * i))
            .collect();
        Self { body }
    }

    pub fn head(&self) -> Cell {
        // A snake is never built empty and the tail is only popped after a push.
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Tail first.
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = Cell> + ExactSizeIterator + '_ {
        self.body.iter().copied()
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_back(cell);
    }

    pub fn pop_tail(&mut self) -> Option<Cell> {
        self.body.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let snake = Snake::new(Cell::new(8, 10), Heading::Right, 4);
        let cells: Vec<_> = snake.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(4, 10),
                Cell::new(5, 10),
                Cell::new(6, 10),
                Cell::new(7, 10)
            ]
        );
        assert_eq!(snake.head(), Cell::new(7, 10));
        assert_eq!(snake.tail(), Cell::new(4, 10));
    }

    #[test]
    fn test_push_and_pop() {
        let mut snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);
        snake.push_head(Cell::new(5, 5));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.pop_tail(), Some(Cell::new(2, 5)));
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_contains() {
        let snake = Snake::new(Cell::new(3, 3), Heading::Down, 2);
        assert!(snake.contains(Cell::new(3, 1)));
        assert!(snake.contains(Cell::new(3, 2)));
        assert!(!snake.contains(Cell::new(3, 3)));
    }
}
