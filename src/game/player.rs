use crate::maze::NodeId;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The user's cursor and the log of every cell it stepped onto.
#[derive(Debug, Clone, Default)]
pub struct Player {
    position: (u16, u16),
    /// Destination of every successful move, revisits included.
    log: Vec<NodeId>,
}

impl Player {
    pub fn new(position: (u16, u16)) -> Self {
        Player {
            position,
            log: Vec::new(),
        }
    }

    pub fn position(&self) -> (u16, u16) {
        self.position
    }

    pub fn log(&self) -> &[NodeId] {
        &self.log
    }

    /// Number of successful moves so far.
    pub fn moves(&self) -> usize {
        self.log.len()
    }

    /// Coordinate one step away in `direction`, or `None` when it would leave the
    /// `width x height` bounds.
    pub fn target(&self, direction: Direction, width: u16, height: u16) -> Option<(u16, u16)> {
        let (x, y) = self.position;
        let target = match direction {
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Right => (x.checked_add(1)?, y),
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Down => (x, y.checked_add(1)?),
        };
        (target.0 < width && target.1 < height).then_some(target)
    }

    pub(crate) fn step_to(&mut self, position: (u16, u16), node: NodeId) {
        self.position = position;
        self.log.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_respects_bounds() {
        let player = Player::new((0, 0));
        assert_eq!(player.target(Direction::Up, 3, 3), None);
        assert_eq!(player.target(Direction::Left, 3, 3), None);
        assert_eq!(player.target(Direction::Right, 3, 3), Some((1, 0)));
        assert_eq!(player.target(Direction::Down, 3, 3), Some((0, 1)));

        let corner = Player::new((2, 2));
        assert_eq!(corner.target(Direction::Right, 3, 3), None);
        assert_eq!(corner.target(Direction::Down, 3, 3), None);
        assert_eq!(corner.target(Direction::Up, 3, 3), Some((2, 1)));
    }

    #[test]
    fn test_step_logs_destination() {
        let mut player = Player::new((0, 0));
        player.step_to((1, 0), 1);
        player.step_to((0, 0), 0);
        assert_eq!(player.position(), (0, 0));
        assert_eq!(player.log(), &[1, 0]);
        assert_eq!(player.moves(), 2);
    }
}
