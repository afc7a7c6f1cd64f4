use crate::maze::Direction;

/// One cell of the labyrinth: four wall flags, a transient visited marker
/// and the display kind. A wall flag is `true` when the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    /// Traversal marker, reset between passes and never persisted.
    pub visited: bool,
    pub kind: TileKind,
    pub x: u16,
    pub y: u16,
}

impl Tile {
    /// A fully walled free tile at the given coordinates.
    pub fn new(x: u16, y: u16) -> Self {
        Tile {
            top: true,
            bottom: true,
            left: true,
            right: true,
            visited: false,
            kind: TileKind::Free,
            x,
            y,
        }
    }

    /// Whether the wall on the given side is present.
    pub fn wall(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set_wall(&mut self, side: Direction, present: bool) {
        match side {
            Direction::Up => self.top = present,
            Direction::Down => self.bottom = present,
            Direction::Left => self.left = present,
            Direction::Right => self.right = present,
        }
    }
}

/// What a tile displays as: free space, the two endpoint markers, or a
/// segment of the solved route.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    #[default]
    Free,
    Start,
    Finish,
    /// Part of the solution route, with the segment shape.
    Route(PathShape),
}

impl TileKind {
    /// The digit persisted by the codec. Route tiles are never persisted.
    pub fn digit(self) -> Option<char> {
        match self {
            TileKind::Free => Some('0'),
            TileKind::Start => Some('1'),
            TileKind::Finish => Some('2'),
            TileKind::Route(_) => None,
        }
    }

    pub fn from_digit(digit: char) -> Option<TileKind> {
        match digit {
            '0' => Some(TileKind::Free),
            '1' => Some(TileKind::Start),
            '2' => Some(TileKind::Finish),
            _ => None,
        }
    }
}

/// Shape of one solved-route segment, derived from the pair of cell sides
/// the route runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape {
    Vertical,
    Horizontal,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl PathShape {
    /// Shape of a route segment from the side facing the previous path cell
    /// and the side facing the next one.
    pub fn from_links(towards_prev: Direction, towards_next: Direction) -> PathShape {
        use Direction::*;
        match (towards_prev, towards_next) {
            (Up, Down) | (Down, Up) => PathShape::Vertical,
            (Left, Right) | (Right, Left) => PathShape::Horizontal,
            (Up, Right) | (Right, Up) => PathShape::UpRight,
            (Up, Left) | (Left, Up) => PathShape::UpLeft,
            (Down, Right) | (Right, Down) => PathShape::DownRight,
            (Down, Left) | (Left, Down) => PathShape::DownLeft,
            // A simple path cannot enter and leave through the same side.
            _ => unreachable!("route segment with duplicate sides"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn test_new_tile_is_fully_walled() {
        let tile = Tile::new(3, 7);
        assert!(tile.top && tile.bottom && tile.left && tile.right);
        assert!(!tile.visited);
        assert_eq!(tile.kind, TileKind::Free);
        assert_eq!((tile.x, tile.y), (3, 7));
    }

    #[test]
    fn test_wall_accessors_agree() {
        let mut tile = Tile::new(0, 0);
        tile.set_wall(Direction::Right, false);
        assert!(!tile.wall(Direction::Right));
        assert!(!tile.right);
        assert!(tile.wall(Direction::Left));
    }

    #[test]
    fn test_kind_digits_round_trip() {
        for kind in [TileKind::Free, TileKind::Start, TileKind::Finish] {
            let digit = kind.digit().unwrap();
            assert_eq!(TileKind::from_digit(digit), Some(kind));
        }
        assert_eq!(TileKind::Route(PathShape::Vertical).digit(), None);
        assert_eq!(TileKind::from_digit('7'), None);
    }

    #[test]
    fn test_shape_from_links() {
        use Direction::*;
        assert_eq!(PathShape::from_links(Up, Down), PathShape::Vertical);
        assert_eq!(PathShape::from_links(Down, Up), PathShape::Vertical);
        assert_eq!(PathShape::from_links(Left, Right), PathShape::Horizontal);
        assert_eq!(PathShape::from_links(Right, Up), PathShape::UpRight);
        assert_eq!(PathShape::from_links(Up, Left), PathShape::UpLeft);
        assert_eq!(PathShape::from_links(Down, Right), PathShape::DownRight);
        assert_eq!(PathShape::from_links(Left, Down), PathShape::DownLeft);
    }
}
