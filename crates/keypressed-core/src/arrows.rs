// Keypressed Arrows
// Directional projection of held keys for arrow-key and WASD layouts

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::Key;

/// Horizontal and vertical input, each in `{-1, 0, 1}`.
///
/// `x` grows to the right, `y` grows upwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arrows {
    pub x: i8,
    pub y: i8,
}

impl Arrows {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The compass direction of this input
    pub fn direction(self) -> Direction {
        direction(self)
    }
}

/// Eight compass points plus no direction at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    NoDirection,
}

/// Which keys drive the directional projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    /// ArrowUp, ArrowDown, ArrowLeft, ArrowRight
    #[default]
    Arrows,
    /// W, A, S, D in either case
    Wasd,
}

impl Layout {
    /// Project held keys onto this layout
    pub fn arrows<'a>(self, keys: impl IntoIterator<Item = &'a Key>) -> Arrows {
        match self {
            Layout::Arrows => arrows(keys),
            Layout::Wasd => wasd(keys),
        }
    }

    pub fn direction<'a>(self, keys: impl IntoIterator<Item = &'a Key>) -> Direction {
        self.arrows(keys).direction()
    }
}

#[derive(Default)]
struct Held {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Held {
    fn arrows(&self) -> Arrows {
        Arrows {
            x: self.right as i8 - self.left as i8,
            y: self.up as i8 - self.down as i8,
        }
    }
}

/// Project held arrow keys onto `x`/`y`.
///
/// Opposite keys held together cancel out.
pub fn arrows<'a>(keys: impl IntoIterator<Item = &'a Key>) -> Arrows {
    let mut held = Held::default();
    for key in keys {
        match key {
            Key::ArrowUp => held.up = true,
            Key::ArrowDown => held.down = true,
            Key::ArrowLeft => held.left = true,
            Key::ArrowRight => held.right = true,
            _ => {}
        }
    }
    held.arrows()
}

/// Project held W/A/S/D character keys onto `x`/`y`, ignoring case
pub fn wasd<'a>(keys: impl IntoIterator<Item = &'a Key>) -> Arrows {
    let mut held = Held::default();
    for key in keys {
        match key.as_character() {
            Some("W" | "w") => held.up = true,
            Some("S" | "s") => held.down = true,
            Some("A" | "a") => held.left = true,
            Some("D" | "d") => held.right = true,
            _ => {}
        }
    }
    held.arrows()
}

/// Map `x`/`y` onto a compass direction
///
/// Values outside `{-1, 0, 1}` have no direction.
pub fn direction(arrows: Arrows) -> Direction {
    match (arrows.x, arrows.y) {
        (0, 1) => Direction::North,
        (1, 1) => Direction::NorthEast,
        (1, 0) => Direction::East,
        (1, -1) => Direction::SouthEast,
        (0, -1) => Direction::South,
        (-1, -1) => Direction::SouthWest,
        (-1, 0) => Direction::West,
        (-1, 1) => Direction::NorthWest,
        _ => Direction::NoDirection,
    }
}

/// Direction of the held arrow keys
pub fn arrows_direction<'a>(keys: impl IntoIterator<Item = &'a Key>) -> Direction {
    direction(arrows(keys))
}

/// Direction of the held W/A/S/D keys
pub fn wasd_direction<'a>(keys: impl IntoIterator<Item = &'a Key>) -> Direction {
    direction(wasd(keys))
}
