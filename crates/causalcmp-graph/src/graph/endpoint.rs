//! Endpoint marks.

use serde::{Deserialize, Serialize};

/// The mark at one end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Tail,
    Arrow,
    Circle,
    Null,
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tail => "tail",
            Self::Arrow => "arrow",
            Self::Circle => "circle",
            Self::Null => "null",
        }
    }

    /// Symbol when this mark sits at the left node of a printed edge.
    pub fn left_symbol(&self) -> char {
        match self {
            Self::Tail => '-',
            Self::Arrow => '<',
            Self::Circle => 'o',
            Self::Null => '.',
        }
    }

    /// Symbol when this mark sits at the right node of a printed edge.
    pub fn right_symbol(&self) -> char {
        match self {
            Self::Tail => '-',
            Self::Arrow => '>',
            Self::Circle => 'o',
            Self::Null => '.',
        }
    }

    pub fn from_left_symbol(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Tail),
            '<' => Some(Self::Arrow),
            'o' => Some(Self::Circle),
            '.' => Some(Self::Null),
            _ => None,
        }
    }

    pub fn from_right_symbol(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Tail),
            '>' => Some(Self::Arrow),
            'o' => Some(Self::Circle),
            '.' => Some(Self::Null),
            _ => None,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
