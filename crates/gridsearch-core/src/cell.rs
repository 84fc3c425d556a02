//! The [`Cell`] type: one node of the search graph.

use crate::geom::Pos;

/// What a cell is on the map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Open,
    Wall,
    Start,
    End,
}

impl Role {
    /// Whether a search may step onto a cell with this role.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Role::Wall)
    }
}

/// Paint state carried for renderers. The engine only writes it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paint {
    #[default]
    Blank,
    Wall,
    Visited,
    Path,
}

/// A single grid position.
///
/// Neighbors are stored as arena indices into the owning
/// [`Grid`](crate::Grid), sorted by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    pub(crate) role: Role,
    pub(crate) visited: bool,
    pub(crate) paint: Paint,
    pub(crate) neighbors: Vec<usize>,
}

impl Cell {
    pub(crate) fn new(pos: Pos) -> Self {
        Self {
            pos,
            role: Role::Open,
            visited: false,
            paint: Paint::Blank,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.role == Role::Wall
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.role == Role::End
    }

    #[inline]
    pub fn visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn paint(&self) -> Paint {
        self.paint
    }

    /// Arena indices of traversable orthogonal neighbours.
    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Mark visited and paint with the visited colour.
    pub fn visit(&mut self) {
        self.visited = true;
        self.paint = Paint::Visited;
    }

    /// Paint as part of the final path. Does not touch `visited`.
    pub fn mark_path(&mut self) {
        self.paint = Paint::Path;
    }

    /// Drop search marks, keeping role and adjacency.
    pub(crate) fn clear_marks(&mut self) {
        self.visited = false;
        self.paint = if self.is_wall() { Paint::Wall } else { Paint::Blank };
    }
}
