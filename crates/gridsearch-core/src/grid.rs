//! The [`Grid`] type: a flat arena of [`Cell`]s with 4-way adjacency.
//!
//! Cells reference their neighbours by arena index, so the search graph has
//! no ownership cycles and lookups stay O(1). Roles (walls, start, end) are
//! editable until [`compute_neighbors`](Grid::compute_neighbors) runs; after
//! that the map is frozen and only search marks change.

use std::fmt;

use crate::cell::{Cell, Paint, Role};
use crate::error::GridError;
use crate::geom::{Bounds, Pos};

/// A rectangular search grid.
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
    start: Option<usize>,
    end: Option<usize>,
    adjacency: bool,
}

impl Grid {
    /// Create a grid of `rows × cols` open cells with no endpoints.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        let cells = bounds.iter().map(Cell::new).collect();
        Self {
            bounds,
            cells,
            start: None,
            end: None,
            adjacency: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// Arena index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Position of the cell at arena index `idx`.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        self.cells[idx].pos()
    }

    /// The cell at `p`, if in bounds.
    pub fn cell(&self, p: Pos) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The cell at arena index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access for search marks. Roles cannot be changed through a
    /// `Cell`, only through the grid's setters.
    #[inline]
    pub fn cell_at_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn start(&self) -> Option<Pos> {
        self.start.map(|i| self.pos(i))
    }

    pub fn end(&self) -> Option<Pos> {
        self.end.map(|i| self.pos(i))
    }

    #[inline]
    pub fn start_index(&self) -> Option<usize> {
        self.start
    }

    #[inline]
    pub fn end_index(&self) -> Option<usize> {
        self.end
    }

    /// Whether [`compute_neighbors`](Self::compute_neighbors) has run.
    #[inline]
    pub fn has_adjacency(&self) -> bool {
        self.adjacency
    }

    /// Whether a search can run: adjacency computed and both endpoints set.
    pub fn is_ready(&self) -> bool {
        self.adjacency && self.start.is_some() && self.end.is_some()
    }

    /// Number of cells with the given role.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.role == role).count()
    }

    /// Number of traversable cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_wall()).count()
    }

    fn checked_index(&self, p: Pos) -> Result<usize, GridError> {
        if self.adjacency {
            return Err(GridError::Frozen);
        }
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// Turn `p` into a wall.
    ///
    /// Returns `Ok(false)` if the cell already was a wall; repeated placements
    /// are absorbed.
    pub fn set_wall(&mut self, p: Pos) -> Result<bool, GridError> {
        let i = self.checked_index(p)?;
        let cell = &mut self.cells[i];
        match cell.role {
            Role::Wall => Ok(false),
            Role::Start | Role::End => Err(GridError::WallEndpoint {
                pos: p,
                role: cell.role,
            }),
            Role::Open => {
                cell.role = Role::Wall;
                cell.paint = Paint::Wall;
                Ok(true)
            }
        }
    }

    /// Place the Start cell, replacing any previous one.
    pub fn set_start(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.place_endpoint(i, Role::Start)
    }

    /// Place the End cell, replacing any previous one. Rejects Start's
    /// coordinate.
    pub fn set_end(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.place_endpoint(i, Role::End)
    }

    fn place_endpoint(&mut self, i: usize, role: Role) -> Result<(), GridError> {
        let pos = self.cells[i].pos();
        match self.cells[i].role {
            Role::Wall => return Err(GridError::WallEndpoint { pos, role }),
            r if r != role && r != Role::Open => {
                return Err(GridError::CoincidentEndpoints { pos });
            }
            _ => {}
        }
        let slot = match role {
            Role::Start => &mut self.start,
            _ => &mut self.end,
        };
        if let Some(prev) = slot.replace(i) {
            self.cells[prev].role = Role::Open;
        }
        self.cells[i].role = role;
        Ok(())
    }

    /// Compute every cell's traversable orthogonal neighbours and freeze the
    /// roles. Running it again on the unchanged grid yields the same lists.
    pub fn compute_neighbors(&mut self) {
        let bounds = self.bounds;
        for i in 0..self.cells.len() {
            let p = self.cells[i].pos();
            let mut neighbors = Vec::with_capacity(4);
            for n in p.neighbors_4() {
                if let Some(ni) = bounds.index(n) {
                    if !self.cells[ni].is_wall() {
                        neighbors.push(ni);
                    }
                }
            }
            self.cells[i].neighbors = neighbors;
        }
        self.adjacency = true;
    }

    /// Reset `visited` and paint on every cell.
    pub fn clear_marks(&mut self) {
        for c in self.cells.iter_mut() {
            c.clear_marks();
        }
    }

    /// Parse a text layout.
    ///
    /// Glyphs: `.` open, `#` wall, `S` start, `E` end. Lines must all have
    /// the same width; surrounding whitespace of the whole string is
    /// ignored. The result has its adjacency computed.
    pub fn from_layout(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim_end).collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        for (line, l) in lines.iter().enumerate() {
            let found = l.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line,
                    expected: width,
                    found,
                });
            }
        }

        let mut grid = Grid::new(lines.len() as i32, width as i32);
        let mut start = None;
        let mut end = None;
        for (row, l) in lines.iter().enumerate() {
            for (col, ch) in l.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => {
                        grid.set_wall(pos)?;
                    }
                    'S' | 'E' => {
                        let (slot, role) = if ch == 'S' {
                            (&mut start, Role::Start)
                        } else {
                            (&mut end, Role::End)
                        };
                        if slot.replace(pos).is_some() {
                            return Err(GridError::DuplicateEndpoint { role, pos });
                        }
                    }
                    _ => return Err(GridError::UnknownGlyph { ch, pos }),
                }
            }
        }

        grid.set_start(start.ok_or(GridError::MissingEndpoint(Role::Start))?)?;
        grid.set_end(end.ok_or(GridError::MissingEndpoint(Role::End))?)?;
        grid.compute_neighbors();
        Ok(grid)
    }

    /// Glyph used by `Display` for a cell.
    fn glyph(c: &Cell) -> char {
        match (c.role, c.paint) {
            (Role::Wall, _) => '#',
            (Role::Start, _) => 'S',
            (Role::End, _) => 'E',
            (Role::Open, Paint::Path) => '*',
            (Role::Open, Paint::Visited) => 'o',
            (Role::Open, _) => '.',
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 && c.col() == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", Self::glyph(c))?;
        }
        Ok(())
    }
}
