use std::fmt;

use crate::error::StructureError;

/// An identifier for a given slot, based on its index in the structure's `slots` field.
pub type SlotId = usize;

/// Zero-indexed row and column of a cell in the grid, where row 0 is the top row.
pub type Cell = (usize, usize);

/// Direction that a slot is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

/// A maximal run of fillable cells in one direction. Two slots are equal iff their start cell,
/// direction and length all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub start_cell: Cell,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    /// The cell holding the letter at `offset` within this slot.
    #[must_use]
    pub fn cell_at(&self, offset: usize) -> Cell {
        let (row, col) = self.start_cell;
        match self.direction {
            Direction::Across => (row, col + offset),
            Direction::Down => (row + offset, col),
        }
    }

    /// Generate the coords for each cell of this slot, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.length).map(move |offset| self.cell_at(offset))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.start_cell;
        let direction = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(f, "({row}, {col}) {direction} {}", self.length)
    }
}

/// Immutable description of a grid: its dimensions, which cells are fillable, and the slots
/// derived from them.
#[derive(Debug, Clone)]
pub struct Structure {
    width: usize,
    height: usize,
    fillable: Vec<Vec<bool>>,
    slots: Vec<Slot>,
}

impl Structure {
    /// Validate a fillable/blocked matrix and derive its slots.
    ///
    /// Slots are every maximal horizontal run of two or more fillable cells, in row-major order
    /// of their start cells, followed by every maximal vertical run of two or more, in
    /// column-major order.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if either dimension is zero or if `fillable` doesn't have
    /// exactly `height` rows of `width` cells.
    pub fn new(
        width: usize,
        height: usize,
        fillable: Vec<Vec<bool>>,
    ) -> Result<Structure, StructureError> {
        if width == 0 || height == 0 {
            return Err(StructureError::EmptyGrid { width, height });
        }
        if fillable.len() != height {
            return Err(StructureError::RowCountMismatch {
                expected: height,
                actual: fillable.len(),
            });
        }
        if let Some((row, cells)) = fillable.iter().enumerate().find(|(_, cells)| cells.len() != width) {
            return Err(StructureError::RowWidthMismatch {
                row,
                expected: width,
                actual: cells.len(),
            });
        }

        let mut structure = Structure {
            width,
            height,
            fillable,
            slots: vec![],
        };
        structure.slots = structure.derive_slots();

        log::debug!(
            "derived {} slots from a {}x{} grid",
            structure.slots.len(),
            width,
            height
        );

        Ok(structure)
    }

    fn derive_slots(&self) -> Vec<Slot> {
        let mut slots = vec![];

        for row in 0..self.height {
            push_runs(&mut slots, Direction::Across, self.width, |col| {
                ((row, col), self.fillable[row][col])
            });
        }
        for col in 0..self.width {
            push_runs(&mut slots, Direction::Down, self.height, |row| {
                ((row, col), self.fillable[row][col])
            });
        }

        slots
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the given cell inside the grid and fillable?
    #[must_use]
    pub fn is_fillable(&self, (row, col): Cell) -> bool {
        self.fillable
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, slot_id: SlotId) -> &Slot {
        &self.slots[slot_id]
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The ids of every variable in the puzzle.
    pub fn variables(&self) -> impl Iterator<Item = SlotId> {
        0..self.slots.len()
    }
}

/// Walk one line of the grid and record each maximal fillable run of length two or more.
fn push_runs<F>(slots: &mut Vec<Slot>, direction: Direction, line_length: usize, cell: F)
where
    F: Fn(usize) -> (Cell, bool),
{
    let mut run_start: Option<Cell> = None;
    let mut run_length = 0;

    for idx in 0..=line_length {
        let (loc, fillable) = if idx < line_length { cell(idx) } else { ((0, 0), false) };

        if fillable {
            if run_start.is_none() {
                run_start = Some(loc);
            }
            run_length += 1;
            continue;
        }

        if let Some(start_cell) = run_start.take() {
            if run_length > 1 {
                slots.push(Slot {
                    start_cell,
                    direction,
                    length: run_length,
                });
            }
        }
        run_length = 0;
    }
}
