//! SpatialGrid - uniform-grid neighbor index for local particle interaction
//!
//! Partitions the canvas into square cells of `cell_size` px and records at
//! most ONE particle index per cell. Rebuilt from scratch every tick, so the
//! stored indices are only valid until the next rebuild.
//!
//! The single-occupant policy is deliberate: when two particles land in the
//! same cell during one rebuild, the later one in store order wins and the
//! earlier one is invisible to queries for that frame. That keeps the memory
//! footprint at one slot per cell and is indistinguishable on screen for a
//! decorative effect. Do not "fix" it by switching to buckets.

/// Uniform grid over the canvas, one optional particle index per cell.
pub struct SpatialGrid {
    cell_size: f32,
    cols: i32,
    rows: i32,
    cells: Vec<Option<u32>>,
}

impl SpatialGrid {
    /// Create a grid sized for the given canvas. All cells start empty.
    pub fn new(cell_size: f32, width: f32, height: f32) -> Self {
        let (cols, rows) = Self::extents(cell_size, width, height);
        Self {
            cell_size,
            cols,
            rows,
            cells: vec![None; (cols * rows) as usize],
        }
    }

    // Extents are recomputed from scratch on every rebuild; cheap at these
    // sizes, and it makes canvas resizes impossible to miss.
    fn extents(cell_size: f32, width: f32, height: f32) -> (i32, i32) {
        if !(cell_size > 0.0) {
            return (0, 0);
        }
        let cols = ((width / cell_size).ceil() as i32).max(0);
        let rows = ((height / cell_size).ceil() as i32).max(0);
        (cols, rows)
    }

    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> i32 { self.cols }

    #[inline]
    pub fn rows(&self) -> i32 { self.rows }

    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    #[inline]
    fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols && row >= 0 && row < self.rows
    }

    /// Cell coordinates for a point. May fall outside the grid; callers
    /// must bounds-check. `as i32` saturates, so any input is safe here.
    #[inline]
    fn cell_coords(&self, x: f32, y: f32) -> (i32, i32) {
        let col = (x / self.cell_size).floor() as i32;
        let row = (y / self.cell_size).floor() as i32;
        (col, row)
    }

    #[inline]
    fn index(&self, col: i32, row: i32) -> usize {
        (row * self.cols + col) as usize
    }

    /// Occupant of a cell, `None` when empty or out of range.
    pub fn occupant(&self, col: i32, row: i32) -> Option<u32> {
        if !self.in_bounds(col, row) {
            return None;
        }
        self.cells[self.index(col, row)]
    }

    /// Drop all occupants, keeping the current extents.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Clear and repopulate the grid from the particle store.
    ///
    /// `xs`/`ys` are the store's position arrays; iteration order is store
    /// order, and the LAST particle mapping to a cell keeps it. Particles
    /// outside the canvas are silently skipped. Extents are derived from the
    /// dimensions passed in, so a resized canvas takes effect immediately.
    pub fn rebuild(&mut self, xs: &[f32], ys: &[f32], cell_size: f32, width: f32, height: f32) {
        let (cols, rows) = Self::extents(cell_size, width, height);
        self.cell_size = cell_size;
        if cols != self.cols || rows != self.rows {
            self.cols = cols;
            self.rows = rows;
            self.cells.clear();
            self.cells.resize((cols * rows) as usize, None);
        } else {
            self.cells.fill(None);
        }

        let count = xs.len().min(ys.len());
        for i in 0..count {
            // Bounds check in float domain so NaN positions compare false
            // and drop out, instead of saturating into cell 0.
            let col = (xs[i] / cell_size).floor();
            let row = (ys[i] / cell_size).floor();
            if col >= 0.0 && col < cols as f32 && row >= 0.0 && row < rows as f32 {
                let idx = self.index(col as i32, row as i32);
                self.cells[idx] = Some(i as u32);
            }
        }
    }

    /// Collect the occupants of the 3x3 cell block around a point into
    /// `out` (cleared first). Cells outside the grid are skipped, never
    /// wrapped. Result order is an implementation detail.
    pub fn neighbors_into(&self, x: f32, y: f32, out: &mut Vec<u32>) {
        out.clear();
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let (col, row) = self.cell_coords(x, y);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let nc = col + dx;
                let nr = row + dy;
                if self.in_bounds(nc, nr) {
                    if let Some(idx) = self.cells[self.index(nc, nr)] {
                        out.push(idx);
                    }
                }
            }
        }
    }

    /// Allocating convenience wrapper around [`Self::neighbors_into`].
    pub fn neighbors(&self, x: f32, y: f32) -> Vec<u32> {
        let mut out = Vec::new();
        self.neighbors_into(x, y, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(points: &[(f32, f32)]) -> SpatialGrid {
        let xs: Vec<f32> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f32> = points.iter().map(|p| p.1).collect();
        let mut grid = SpatialGrid::new(10.0, 100.0, 100.0);
        grid.rebuild(&xs, &ys, 10.0, 100.0, 100.0);
        grid
    }

    #[test]
    fn extents_round_up() {
        let grid = SpatialGrid::new(3.0, 100.0, 100.0);
        assert_eq!(grid.cols(), 34);
        assert_eq!(grid.rows(), 34);
    }

    #[test]
    fn rebuild_places_particles_by_floor_division() {
        let grid = grid_with(&[(15.0, 25.0)]);
        assert_eq!(grid.occupant(1, 2), Some(0));
        assert_eq!(grid.occupant(2, 1), None);
    }

    #[test]
    fn cell_collision_keeps_last_in_store_order() {
        let grid = grid_with(&[(15.0, 15.0), (16.0, 16.0)]);
        assert_eq!(grid.occupant(1, 1), Some(1));
    }

    #[test]
    fn out_of_bounds_particles_are_skipped() {
        let grid = grid_with(&[(-5.0, 50.0), (50.0, 250.0), (f32::NAN, 50.0)]);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                assert_eq!(grid.occupant(col, row), None);
            }
        }
    }

    #[test]
    fn corner_query_clips_to_valid_cells() {
        let grid = grid_with(&[(5.0, 5.0), (15.0, 5.0), (5.0, 15.0)]);
        let mut hits = grid.neighbors(0.0, 0.0);
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1, 2]);
    }

    #[test]
    fn query_never_reaches_two_cells_away() {
        let grid = grid_with(&[(55.0, 55.0), (85.0, 55.0)]);
        assert_eq!(grid.neighbors(55.0, 55.0), vec![0]);
    }

    #[test]
    fn query_outside_grid_is_empty_not_a_panic() {
        let grid = grid_with(&[(5.0, 5.0)]);
        assert!(grid.neighbors(-500.0, -500.0).is_empty());
        assert!(grid.neighbors(1e9, 1e9).is_empty());
    }

    #[test]
    fn rebuild_is_idempotent() {
        let points = [(15.0, 15.0), (42.0, 7.0), (99.0, 99.0)];
        let xs: Vec<f32> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f32> = points.iter().map(|p| p.1).collect();

        let mut grid = SpatialGrid::new(10.0, 100.0, 100.0);
        grid.rebuild(&xs, &ys, 10.0, 100.0, 100.0);
        let first: Vec<_> = (0..grid.rows())
            .flat_map(|r| (0..grid.cols()).map(move |c| (c, r)))
            .map(|(c, r)| grid.occupant(c, r))
            .collect();

        grid.rebuild(&xs, &ys, 10.0, 100.0, 100.0);
        let second: Vec<_> = (0..grid.rows())
            .flat_map(|r| (0..grid.cols()).map(move |c| (c, r)))
            .map(|(c, r)| grid.occupant(c, r))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn rebuild_with_new_dimensions_reallocates() {
        let mut grid = SpatialGrid::new(10.0, 100.0, 100.0);
        grid.rebuild(&[95.0], &[95.0], 10.0, 200.0, 50.0);
        assert_eq!(grid.cols(), 20);
        assert_eq!(grid.rows(), 5);
        // Particle at y=95 is now below the 50px canvas.
        assert!(grid.neighbors(95.0, 95.0).is_empty());
    }

    #[test]
    fn degenerate_cell_size_yields_empty_grid() {
        let mut grid = SpatialGrid::new(0.0, 100.0, 100.0);
        assert_eq!(grid.cols(), 0);
        grid.rebuild(&[5.0], &[5.0], 0.0, 100.0, 100.0);
        assert!(grid.neighbors(5.0, 5.0).is_empty());
    }
}
