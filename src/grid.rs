/// Square field of cells with opposite edges stitched together.
///
/// Cells are stored row-major: the cell `(x, y)` lives at `x + y * n`.
/// Every coordinate accepted by the public methods is reduced modulo `n`,
/// so negative and oversized values are valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    n: usize,
}

impl Grid {
    const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    /// Create a blank field with dimensions `n x n`
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`; [`crate::GridEngine::new`] reports that case as an error.
    pub fn blank(n: usize) -> Self {
        assert!(n >= 1);
        Self {
            cells: vec![false; n * n],
            n,
        }
    }

    pub fn side_length(&self) -> usize {
        self.n
    }

    /// Row-major cell states.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Reduces a signed coordinate pair onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        let n = self.n as i64;
        (x.rem_euclid(n) as usize, y.rem_euclid(n) as usize)
    }

    fn index(&self, x: i64, y: i64) -> usize {
        let (x, y) = self.wrap(x, y);
        x + y * self.n
    }

    pub fn get(&self, x: i64, y: i64) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let i = self.index(x, y);
        self.cells[i] = alive;
    }

    pub fn toggle(&mut self, x: i64, y: i64) {
        let i = self.index(x, y);
        self.cells[i] = !self.cells[i];
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of the alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| (i % n, i / n))
    }

    /// Number of alive cells among the 8 wrapped neighbors of `(x, y)`.
    ///
    /// On tiny tori several offsets land on the same cell; each offset is
    /// counted separately.
    pub fn live_neighbors(&self, x: i64, y: i64) -> u8 {
        let (x, y) = self.wrap(x, y);
        let (x, y) = (x as i64, y as i64);
        Self::NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| self.get(x + dx, y + dy) as u8)
            .sum()
    }

    /// Writes the generation following `self` into `dst`.
    ///
    /// Every neighbor count is read from `self`, so no cell of the next
    /// generation can influence another one.
    pub fn evolve_into(&self, dst: &mut Grid) {
        assert_eq!(self.n, dst.n);
        for y in 0..self.n {
            for x in 0..self.n {
                let i = x + y * self.n;
                let neighbors = self.live_neighbors(x as i64, y as i64);
                dst.cells[i] = matches!((self.cells[i], neighbors), (true, 2) | (_, 3));
            }
        }
    }
}
