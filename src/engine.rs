mod tests;

use crate::{utils::is_probability, Config, Error, Grid, Pattern, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Game of Life on a fixed-size torus.
///
/// Owns the current field, the generation counter and the population
/// recorded after every step. `history().len() == generation()` holds
/// between resets.
pub struct GridEngine {
    grid: Grid,
    next: Grid,
    generation: u64,
    history: Vec<usize>,
    density: f64,
    rng: ChaCha8Rng,
}

impl GridEngine {
    /// Create a blank engine with dimensions `size x size`
    ///
    /// `density` is not applied here; it is the default for
    /// [`GridEngine::randomize_default`].
    pub fn new(size: usize, density: f64) -> Result<Self> {
        if size == 0 {
            warn!("rejected engine with zero size");
            return Err(Error::InvalidConfiguration(
                "grid size must be positive".to_string(),
            ));
        }
        if !is_probability(density) {
            warn!(density, "rejected engine density");
            return Err(Error::InvalidConfiguration(format!(
                "density {} is outside [0, 1]",
                density
            )));
        }
        Ok(Self {
            grid: Grid::blank(size),
            next: Grid::blank(size),
            generation: 0,
            history: vec![],
            density,
            rng: ChaCha8Rng::from_entropy(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let engine = Self::new(config.size, config.initial_density)?;
        Ok(match config.seed {
            Some(seed) => engine.with_seed(seed),
            None => engine,
        })
    }

    /// Makes `randomize` reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn side_length(&self) -> usize {
        self.grid.side_length()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Live-cell counts, one per step since the last reset.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Advances the field by one generation.
    ///
    /// Returns the new field and its population.
    pub fn step(&mut self) -> (&Grid, usize) {
        self.grid.evolve_into(&mut self.next);
        std::mem::swap(&mut self.grid, &mut self.next);

        let population = self.grid.population();
        self.generation += 1;
        self.history.push(population);
        debug!(generation = self.generation, population, "step");

        (&self.grid, population)
    }

    /// Advances the field by `k` generations.
    pub fn step_n(&mut self, k: u64) -> usize {
        for _ in 0..k {
            self.step();
        }
        self.population()
    }

    pub fn toggle(&mut self, x: i64, y: i64) {
        self.grid.toggle(x, y);
    }

    /// Kills every cell and forgets the recorded history.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.history.clear();
        info!("grid reset");
    }

    /// Fills the field with random cells
    ///
    /// `density` - probability of cell being alive; the call is rejected
    /// when it is outside `[0, 1]`. Generation and history are kept.
    pub fn randomize(&mut self, density: f64) -> Result<()> {
        if !is_probability(density) {
            warn!(density, "rejected randomize density");
            return Err(Error::InvalidArgument(format!(
                "density {} is outside [0, 1]",
                density
            )));
        }
        self.fill_random(density);
        info!(density, population = self.population(), "grid randomized");
        Ok(())
    }

    /// Randomizes with the density given at construction.
    pub fn randomize_default(&mut self) {
        self.fill_random(self.density);
        info!(density = self.density, "grid randomized");
    }

    fn fill_random(&mut self, density: f64) {
        let n = self.side_length() as i64;
        for y in 0..n {
            for x in 0..n {
                self.grid.set(x, y, self.rng.gen_bool(density));
            }
        }
    }

    /// Turns on the cells of `pattern` placed at `(origin_x, origin_y)`.
    ///
    /// Cells outside the pattern are left as they are.
    pub fn seed_pattern(&mut self, pattern: &Pattern, origin_x: i64, origin_y: i64) {
        let (ox, oy) = self.grid.wrap(origin_x, origin_y);
        for &(dx, dy) in pattern.offsets() {
            let (dx, dy) = self.grid.wrap(dx, dy);
            self.grid.set((ox + dx) as i64, (oy + dy) as i64, true);
        }
        info!(%pattern, origin_x, origin_y, "pattern seeded");
    }
}
