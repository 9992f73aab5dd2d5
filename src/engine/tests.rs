#[cfg(test)]
mod tests {
    use crate::{Error, GridEngine, Pattern};

    const N: usize = 32;
    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.3;

    fn randomly_filled(n: usize, seed: u64, fill_rate: f64) -> GridEngine {
        let mut engine = GridEngine::new(n, fill_rate).unwrap().with_seed(seed);
        engine.randomize_default();
        engine
    }

    fn alive(engine: &GridEngine) -> Vec<(usize, usize)> {
        engine.grid().alive_cells().collect()
    }

    #[test]
    fn test_construct_is_blank() {
        let engine = GridEngine::new(N, FILL_RATE).unwrap();
        assert_eq!(engine.side_length(), N);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.population(), 0);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_construct_rejects_bad_input() {
        assert!(matches!(
            GridEngine::new(0, 0.2),
            Err(Error::InvalidConfiguration(_))
        ));
        for density in [-0.1, 1.1, f64::NAN] {
            assert!(matches!(
                GridEngine::new(N, density),
                Err(Error::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let mut engine = GridEngine::new(N, FILL_RATE).unwrap();
        for (x, y) in [(5, 5), (6, 5), (5, 6), (6, 6)] {
            engine.toggle(x, y);
        }
        let before = engine.grid().clone();
        let (grid, population) = engine.step();
        assert_eq!(grid, &before);
        assert_eq!(population, 4);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        for n in [20, 25] {
            let mut engine = GridEngine::new(n, FILL_RATE).unwrap();
            engine.seed_pattern(&Pattern::Glider, 1, 1);
            let start = alive(&engine);

            engine.step_n(4);

            let mut expected = start
                .iter()
                .map(|&(x, y)| ((x + 1) % n, (y + 1) % n))
                .collect::<Vec<_>>();
            expected.sort_by_key(|&(x, y)| (y, x));
            assert_eq!(alive(&engine), expected, "n={}", n);
        }
    }

    #[test]
    fn test_glider_crosses_the_seam() {
        let n = 20;
        let mut engine = GridEngine::new(n, FILL_RATE).unwrap();
        engine.seed_pattern(&Pattern::Glider, 1, 1);
        let start = alive(&engine);

        // a full lap of the torus brings the glider back to its start
        engine.step_n(4 * n as u64);
        assert_eq!(alive(&engine), start);
        assert_eq!(engine.population(), 5);
    }

    #[test]
    fn test_pulsar_placement() {
        let mut engine = GridEngine::new(N, FILL_RATE).unwrap();
        engine.seed_pattern(&Pattern::Pulsar, 15, 15);
        assert_eq!(engine.population(), 24);
        for &(dx, dy) in Pattern::Pulsar.offsets() {
            assert!(engine.grid().get(15 + dx, 15 + dy));
        }
        assert!(!engine.grid().get(15, 15));
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_history_matches_generation() {
        let mut engine = randomly_filled(N, SEED, FILL_RATE);
        let mut populations = vec![];
        for k in 1..=20 {
            let (grid, population) = engine.step();
            assert_eq!(grid.population(), population);
            populations.push(population);
            assert_eq!(engine.generation(), k);
            assert_eq!(engine.history().len() as u64, k);
        }
        assert_eq!(engine.history(), populations);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = randomly_filled(N, SEED, FILL_RATE);
        engine.step_n(5);
        engine.reset();
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0);
        assert!(engine.history().is_empty());

        engine.reset();
        assert!(engine.grid().cells().iter().all(|&alive| !alive));
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut engine = randomly_filled(N, SEED, FILL_RATE);
        let before = engine.grid().clone();
        for (x, y) in [(0, 0), (3, 7), (-1, -1), (N as i64, 2 * N as i64 + 5), (-100, 41)] {
            engine.toggle(x, y);
            assert_ne!(engine.grid(), &before);
            engine.toggle(x, y);
            assert_eq!(engine.grid(), &before);
        }
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_toggle_wraps() {
        let mut a = GridEngine::new(N, FILL_RATE).unwrap();
        let mut b = GridEngine::new(N, FILL_RATE).unwrap();
        a.toggle(-1, -1);
        b.toggle(N as i64 - 1, N as i64 - 1);
        assert_eq!(a.grid(), b.grid());
        assert!(a.grid().get(N as i64 - 1, N as i64 - 1));
    }

    #[test]
    fn test_randomize_keeps_counters() {
        let mut engine = randomly_filled(N, SEED, FILL_RATE);
        engine.step_n(3);
        let history = engine.history().to_vec();

        engine.randomize(0.5).unwrap();
        assert_eq!(engine.generation(), 3);
        assert_eq!(engine.history(), history);

        engine.randomize(1.0).unwrap();
        assert_eq!(engine.population(), N * N);
        engine.randomize(0.0).unwrap();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_randomize_rejects_and_keeps_grid() {
        let mut engine = randomly_filled(N, SEED, FILL_RATE);
        let before = engine.grid().clone();
        for density in [-0.5, 2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                engine.randomize(density),
                Err(Error::InvalidArgument(_))
            ));
            assert_eq!(engine.grid(), &before);
        }
    }

    #[test]
    fn test_randomize_is_reproducible() {
        let a = randomly_filled(N, SEED, FILL_RATE);
        let b = randomly_filled(N, SEED, FILL_RATE);
        let c = randomly_filled(N, SEED + 1, FILL_RATE);
        assert_eq!(a.grid(), b.grid());
        assert_ne!(a.grid(), c.grid());
    }

    #[test]
    fn test_seed_is_additive() {
        let mut engine = GridEngine::new(N, FILL_RATE).unwrap();
        engine.toggle(30, 30);
        engine.step();
        engine.toggle(30, 30);
        engine.seed_pattern(&Pattern::Glider, 1, 1);
        assert_eq!(engine.population(), 6);
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.history(), [0]);

        // overlapping placement only turns cells on
        engine.seed_pattern(&Pattern::Glider, 1, 1);
        assert_eq!(engine.population(), 6);
    }

    #[test]
    fn test_seed_wraps_around_edges() {
        let mut engine = GridEngine::new(N, FILL_RATE).unwrap();
        engine.seed_pattern(&Pattern::Custom(vec![(0, 0), (1, 1), (-1, 0)]), -1, N as i64);
        assert_eq!(alive(&engine), [(N - 2, 0), (N - 1, 0), (0, 1)]);
    }

    #[test]
    fn test_tiny_torus() {
        let mut engine = GridEngine::new(1, FILL_RATE).unwrap();
        engine.toggle(0, 0);
        // the single cell is its own neighbor eight times
        assert_eq!(engine.grid().live_neighbors(0, 0), 8);
        engine.step();
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.history(), [0]);
    }
}
