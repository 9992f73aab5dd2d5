use crate::Result;
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Summary of a population history.
#[derive(Clone, Debug, PartialEq)]
pub struct PopulationStats {
    pub generations: usize,
    pub initial: usize,
    pub last: usize,
    pub min: usize,
    pub max: usize,
    /// First generation (1-based) reaching `max`.
    pub peak_generation: usize,
    pub mean: f64,
}

impl PopulationStats {
    /// Returns `None` when nothing has been simulated yet.
    pub fn from_history(history: &[usize]) -> Option<Self> {
        let (&initial, &last) = (history.first()?, history.last()?);
        let min = history.iter().copied().min()?;
        let (peak_index, max) = history
            .iter()
            .copied()
            .enumerate()
            .fold((0, initial), |best, (i, x)| if x > best.1 { (i, x) } else { best });
        Some(Self {
            generations: history.len(),
            initial,
            last,
            min,
            max,
            peak_generation: peak_index + 1,
            mean: history.iter().sum::<usize>() as f64 / history.len() as f64,
        })
    }
}

impl fmt::Display for PopulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generations: {}", self.generations)?;
        writeln!(f, "Alive: {} -> {}", self.initial, self.last)?;
        writeln!(f, "Min: {}", self.min)?;
        writeln!(f, "Max: {} (generation {})", self.max, self.peak_generation)?;
        write!(f, "Mean: {:.2}", self.mean)
    }
}

/// Writes `generation,live_cells` rows, generations numbered from 1.
pub fn write_csv(history: &[usize], mut dst: impl Write) -> Result<()> {
    writeln!(dst, "generation,live_cells")?;
    for (i, population) in history.iter().enumerate() {
        writeln!(dst, "{},{}", i + 1, population)?;
    }
    dst.flush()?;
    Ok(())
}

pub fn save_csv(history: &[usize], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(history, BufWriter::new(file))?;
    tracing::info!(path = %path.as_ref().display(), rows = history.len(), "population saved");
    Ok(())
}
