use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::painters::{GridPainter, SpiroPainter};
use crate::random::RngSource;

/// A pattern to run: one of the painters, fully configured.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Pattern {
    Grid(GridPainter),
    Spiro(SpiroPainter),
}

/// Turtle Pattern File -> one painter plus the canvas knobs. RON on disk,
/// so a pattern is a text file you can edit and re-run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatternFile {
    /// Background color, unit-interval channels.
    #[serde(default)]
    pub background: [f64; 3],
    /// Seed for the color source; `None` means fresh entropy every run.
    #[serde(default)]
    pub seed: Option<u64>,
    pub pattern: Pattern,
}

impl Default for PatternFile {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            seed: None,
            pattern: Pattern::Spiro(SpiroPainter::default()),
        }
    }
}

impl PatternFile {
    /// The color source this file asks for: seeded and reproducible, or
    /// fresh entropy when no seed is set.
    pub fn color_source(&self) -> RngSource<SmallRng> {
        match self.seed {
            Some(seed) => RngSource(SmallRng::seed_from_u64(seed)),
            None => RngSource(SmallRng::from_entropy()),
        }
    }

    pub fn to_string(&self) -> String {
        ron::to_string(self).expect("Somehow we mangled our own pattern datastructure?!")
    }

    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let path = path.with_extension("tpf");
        let tmp_path = path.with_added_extension(format!("tmp-{}", rand::random::<usize>()));
        let writer = std::fs::File::create(tmp_path.clone())?;
        ron::Options::default().to_io_writer(writer, &self)?;
        std::fs::rename(&tmp_path, &path)?;
        log::info!("wrote pattern file {:?}", &path);
        Ok(())
    }

    pub fn from_file(path: &PathBuf) -> Result<PatternFile> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        let pattern = ron::from_str(data.as_str())?;
        Ok(pattern)
    }
}
