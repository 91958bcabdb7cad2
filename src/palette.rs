//! Cluster colours for renderers.
//!
//! Cluster `i` gets the `i`-th palette colour. Past the end of the palette
//! each cluster gets a uniformly random colour instead.

use crate::cluster::Partition;
use crate::graph::Point;
use rand::prelude::*;

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a colour from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Red, blue, green, black, violet, orange, navy, turquoise.
pub const DEFAULT_COLORS: [Rgb; 8] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(0, 128, 0),
    Rgb::new(0, 0, 0),
    Rgb::new(238, 130, 238),
    Rgb::new(255, 165, 0),
    Rgb::new(0, 0, 128),
    Rgb::new(64, 224, 208),
];

/// Maps cluster positions to colours.
pub struct Palette {
    colors: Vec<Rgb>,
    rng: Box<dyn RngCore>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
            rng: Box::new(rand::rng()),
        }
    }
}

impl core::fmt::Debug for Palette {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Palette")
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl Palette {
    /// Palette with the default colours and an OS-seeded fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fixed colours.
    pub fn with_colors(mut self, colors: impl Into<Vec<Rgb>>) -> Self {
        self.colors = colors.into();
        self
    }

    /// Seed the fallback generator for reproducible colours.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Box::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Number of fixed colours.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// `true` when every colour comes from the fallback.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colour for the cluster at position `index`.
    pub fn color_for(&mut self, index: usize) -> Rgb {
        match self.colors.get(index) {
            Some(&c) => c,
            None => Rgb::new(self.rng.random(), self.rng.random(), self.rng.random()),
        }
    }

    /// Pair each cluster of `partition` with its colour.
    pub fn colorize<'a>(&mut self, partition: &'a Partition) -> Vec<(Rgb, &'a [Point])> {
        partition
            .iter()
            .enumerate()
            .map(|(i, cluster)| (self.color_for(i), cluster.as_slice()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::ClusterEngine;

    #[test]
    fn fixed_colors_first() {
        let mut palette = Palette::new();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.color_for(0), Rgb::new(255, 0, 0));
        assert_eq!(palette.color_for(7), Rgb::new(64, 224, 208));
    }

    #[test]
    fn fallback_is_seeded() {
        let mut a = Palette::new().with_colors(Vec::<Rgb>::new()).with_seed(7);
        let mut b = Palette::new().with_colors(Vec::<Rgb>::new()).with_seed(7);
        assert!(a.is_empty());
        let xs: Vec<Rgb> = (0..4).map(|i| a.color_for(i)).collect();
        let ys: Vec<Rgb> = (0..4).map(|i| b.color_for(i)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn colorize_partition() {
        let mut engine = ClusterEngine::new([(0, 0), (1, 0), (10, 10), (11, 10)]).unwrap();
        let partition = engine.solve(2).unwrap();

        let mut palette = Palette::new().with_colors([Rgb::new(1, 2, 3)]).with_seed(1);
        let colored = palette.colorize(&partition);
        assert_eq!(colored.len(), 2);
        assert_eq!(colored[0].0, Rgb::new(1, 2, 3));
        assert_eq!(colored[1].1.len(), 2);
    }
}
