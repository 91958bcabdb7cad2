use clusterpad::{ClusterEngine, Palette};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A short click session: a first batch, one solve, then single clicks
    // that each land on the nearest cluster.
    let first_batch = [(12, 14), (15, 11), (18, 16), (120, 40), (124, 44), (60, 150)];
    let k = 3;

    let mut engine = ClusterEngine::new(first_batch)?;
    let mut palette = Palette::new().with_seed(42);

    let mut partition = engine.solve(k)?;
    println!("solve(k={k}): {} clusters", partition.len());

    for click in [(14, 18), (118, 47), (64, 140), (200, 200)] {
        partition = engine.add_point(click)?;
        println!("click {click:?} -> {} points", engine.len());
    }

    for (i, (color, cluster)) in palette.colorize(&partition).into_iter().enumerate() {
        let coords: Vec<(f64, f64)> = cluster.iter().map(|p| (p.x, p.y)).collect();
        println!(
            "  cluster {i} #{:02x}{:02x}{:02x}: {:?}",
            color.r, color.g, color.b, coords
        );
    }

    Ok(())
}
