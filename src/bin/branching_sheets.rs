//! Branching Sheets: Local Homology of an Open Book
//!
//! Three flat triangles share the edge {0, 1}. Away from that edge every
//! neighborhood is a half-disk and the local homology vanishes; along it
//! the sheets meet and H₂ of the edge's star picks up one class per
//! extra sheet.
//!
//! ## Protocol
//!
//! 1. Build the three-sheet cloud
//! 2. Select landmarks by farthest-point sampling
//! 3. Compute local Betti numbers for every vertex and ε-edge
//! 4. Report the singular edges and the resulting clusters

use ndarray::array;

use local_homology::{DatasetManager, LocalHomologyError, euclidean};

fn main() -> Result<(), LocalHomologyError> {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Local Homology: Three Sheets Meeting Along an Edge");
    println!("═══════════════════════════════════════════════════════════════\n");

    let h = 3.0_f64.sqrt() / 2.0;
    let points = array![
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.5, h],
        [-h, 0.5, 0.0],
        [0.0, 0.5, -h],
    ];
    let epsilon = 1.0;

    println!("Cloud Parameters:");
    println!("  N = {} points in ℝ^{}", points.nrows(), points.ncols());
    println!("  ε = {:.2}", epsilon);
    println!();

    let mut manager = DatasetManager::new(
        points,
        |n: usize| (n as f64).sqrt() as usize,
        euclidean,
        epsilon,
    );

    let landmarks = manager.get_centers_ready()?;
    println!("Landmarks:");
    println!("  Centers: {:?}", landmarks.centers());
    println!("  Cover radius: {:.4}", landmarks.cover_radius());
    println!();

    let homologies = manager.calculate_homologies()?;

    println!("Vertex Homologies:");
    for (v, betti) in &homologies.vertex_homologies {
        println!("  {:>2}  β = {}", v, betti);
    }
    println!();

    println!("Edge Homologies:");
    for (edge, betti) in &homologies.edge_homologies {
        let (u, w) = edge.endpoints();
        let marker = if betti.is_trivial() { "" } else { "  ← singular" };
        println!("  {:>2}-{:<2} β = {}{}", u, w, betti, marker);
    }
    println!();

    let singular = homologies.singular_edges();
    println!("Singular edges: {}", singular.len());

    let clusters = manager.cluster()?;
    println!("\nClusters:");
    for (i, members) in clusters.iter().enumerate() {
        println!("  #{}: {:?}", i, members);
    }

    println!("\n═══════════════════════════════════════════════════════════════");
    Ok(())
}
