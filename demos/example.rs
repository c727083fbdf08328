use earcut_flat::{deviation, flatten, Earcut};

fn main() {
    let rings = vec![
        vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
        vec![[3.0, 3.0], [7.0, 3.0], [7.0, 7.0], [3.0, 7.0]],
    ];
    let flat = flatten(&rings).expect("all points have two coordinates");

    let mut earcut = Earcut::new();
    let mut triangles: Vec<u32> = Vec::new();
    let hole_indices: Vec<u32> = flat.hole_indices.iter().map(|&i| i as u32).collect();
    for _ in 0..500 {
        earcut.earcut(&flat.vertices, &hole_indices, flat.dimensions, &mut triangles);
    }

    for t in triangles.chunks_exact(3) {
        println!("{} {} {}", t[0], t[1], t[2]);
    }
    println!(
        "{} triangles, deviation {}",
        triangles.len() / 3,
        deviation(&flat.vertices, &hole_indices, flat.dimensions, &triangles)
    );
}
