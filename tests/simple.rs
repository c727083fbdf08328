use earcut_flat::{deviation, Earcut, EarcutError, EarcutOptions};

#[test]
fn test_empty() {
    let mut earcut = Earcut::new();
    let data: [f64; 0] = [];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles.len(), 0);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_invalid_point() {
    let mut earcut = Earcut::new();
    let data = [100.0, 200.0];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles.len(), 0);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_invalid_line() {
    let mut earcut = Earcut::new();
    let data = [0.0, 0.0, 100.0, 200.0];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles.len(), 0);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_invalid_empty_hole() {
    let mut earcut = Earcut::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0];
    let hole_indices: &[u32] = &[3];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles.len(), 3);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_steiner_point_hole() {
    let mut earcut = Earcut::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 50.0, 30.0];
    let hole_indices: &[u32] = &[3];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles.len(), 3 * 3);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_steiner_line_hole() {
    let mut earcut = Earcut::new();
    let data = [0., 0., 100., 0., 100., 100., 50., 30., 60., 30.];
    let hole_indices: &[u32] = &[3];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles.len(), 5 * 3);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_square() {
    let mut earcut = Earcut::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_square_u16() {
    let mut earcut = Earcut::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let hole_indices: &[u16] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_square_usize_f32() {
    let mut earcut = Earcut::new();
    let data = [0.0f32, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let hole_indices: &[usize] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_square_clockwise_input() {
    let mut earcut = Earcut::new();
    let data = [0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(triangles.len(), 2 * 3);
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_three_dimensional_buffer() {
    let mut earcut = Earcut::new();
    #[rustfmt::skip]
    let data = [
        0.0, 0.0, 1.0,
        100.0, 0.0, 1.0,
        100.0, 100.0, 1.0,
        0.0, 100.0, 1.0,
    ];
    let hole_indices: &[usize] = &[];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 3, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(deviation(&data, hole_indices, 3, &triangles), 0.0);
}

#[test]
fn test_points_api() {
    let mut earcut = Earcut::new();
    let data = [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]];
    let hole_indices: &[u32] = &[];
    let mut triangles = vec![];
    earcut.earcut_points(data.iter().copied(), hole_indices, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

#[test]
fn test_square_with_square_hole() {
    let mut earcut = Earcut::new();
    #[rustfmt::skip]
    let data = [
        0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0,
        10.0, 10.0, 90.0, 10.0, 90.0, 90.0, 10.0, 90.0,
    ];
    let hole_indices: &[u32] = &[4];
    let mut triangles = vec![];
    earcut.earcut(&data, hole_indices, 2, &mut triangles);
    assert_eq!(
        triangles,
        vec![0, 4, 7, 5, 4, 0, 3, 0, 7, 5, 0, 1, 2, 3, 7, 6, 5, 1, 2, 7, 6, 6, 1, 2]
    );
    assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
}

#[test]
fn test_instance_is_reusable() {
    let mut earcut = Earcut::new();
    let mut triangles = vec![];
    let square = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let tri = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0];
    earcut.earcut(&square, &[] as &[u32], 2, &mut triangles);
    earcut.earcut(&tri, &[] as &[u32], 2, &mut triangles);
    assert_eq!(triangles.len(), 3);
    earcut.earcut(&square, &[] as &[u32], 2, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

#[test]
fn test_try_earcut() {
    let mut earcut = Earcut::new();
    let mut triangles: Vec<u32> = vec![];
    let square = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    assert!(earcut.try_earcut(&square, &[], 2, &mut triangles).is_ok());
    assert_eq!(triangles.len(), 6);

    let err = earcut
        .try_earcut(&square, &[2, 1], 2, &mut triangles)
        .unwrap_err();
    assert!(matches!(err, EarcutError::HoleIndicesNotAscending { .. }));
    assert!(triangles.is_empty());

    let infinite = [0.0, 0.0, f64::INFINITY, 0.0, 100.0, 100.0];
    let err = earcut
        .try_earcut(&infinite, &[], 2, &mut triangles)
        .unwrap_err();
    assert_eq!(err, EarcutError::NonFiniteCoordinate { vertex: 1 });

    let err = earcut
        .try_earcut(&square, &[0, 2], 2, &mut triangles)
        .unwrap_err();
    assert_eq!(err, EarcutError::EmptyOuterRing);
}

#[test]
fn test_try_earcut_index_too_narrow() {
    let n = 70_000;
    let circle: Vec<f64> = (0..n)
        .flat_map(|k| {
            let t = std::f64::consts::TAU * k as f64 / n as f64;
            [1000.0 * t.cos(), 1000.0 * t.sin()]
        })
        .collect();

    let mut earcut = Earcut::new();
    let mut narrow: Vec<u16> = vec![];
    let err = earcut
        .try_earcut(&circle, &[] as &[u16], 2, &mut narrow)
        .unwrap_err();
    assert_eq!(
        err,
        EarcutError::TooManyVertices {
            vertex_count: n,
            max_index: u16::MAX as usize
        }
    );
    assert!(narrow.is_empty());

    let mut wide: Vec<u32> = vec![];
    assert!(earcut.try_earcut(&circle, &[], 2, &mut wide).is_ok());
    assert!(!wide.is_empty());
    assert!(wide.iter().all(|&i| (i as usize) < n));
}

#[test]
fn test_options() {
    let options = EarcutOptions {
        index_threshold: 3,
        ..Default::default()
    };
    let mut earcut = Earcut::with_options(options);
    assert_eq!(earcut.options(), &options);

    // a square is over this threshold, so it goes through the z-order index
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let mut triangles: Vec<u32> = vec![];
    earcut.earcut(&data, &[], 2, &mut triangles);
    assert_eq!(triangles.len(), 6);
    assert_eq!(deviation(&data, &[] as &[u32], 2, &triangles), 0.0);

    earcut.set_options(EarcutOptions::unindexed());
    assert_eq!(earcut.options().index_threshold, usize::MAX);
}
