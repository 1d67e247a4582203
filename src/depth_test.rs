use crate::depth::Depth;

#[test]
fn test_depth_empty() {
    let depth = Depth::new();
    assert_eq!(depth.samples(), 0);
    assert_eq!(depth.min(), 0);
    assert_eq!(depth.max(), 0);
    assert_eq!(depth.mean(), 0);
}

#[test]
fn test_depth_sample() {
    let mut depth = Depth::new();
    for d in [3, 5, 4, 3, 5] {
        depth.sample(d);
    }
    assert_eq!(depth.samples(), 5);
    assert_eq!(depth.min(), 3);
    assert_eq!(depth.max(), 5);
    assert_eq!(depth.mean(), 4);
    assert_eq!(
        depth.to_string(),
        "{ samples: 5, min: 3, mean: 4, max: 5 }"
    );

    // a root-only position has depth zero.
    let mut depth = Depth::new();
    depth.sample(0);
    assert_eq!((depth.min(), depth.max(), depth.samples()), (0, 0, 1));
}
