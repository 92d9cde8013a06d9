// Random bar heights

use rand::Rng;
use std::ops::RangeInclusive;

/// Draw `count` independent, uniformly distributed heights from `bounds`
pub fn make_dataset<R: Rng>(
    rng: &mut R,
    count: usize,
    bounds: RangeInclusive<u32>,
) -> Vec<u32> {
    (0..count)
        .map(|_| rng.random_range(bounds.clone()))
        .collect()
}
