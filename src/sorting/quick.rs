//! Iterative quicksort with Lomuto partitioning
//!
//! Ranges waiting to be partitioned live on an explicit stack of signed
//! `(low, high)` pairs, so empty ranges such as `(0, -1)` can be pushed and
//! dropped without special cases. The right range is pushed last and is
//! therefore partitioned first.

use super::{color_map, ColorMap, Highlight};

#[derive(Debug, Clone)]
struct Partition {
    low: usize,
    high: usize,
    pivot: u32,
    /// Boundary: everything in `low..boundary` is below the pivot
    boundary: usize,
    scan: usize,
    compare_pending: bool,
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    ranges: Vec<(isize, isize)>,
    partition: Option<Partition>,
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        QuickSort {
            ranges: vec![(0, len as isize - 1)],
            partition: None,
        }
    }

    /// Ranges still waiting to be partitioned, top of stack last
    pub fn pending_ranges(&self) -> &[(isize, isize)] {
        &self.ranges
    }

    pub fn step(&mut self, data: &mut [u32]) -> Option<ColorMap> {
        loop {
            if let Some(p) = self.partition.as_mut() {
                if p.compare_pending {
                    p.compare_pending = false;
                    let j = p.scan;
                    p.scan += 1;
                    if data[j] < p.pivot {
                        data.swap(p.boundary, j);
                        let colors = color_map([
                            (p.boundary, Highlight::Comparing),
                            (j, Highlight::Comparing),
                        ]);
                        p.boundary += 1;
                        return Some(colors);
                    }
                }

                if p.scan < p.high {
                    p.compare_pending = true;
                    return Some(color_map([
                        (p.scan, Highlight::Comparing),
                        (p.high, Highlight::WritePointer),
                    ]));
                }

                // Pivot into its final slot
                let (low, high, boundary) = (p.low, p.high, p.boundary);
                data.swap(boundary, high);
                self.partition = None;

                let boundary = boundary as isize;
                self.ranges.push((low as isize, boundary - 1));
                self.ranges.push((boundary + 1, high as isize));
                return Some(color_map([(boundary as usize, Highlight::Sorted)]));
            }

            let (low, high) = self.ranges.pop()?;
            if low >= high {
                continue;
            }

            let (low, high) = (low as usize, high as usize);
            self.partition = Some(Partition {
                low,
                high,
                pivot: data[high],
                boundary: low,
                scan: low,
                compare_pending: false,
            });
        }
    }
}
