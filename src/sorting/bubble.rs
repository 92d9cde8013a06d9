//! Bubble sort

use super::{color_map, ColorMap, Highlight};

/// Left-to-right adjacent compare-and-swap, one pass at a time.
///
/// Each comparison is shown once, and a swap is shown again on the same pair
/// after it happens.
#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    pass: usize,
    index: usize,
    /// Pair index shown as compared but not yet checked
    pending: Option<usize>,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, data: &mut [u32]) -> Option<ColorMap> {
        let n = data.len();

        if let Some(j) = self.pending.take() {
            self.index += 1;
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                return Some(pair(j));
            }
        }

        while self.pass + 1 < n {
            // Pass `i` compares j in 0..n-i-1; the tail is already in place
            if self.index + self.pass + 1 < n {
                let j = self.index;
                self.pending = Some(j);
                return Some(pair(j));
            }
            self.pass += 1;
            self.index = 0;
        }

        None
    }
}

fn pair(j: usize) -> ColorMap {
    color_map([(j, Highlight::Comparing), (j + 1, Highlight::Comparing)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(data: &mut [u32]) -> Vec<ColorMap> {
        let mut sort = BubbleSort::new();
        std::iter::from_fn(|| sort.step(data)).collect()
    }

    #[test]
    fn test_sorts_example() {
        let mut data = vec![5, 3, 4, 1, 2];
        drain(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_swap_is_shown_twice() {
        let mut data = vec![2, 1];
        let steps = drain(&mut data);
        assert_eq!(steps, vec![pair(0), pair(0)]);
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_no_swap_is_shown_once() {
        let mut data = vec![1, 2, 3];
        let steps = drain(&mut data);
        // Pass 0 compares (0,1) and (1,2), pass 1 compares (0,1)
        assert_eq!(steps, vec![pair(0), pair(1), pair(0)]);
    }

    #[test]
    fn test_reversed_step_count() {
        // n(n-1)/2 comparisons, each followed by a swap
        let mut data = vec![4, 3, 2, 1];
        assert_eq!(drain(&mut data).len(), 12);
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_short_inputs_do_nothing() {
        assert!(drain(&mut []).is_empty());
        assert!(drain(&mut [7]).is_empty());
    }
}
