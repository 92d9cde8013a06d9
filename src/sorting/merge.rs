//! Top-down merge sort
//!
//! The recursion is flattened into a task stack. Sorting `[l, r]` pushes
//! its merge first and its two halves after, so the left half is fully
//! sorted, then the right half, and only then are the two merged.
//!
//! Every element written during a merge is shown twice: once before the write
//! (candidates and destination highlighted) and once after, with the same
//! highlight.

use super::{color_map, ColorMap, Highlight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Sort { left: usize, right: usize },
    Merge { left: usize, mid: usize, right: usize },
}

/// A merge of `data[left..=mid]` and `data[mid+1..=right]` in progress
#[derive(Debug, Clone)]
struct MergeRun {
    left: usize,
    mid: usize,
    left_run: Vec<u32>,
    right_run: Vec<u32>,
    /// Next unread element of each run
    i: usize,
    j: usize,
    /// Next slot to write
    k: usize,
    /// Highlight shown before the pending write, repeated after it
    pending: Option<ColorMap>,
}

impl MergeRun {
    fn new(data: &[u32], left: usize, mid: usize, right: usize) -> Self {
        MergeRun {
            left,
            mid,
            left_run: data[left..=mid].to_vec(),
            right_run: data[mid + 1..=right].to_vec(),
            i: 0,
            j: 0,
            k: left,
            pending: None,
        }
    }

    fn left_open(&self) -> bool {
        self.i < self.left_run.len()
    }

    fn right_open(&self) -> bool {
        self.j < self.right_run.len()
    }

    fn highlight(&self) -> Option<ColorMap> {
        let left_pos = (self.left + self.i, Highlight::LeftRun);
        let right_pos = (self.mid + 1 + self.j, Highlight::RightRun);
        let dest = (self.k, Highlight::WritePointer);

        match (self.left_open(), self.right_open()) {
            (true, true) => Some(color_map([left_pos, right_pos, dest])),
            (true, false) => Some(color_map([left_pos, dest])),
            (false, true) => Some(color_map([right_pos, dest])),
            (false, false) => None,
        }
    }

    fn write_next(&mut self, data: &mut [u32]) {
        let take_left = match (self.left_open(), self.right_open()) {
            // Ties go to the left run
            (true, true) => self.left_run[self.i] <= self.right_run[self.j],
            (left, _) => left,
        };

        if take_left {
            data[self.k] = self.left_run[self.i];
            self.i += 1;
        } else {
            data[self.k] = self.right_run[self.j];
            self.j += 1;
        }
        self.k += 1;
    }
}

#[derive(Debug, Clone)]
pub struct MergeSort {
    tasks: Vec<Task>,
    merge: Option<MergeRun>,
}

impl MergeSort {
    pub fn new(len: usize) -> Self {
        let tasks = if len > 1 {
            vec![Task::Sort {
                left: 0,
                right: len - 1,
            }]
        } else {
            Vec::new()
        };

        MergeSort { tasks, merge: None }
    }

    pub fn step(&mut self, data: &mut [u32]) -> Option<ColorMap> {
        loop {
            if let Some(run) = self.merge.as_mut() {
                if let Some(colors) = run.pending.take() {
                    run.write_next(data);
                    return Some(colors);
                }
                if let Some(colors) = run.highlight() {
                    run.pending = Some(colors.clone());
                    return Some(colors);
                }
                self.merge = None;
            }

            match self.tasks.pop()? {
                Task::Sort { left, right } => {
                    if left >= right {
                        continue;
                    }
                    let mid = (left + right) / 2;
                    self.tasks.push(Task::Merge { left, mid, right });
                    self.tasks.push(Task::Sort {
                        left: mid + 1,
                        right,
                    });
                    self.tasks.push(Task::Sort { left, right: mid });
                }
                Task::Merge { left, mid, right } => {
                    self.merge = Some(MergeRun::new(data, left, mid, right));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(data: &mut [u32]) -> Vec<ColorMap> {
        let mut sort = MergeSort::new(data.len());
        std::iter::from_fn(|| sort.step(data)).collect()
    }

    #[test]
    fn test_two_element_merge_sequence() {
        let mut data = vec![2, 1];
        let steps = drain(&mut data);

        // Destination overlaps the left candidate, so the write pointer wins
        let both = color_map([(0, Highlight::WritePointer), (1, Highlight::RightRun)]);
        let drain_left = color_map([(0, Highlight::LeftRun), (1, Highlight::WritePointer)]);
        assert_eq!(steps, vec![both.clone(), both, drain_left.clone(), drain_left]);
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_write_happens_between_paired_steps() {
        let mut data = vec![2, 1];
        let mut sort = MergeSort::new(2);

        sort.step(&mut data);
        assert_eq!(data, vec![2, 1]);
        sort.step(&mut data);
        assert_eq!(data, vec![1, 1]);
        sort.step(&mut data);
        sort.step(&mut data);
        assert_eq!(data, vec![1, 2]);
        assert!(sort.step(&mut data).is_none());
    }

    #[test]
    fn test_two_steps_per_written_element() {
        // 8 elements, 3 levels of merging, 8 writes per level
        let mut data = vec![8, 7, 6, 5, 4, 3, 2, 1];
        assert_eq!(drain(&mut data).len(), 2 * 8 * 3);
        assert_eq!(data, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_left_half_merges_before_right_half() {
        let mut data = vec![4, 3, 2, 1];
        let mut sort = MergeSort::new(4);

        // First merge is [0..=0] with [1..=1]; the right half is untouched until then
        for _ in 0..4 {
            sort.step(&mut data);
        }
        assert_eq!(data, vec![3, 4, 2, 1]);

        for _ in 0..4 {
            sort.step(&mut data);
        }
        assert_eq!(data, vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_right_run_drains_after_left_is_spent() {
        let mut data = vec![1, 3, 2];
        let steps = drain(&mut data);

        // The write pointer sits on the left candidate while both runs are open
        let both = |dest: usize, right: usize| {
            color_map([(right, Highlight::RightRun), (dest, Highlight::WritePointer)])
        };
        let right_only = color_map([(1, Highlight::WritePointer)]);
        let left_only = color_map([(1, Highlight::LeftRun), (2, Highlight::WritePointer)]);
        let expected = vec![
            // merge [1] with [3]: 1 is written, then only the right run is left
            both(0, 1),
            both(0, 1),
            right_only.clone(),
            right_only,
            // merge [1, 3] with [2]
            both(0, 2),
            both(0, 2),
            both(1, 2),
            both(1, 2),
            left_only.clone(),
            left_only,
        ];
        assert_eq!(steps, expected);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_short_inputs_do_nothing() {
        assert!(drain(&mut []).is_empty());
        assert!(drain(&mut [1]).is_empty());
    }
}
