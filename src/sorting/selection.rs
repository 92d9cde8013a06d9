//! Selection sort

use super::{color_map, ColorMap, Highlight};

#[derive(Debug, Clone, Default)]
pub struct SelectionSort {
    front: usize,
    scan: usize,
    min: usize,
    scanning: bool,
    compare_pending: bool,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, data: &mut [u32]) -> Option<ColorMap> {
        let n = data.len();
        if self.front >= n {
            return None;
        }

        if !self.scanning {
            self.min = self.front;
            self.scan = self.front + 1;
            self.scanning = true;
        }

        if self.compare_pending {
            if data[self.scan] < data[self.min] {
                self.min = self.scan;
            }
            self.scan += 1;
            self.compare_pending = false;
        }

        if self.scan < n {
            self.compare_pending = true;
            return Some(color_map([
                (self.scan, Highlight::Comparing),
                (self.min, Highlight::Comparing),
            ]));
        }

        data.swap(self.front, self.min);
        let colors = color_map([
            (self.front, Highlight::WritePointer),
            (self.min, Highlight::WritePointer),
        ]);
        self.front += 1;
        self.scanning = false;
        Some(colors)
    }
}
