//! Insertion sort

use super::{color_map, ColorMap, Highlight};

/// Shifts larger elements one slot right until the held key fits.
///
/// `hole` is the slot the key would land in if the shifting stopped now, so
/// the element being compared against is always `hole - 1`.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    next: usize,
    key: u32,
    hole: usize,
    inserting: bool,
    shift_pending: bool,
}

impl InsertionSort {
    pub fn new() -> Self {
        InsertionSort {
            next: 1,
            key: 0,
            hole: 0,
            inserting: false,
            shift_pending: false,
        }
    }

    pub fn step(&mut self, data: &mut [u32]) -> Option<ColorMap> {
        loop {
            if self.inserting {
                if self.shift_pending {
                    data[self.hole] = data[self.hole - 1];
                    self.hole -= 1;
                    self.shift_pending = false;
                }

                if self.hole > 0 && self.key < data[self.hole - 1] {
                    self.shift_pending = true;
                    return Some(color_map([
                        (self.hole - 1, Highlight::Comparing),
                        (self.hole, Highlight::WritePointer),
                    ]));
                }

                // Final placement is not shown on its own
                data[self.hole] = self.key;
                self.inserting = false;
            }

            if self.next >= data.len() {
                return None;
            }

            self.key = data[self.next];
            self.hole = self.next;
            self.next += 1;
            self.inserting = true;
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}
