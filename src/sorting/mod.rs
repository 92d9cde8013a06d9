//! Step-by-step sorting algorithms
//!
//! Each algorithm is an explicit state machine that performs one visually
//! meaningful unit of work per call and reports which bars to highlight:
//! - [`bubble`]: adjacent compare-and-swap passes
//! - [`insertion`]: shift larger elements right, then drop the key in place
//! - [`selection`]: scan for the minimum, swap it to the front
//! - [`merge`]: top-down merge sort on an explicit task stack
//! - [`quick`]: iterative Lomuto quicksort on an explicit range stack
//!
//! # Stepping Protocol
//!
//! The array is owned by the caller and lent to [`Sorter::step`] on every call.
//! A sorter never holds onto it between steps, so the driver is free to draw,
//! reset or replace the data in between.
//!
//! ```text
//! step → Step { more: true,  colors: {..} }   // comparisons, swaps, writes
//! step → Step { more: true,  colors: all Sorted }
//! step → Step { more: false, colors: {} }     // and every call after this
//! ```

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

use bubble::BubbleSort;
use insertion::InsertionSort;
use merge::MergeSort;
use quick::QuickSort;
use selection::SelectionSort;

/// Visual role of a highlighted bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Being compared or swapped
    Comparing,
    /// Candidate from the left run of a merge
    LeftRun,
    /// Candidate from the right run of a merge
    RightRun,
    /// Destination of the next write
    WritePointer,
    /// In its final position
    Sorted,
}

/// Per-index highlight roles for a single frame
pub type ColorMap = FxHashMap<usize, Highlight>;

/// Build a color map from `(index, role)` pairs; later pairs win on duplicate indices
pub fn color_map<I>(entries: I) -> ColorMap
where
    I: IntoIterator<Item = (usize, Highlight)>,
{
    let mut map = ColorMap::default();
    for (index, role) in entries {
        map.insert(index, role);
    }
    map
}

/// Map every index of an array of length `len` to [`Highlight::Sorted`]
pub fn all_sorted(len: usize) -> ColorMap {
    color_map((0..len).map(|i| (i, Highlight::Sorted)))
}

/// Result of advancing a sorter by one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Whether the sorter has more steps to give
    pub more: bool,
    /// Highlights to draw for this step
    pub colors: ColorMap,
}

impl Step {
    fn more(colors: ColorMap) -> Self {
        Step { more: true, colors }
    }

    fn done() -> Self {
        Step {
            more: false,
            colors: ColorMap::default(),
        }
    }
}

/// The sorting algorithms available to the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Human-readable name, as shown in the status bar
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble sort",
            Algorithm::Insertion => "Insertion sort",
            Algorithm::Selection => "Selection sort",
            Algorithm::Merge => "Merge sort",
            Algorithm::Quick => "Quick sort",
        }
    }

    /// Key that selects this algorithm
    pub fn key(self) -> char {
        match self {
            Algorithm::Bubble => 'b',
            Algorithm::Insertion => 'i',
            Algorithm::Selection => 's',
            Algorithm::Merge => 'm',
            Algorithm::Quick => 'q',
        }
    }

    /// Look up the algorithm bound to `key` (lowercase only)
    pub fn from_key(key: char) -> Option<Self> {
        Algorithm::ALL.into_iter().find(|a| a.key() == key)
    }

    /// Create a fresh sorter for an array of length `len`
    pub fn sorter(self, len: usize) -> Sorter {
        Sorter::new(self, len)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown algorithm '{}' (expected one of: bubble, insertion, selection, merge, quick)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Accepts the short name (`"merge"`), the display name (`"Merge sort"`) or the key (`"m"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let stem = normalized
            .trim_end_matches("sort")
            .trim_end_matches([' ', '-', '_']);

        match stem {
            "bubble" | "b" => Ok(Algorithm::Bubble),
            "insertion" | "i" => Ok(Algorithm::Insertion),
            "selection" | "s" => Ok(Algorithm::Selection),
            "merge" | "m" => Ok(Algorithm::Merge),
            "quick" | "q" => Ok(Algorithm::Quick),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Algorithm-specific state machine
#[derive(Debug, Clone)]
enum Machine {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Selection(SelectionSort),
    Merge(MergeSort),
    Quick(QuickSort),
}

impl Machine {
    fn new(algorithm: Algorithm, len: usize) -> Self {
        match algorithm {
            Algorithm::Bubble => Machine::Bubble(BubbleSort::new()),
            Algorithm::Insertion => Machine::Insertion(InsertionSort::new()),
            Algorithm::Selection => Machine::Selection(SelectionSort::new()),
            Algorithm::Merge => Machine::Merge(MergeSort::new(len)),
            Algorithm::Quick => Machine::Quick(QuickSort::new(len)),
        }
    }

    /// Advance to the next suspension point; `None` once the algorithm is out of work
    fn step(&mut self, data: &mut [u32]) -> Option<ColorMap> {
        match self {
            Machine::Bubble(m) => m.step(data),
            Machine::Insertion(m) => m.step(data),
            Machine::Selection(m) => m.step(data),
            Machine::Merge(m) => m.step(data),
            Machine::Quick(m) => m.step(data),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Sorting,
    Finishing,
    Done,
}

/// A resumable sort over a caller-owned array
///
/// Dropping a sorter before it finishes keeps the array's length and value
/// bounds but not always its contents. Insertion sort holds the element being
/// inserted outside the array while it shifts, so an abandoned run can leave
/// the shifted value duplicated in its place.
#[derive(Debug, Clone)]
pub struct Sorter {
    algorithm: Algorithm,
    machine: Machine,
    stage: Stage,
    steps: usize,
}

impl Sorter {
    /// Create a sorter for an array of length `len`.
    ///
    /// The same array (same length) must be passed to every [`Sorter::step`] call.
    pub fn new(algorithm: Algorithm, len: usize) -> Self {
        Sorter {
            algorithm,
            machine: Machine::new(algorithm, len),
            stage: Stage::Sorting,
            steps: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of steps returned so far, the final `more: false` step included
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether the final `more: false` step has been returned
    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    /// Advance by one step
    pub fn step(&mut self, data: &mut [u32]) -> Step {
        let step = match self.stage {
            Stage::Sorting => match self.machine.step(data) {
                Some(colors) => Step::more(colors),
                None => {
                    self.stage = Stage::Finishing;
                    Step::more(all_sorted(data.len()))
                }
            },
            Stage::Finishing => {
                self.stage = Stage::Done;
                Step::done()
            }
            Stage::Done => return Step::done(),
        };
        self.steps += 1;
        step
    }

    /// Step until the sorter reports completion, returning every step taken
    pub fn run_to_end(&mut self, data: &mut [u32]) -> Vec<Step> {
        let mut steps = Vec::new();
        loop {
            let step = self.step(data);
            let more = step.more;
            steps.push(step);
            if !more {
                return steps;
            }
        }
    }
}

/// Whether `data` is in non-decreasing order
pub fn is_sorted(data: &[u32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
