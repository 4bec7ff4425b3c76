//! Connectivity and label equivalence
//!
//! Region labeling assigns provisional labels in a single raster pass and
//! records which of them turned out to touch. [`EquivalenceTable`] keeps
//! those records as an index-addressed union-find: each entry points at a
//! smaller (or equal) label, and chasing the pointers ends at a canonical
//! root that points at itself.

use crate::error::RegionError;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl ConnectivityType {
    /// Already-visited neighbours of a pixel in raster order, as
    /// (row offset, column offset)
    pub fn causal_offsets(self) -> &'static [(i64, i64)] {
        match self {
            ConnectivityType::FourWay => &[(0, -1), (-1, 0)],
            ConnectivityType::EightWay => &[(0, -1), (-1, -1), (-1, 0), (-1, 1)],
        }
    }
}

impl TryFrom<u32> for ConnectivityType {
    type Error = RegionError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n {
            4 => Ok(ConnectivityType::FourWay),
            8 => Ok(ConnectivityType::EightWay),
            _ => Err(RegionError::InvalidParameters(format!(
                "connectivity must be 4 or 8, got {}",
                n
            ))),
        }
    }
}

/// Union-find over provisional labels
///
/// Labels are dense indices `0..len()`. Roots are always the smallest
/// label of their class, so roots appear in the same order the labels
/// were created.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceTable {
    parent: Vec<u32>,
}

impl EquivalenceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of labels issued so far
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether no label has been issued
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Issue a new label, initially its own root
    pub fn make_label(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    /// Canonical root of `label`, compressing the path behind it
    ///
    /// # Panics
    ///
    /// Panics if `label` was never issued.
    pub fn find(&mut self, label: u32) -> u32 {
        let mut root = label;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut cur = label;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Record that `a` and `b` belong together; returns the merged root
    ///
    /// The smaller root becomes canonical.
    pub fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        let (lo, hi) = if ra <= rb { (ra, rb) } else { (rb, ra) };
        self.parent[hi as usize] = lo;
        lo
    }

    /// Map every label to a dense id in first-seen root order
    ///
    /// Returns the mapping (indexed by provisional label) and the number
    /// of distinct roots.
    pub fn compact(&mut self) -> (Vec<u32>, usize) {
        let mut remap = vec![0u32; self.parent.len()];
        let mut next = 0u32;
        for label in 0..self.parent.len() as u32 {
            let root = self.find(label);
            if root == label {
                remap[label as usize] = next;
                next += 1;
            } else {
                // Roots precede their members, so this entry is settled.
                remap[label as usize] = remap[root as usize];
            }
        }
        (remap, next as usize)
    }
}
