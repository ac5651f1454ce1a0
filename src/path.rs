//! Candidate paths and the frontier that holds the live ones.
//!
//! Paths are stored in an append-only [`PathArena`] and refer to their
//! predecessor by [`PathId`], so extending a path never copies its break
//! history. The [`Frontier`] is a list of handles into the arena; pruning
//! marks handles in one pass and compacts the list afterwards, which keeps
//! removal separate from traversal.

/// Handle to a path stored in a [`PathArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(usize);

/// One node of a candidate path: the line ending at `end`, appended to
/// `parent`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathRecord {
    /// Predecessor; `None` only for the root (the virtual break before the
    /// first word).
    pub parent: Option<PathId>,
    /// Index of the word the most recent line ends with.
    pub end: Option<usize>,
    /// Cumulative badness of every line on the path.
    pub score: f64,
    /// Space width (em) of the line ending at `end`.
    pub adjustment: f64,
    /// Number of lines on the path.
    pub lines: usize,
}

/// Append-only storage for every path created during one search.
#[derive(Clone, Debug)]
pub struct PathArena {
    records: Vec<PathRecord>,
}

impl Default for PathArena {
    fn default() -> Self {
        Self::new()
    }
}

impl PathArena {
    /// An arena holding only the root path.
    pub fn new() -> Self {
        Self {
            records: vec![PathRecord {
                parent: None,
                end: None,
                score: 0.0,
                adjustment: 0.0,
                lines: 0,
            }],
        }
    }

    #[inline]
    pub fn root(&self) -> PathId {
        PathId(0)
    }

    #[inline]
    pub fn get(&self, id: PathId) -> &PathRecord {
        &self.records[id.0]
    }

    /// Number of records, the root included; never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// First word of the line that would follow path `id`.
    #[inline]
    pub fn next_start(&self, id: PathId) -> usize {
        self.get(id).end.map_or(0, |end| end + 1)
    }

    /// Record a new path: `parent` followed by a line ending at word `end`.
    pub fn extend(&mut self, parent: PathId, end: usize, score: f64, adjustment: f64) -> PathId {
        let lines = self.get(parent).lines + 1;
        debug_assert!(self.get(parent).end.map_or(true, |e| e < end));
        let id = PathId(self.records.len());
        self.records.push(PathRecord {
            parent: Some(parent),
            end: Some(end),
            score,
            adjustment,
            lines,
        });
        id
    }

    /// Break indices and per-line adjustments of path `id`, first line first.
    pub fn trace(&self, id: PathId) -> (Vec<usize>, Vec<f64>) {
        let lines = self.get(id).lines;
        let mut indices = Vec::with_capacity(lines);
        let mut adjustments = Vec::with_capacity(lines + 1);
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let record = self.get(current);
            if let Some(end) = record.end {
                indices.push(end);
                adjustments.push(record.adjustment);
            }
            cursor = record.parent;
        }
        indices.reverse();
        adjustments.reverse();
        (indices, adjustments)
    }
}

/// The live candidate paths, in insertion order.
#[derive(Clone, Debug)]
pub struct Frontier {
    live: Vec<PathId>,
}

impl Frontier {
    pub fn new(root: PathId) -> Self {
        Self { live: vec![root] }
    }

    #[inline]
    pub fn ids(&self) -> &[PathId] {
        &self.live
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn push(&mut self, id: PathId) {
        self.live.push(id);
    }

    /// Drop every slot whose mark is set; `doomed` is parallel to [`ids`](Self::ids).
    ///
    /// Returns the number of paths removed.
    pub fn prune(&mut self, doomed: &[bool]) -> usize {
        debug_assert_eq!(doomed.len(), self.live.len());
        let before = self.live.len();
        let mut slot = 0usize;
        self.live.retain(|_| {
            let keep = !doomed[slot];
            slot += 1;
            keep
        });
        before - self.live.len()
    }
}
