// lib/src/engine/union_find.rs

/// Disjoint sets over node ids with path compression and union by size.
///
/// A component is identified by its root index; two nodes are connected iff
/// `find` returns the same root for both.
#[derive(Debug, Clone)]
pub(crate) struct Components {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Components {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of disjoint components left.
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the components of `x` and `y`, the smaller into the larger.
    ///
    /// Returns `false` if they already were one component.
    pub(crate) fn union(&mut self, x: usize, y: usize) -> bool {
        let (mut large, mut small) = (self.find(x), self.find(y));
        if large == small {
            return false;
        }
        if self.size[large] < self.size[small] {
            std::mem::swap(&mut large, &mut small);
        }
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        true
    }
}
