//! Money matters: can friends settle all debts by paying only each other?
//!
//! Friendship groups are the connected components of the friendship graph;
//! settling is possible iff every component's balances sum to zero.

use crate::input::Tokens;
use crate::problem::SolveError;

/// Disjoint-set forest with union by rank and path compression.
#[derive(Clone, Debug)]
pub struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s set. Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`; returns false if already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] += 1;
        }
        true
    }
}

/// True when every friendship group's balances sum to zero.
pub fn settleable(balances: &[i64], sets: &mut DisjointSets) -> bool {
    let mut sums = vec![0i64; balances.len()];
    for (person, &b) in balances.iter().enumerate() {
        sums[sets.find(person)] += b;
    }
    sums.iter().all(|&s| s == 0)
}

pub fn solve(input: &str) -> Result<String, SolveError> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next()?;
    let m: usize = tokens.next()?;
    let balances: Vec<i64> = tokens.next_n(n)?;
    let mut sets = DisjointSets::new(n);
    for _ in 0..m {
        let a: usize = tokens.next()?;
        let b: usize = tokens.next()?;
        if let Some(&node) = [a, b].iter().find(|&&x| x >= n) {
            return Err(SolveError::InvalidNode { node, n });
        }
        sets.union(a, b);
    }
    let verdict = if settleable(&balances, &mut sets) {
        "POSSIBLE"
    } else {
        "IMPOSSIBLE"
    };
    Ok(verdict.to_string())
}
