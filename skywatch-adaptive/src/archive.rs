//! Ordered archive of per-evaluation performance scores.
//!
//! Insert-heavy by design: every evaluation records one scalar, while reads
//! are limited to report-style queries. An AVL multiset keeps insert at
//! O(log n) and leaves the door open for rank and range analytics.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Self-balancing multiset of archive scores.
///
/// Duplicates keep their multiplicity; in-order traversal yields ascending
/// scores; the tree height stays O(log n) after every insert.
#[derive(Debug, Clone, Default)]
pub struct ScoreArchive {
    root: Option<Box<Node>>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node {
    score: i32,
    count: u32,
    height: i32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            count: 1,
            height: 1,
            left: None,
            right: None,
        }
    }
}

/// Point-in-time summary of archived scores for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveSummary {
    pub count: usize,
    pub min: i32,
    pub max: i32,
    /// Upper median of the ascending traversal.
    pub median: i32,
}

impl ScoreArchive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluation score.
    pub fn record(&mut self, score: i32) {
        let root = self.root.take();
        self.root = Some(insert(root, score));
        self.len += 1;
    }

    /// Total number of recorded scores, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All recorded scores ascending, duplicates expanded.
    #[must_use]
    pub fn ascending(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len);
        in_order(&self.root, &mut out);
        out
    }

    /// Height of the backing tree; 0 when empty.
    #[must_use]
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Count/min/max/median view for report consumers; `None` when empty.
    #[must_use]
    pub fn summary(&self) -> Option<ArchiveSummary> {
        let scores = self.ascending();
        let (first, last) = (scores.first()?, scores.last()?);
        Some(ArchiveSummary {
            count: scores.len(),
            min: *first,
            max: *last,
            median: scores[scores.len() / 2],
        })
    }
}

fn insert(node: Option<Box<Node>>, score: i32) -> Box<Node> {
    let Some(mut node) = node else {
        return Box::new(Node::leaf(score));
    };
    match score.cmp(&node.score) {
        Ordering::Less => node.left = Some(insert(node.left.take(), score)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), score)),
        Ordering::Equal => {
            node.count = node.count.saturating_add(1);
            return node;
        }
    }
    rebalance(node)
}

fn height(node: &Option<Box<Node>>) -> i32 {
    node.as_ref().map_or(0, |n| n.height)
}

fn update_height(node: &mut Node) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

fn balance_factor(node: &Node) -> i32 {
    height(&node.left) - height(&node.right)
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    update_height(&mut node);
    pivot.right = Some(node);
    update_height(&mut pivot);
    pivot
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    update_height(&mut node);
    pivot.left = Some(node);
    update_height(&mut pivot);
    pivot
}

fn rebalance(mut node: Box<Node>) -> Box<Node> {
    update_height(&mut node);
    let factor = balance_factor(&node);
    if factor > 1 {
        if let Some(left) = node.left.take() {
            node.left = Some(if balance_factor(&left) < 0 {
                rotate_left(left)
            } else {
                left
            });
        }
        return rotate_right(node);
    }
    if factor < -1 {
        if let Some(right) = node.right.take() {
            node.right = Some(if balance_factor(&right) > 0 {
                rotate_right(right)
            } else {
                right
            });
        }
        return rotate_left(node);
    }
    node
}

fn in_order(node: &Option<Box<Node>>, out: &mut Vec<i32>) {
    if let Some(node) = node {
        in_order(&node.left, out);
        for _ in 0..node.count {
            out.push(node.score);
        }
        in_order(&node.right, out);
    }
}
