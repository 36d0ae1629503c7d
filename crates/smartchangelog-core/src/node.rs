//! Grouping tree.

use smartchangelog_commit::Commit;

use crate::{Criterion, render};

/// Name of the trailing group holding commits without a value for the criterion.
pub const UNKNOWN_GROUP: &str = "unknown";

/// The label of a group: which criterion produced it and the key value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The criterion used at this level.
    pub criterion: Criterion,
    /// The string form of the key, or [`UNKNOWN_GROUP`].
    pub name: String,
}

/// An internal node of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// The label, absent for the root.
    pub heading: Option<Heading>,
    /// Children, in report order.
    pub children: Vec<Node>,
}

/// A node of the grouping tree: either one commit or a group of nodes.
///
/// Parents own their children; depth is tracked while walking the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single commit.
    Leaf(Commit),
    /// A labeled or root group.
    Group(Group),
}

impl Node {
    /// Creates an unlabeled group.
    #[must_use]
    pub fn root(children: Vec<Node>) -> Self {
        Self::Group(Group {
            heading: None,
            children,
        })
    }

    /// Creates a labeled group.
    #[must_use]
    pub fn labeled(criterion: Criterion, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Group(Group {
            heading: Some(Heading {
                criterion,
                name: name.into(),
            }),
            children,
        })
    }

    /// Returns the group name, if this is a labeled group.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.heading().map(|heading| heading.name.as_str())
    }

    /// Returns the criterion that produced this group.
    #[must_use]
    pub fn criterion(&self) -> Option<Criterion> {
        self.heading().map(|heading| heading.criterion)
    }

    /// Returns the heading, if this is a labeled group.
    #[must_use]
    pub fn heading(&self) -> Option<&Heading> {
        match self {
            Self::Group(group) => group.heading.as_ref(),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the children; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Group(group) => &group.children,
            Self::Leaf(_) => &[],
        }
    }

    /// Returns the wrapped commit, if this is a leaf.
    #[must_use]
    pub fn commit(&self) -> Option<&Commit> {
        match self {
            Self::Leaf(commit) => Some(commit),
            Self::Group(_) => None,
        }
    }

    /// Returns true for a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Number of commits below this node: 1 for a leaf, the sum of the
    /// children for a group.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Group(group) => group.children.iter().map(Node::len).sum(),
        }
    }

    /// Returns true if no commit is reachable from this node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the commits in leaf order.
    #[must_use]
    pub fn commits(&self) -> Vec<&Commit> {
        let mut commits = Vec::new();
        self.collect_commits(&mut commits);
        commits
    }

    fn collect_commits<'a>(&'a self, commits: &mut Vec<&'a Commit>) {
        match self {
            Self::Leaf(commit) => commits.push(commit),
            Self::Group(group) => {
                for child in &group.children {
                    child.collect_commits(commits);
                }
            }
        }
    }

    /// Renders the tree; see [`render`].
    #[must_use]
    pub fn report(&self) -> String {
        render(self)
    }
}

/// Groups commits level by level, one level per criterion.
///
/// At each level commits with a value are sorted by it (stable) and bucketed
/// by equal values; commits without a value go to a trailing
/// [`UNKNOWN_GROUP`] bucket. The deepest groups list their commits by date.
/// The input is left untouched.
#[must_use]
pub fn group_by(commits: &[Commit], criteria: &[Criterion]) -> Node {
    Node::root(group_level(commits.iter().collect(), criteria))
}

fn group_level(mut commits: Vec<&Commit>, criteria: &[Criterion]) -> Vec<Node> {
    let Some((&criterion, remaining)) = criteria.split_first() else {
        commits.sort_by_key(|commit| commit.date);
        return commits.into_iter().cloned().map(Node::Leaf).collect();
    };

    let (mut categorized, uncategorized): (Vec<&Commit>, Vec<&Commit>) = commits
        .into_iter()
        .partition(|commit| criterion.key(commit).is_some());

    categorized.sort_by(|a, b| criterion.key(a).cmp(&criterion.key(b)));

    let mut children = Vec::new();
    for bucket in categorized.chunk_by(|a, b| criterion.key(a) == criterion.key(b)) {
        let Some(key) = bucket.first().and_then(|commit| criterion.key(commit)) else {
            continue;
        };
        children.push(Node::labeled(
            criterion,
            key.to_string(),
            group_level(bucket.to_vec(), remaining),
        ));
    }

    if !uncategorized.is_empty() {
        children.push(Node::labeled(
            criterion,
            UNKNOWN_GROUP,
            group_level(uncategorized, remaining),
        ));
    }

    children
}
