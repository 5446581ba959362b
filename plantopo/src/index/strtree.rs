use crate::geom::Envelope;

const NODE_CAPACITY: usize = 10;

/// A static R-tree, packed with the sort-tile-recursive algorithm.
///
/// All items are supplied up front, and the tree never changes after
/// construction. Items with a null envelope are kept but never returned by
/// queries.
#[derive(Clone, Debug)]
pub struct StrTree<T> {
    items: Vec<(Envelope, T)>,
    root: Option<Node>,
}

#[derive(Clone, Debug)]
enum Node {
    Leaf { env: Envelope, items: Vec<usize> },
    Branch { env: Envelope, children: Vec<Node> },
}

impl Node {
    fn env(&self) -> &Envelope {
        match self {
            Node::Leaf { env, .. } | Node::Branch { env, .. } => env,
        }
    }
}

fn centre(env: &Envelope) -> (f64, f64) {
    ((env.min_x + env.max_x) / 2.0, (env.min_y + env.max_y) / 2.0)
}

/// Groups `entries` into runs of at most `NODE_CAPACITY`: sort by x centre,
/// cut into vertical slices, then sort each slice by y centre.
fn partition<E>(mut entries: Vec<E>, env: impl Fn(&E) -> Envelope) -> Vec<Vec<E>> {
    let node_count = entries.len().div_ceil(NODE_CAPACITY);
    let slice_count = (node_count as f64).sqrt().ceil() as usize;
    let slice_cap = entries.len().div_ceil(slice_count.max(1)).max(1);

    entries.sort_by(|a, b| centre(&env(a)).0.total_cmp(&centre(&env(b)).0));
    let mut groups = Vec::with_capacity(node_count);
    let mut entries = entries.into_iter().peekable();
    while entries.peek().is_some() {
        let mut slice: Vec<E> = entries.by_ref().take(slice_cap).collect();
        slice.sort_by(|a, b| centre(&env(a)).1.total_cmp(&centre(&env(b)).1));
        let mut slice = slice.into_iter().peekable();
        while slice.peek().is_some() {
            groups.push(slice.by_ref().take(NODE_CAPACITY).collect());
        }
    }
    groups
}

impl<T> StrTree<T> {
    pub fn new(items: Vec<(Envelope, T)>) -> Self {
        let live: Vec<usize> = (0..items.len()).filter(|&i| !items[i].0.is_null()).collect();
        if live.is_empty() {
            return StrTree { items, root: None };
        }

        let mut level: Vec<Node> = partition(live, |&i| items[i].0)
            .into_iter()
            .map(|group| {
                let mut env = Envelope::null();
                for &i in &group {
                    env.expand_to_include_envelope(&items[i].0);
                }
                Node::Leaf { env, items: group }
            })
            .collect();
        while level.len() > 1 {
            level = partition(level, |n| *n.env())
                .into_iter()
                .map(|children| {
                    let mut env = Envelope::null();
                    for c in &children {
                        env.expand_to_include_envelope(c.env());
                    }
                    Node::Branch { env, children }
                })
                .collect();
        }
        StrTree {
            items,
            root: level.pop(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|(_, t)| t)
    }

    /// Visits every item whose envelope intersects `env`.
    pub fn query_with(&self, env: &Envelope, mut visit: impl FnMut(&T)) {
        if let Some(root) = &self.root {
            self.query_node(root, env, &mut visit);
        }
    }

    fn query_node(&self, node: &Node, env: &Envelope, visit: &mut impl FnMut(&T)) {
        if !node.env().intersects(env) {
            return;
        }
        match node {
            Node::Leaf { items, .. } => {
                for &i in items {
                    let (item_env, item) = &self.items[i];
                    if item_env.intersects(env) {
                        visit(item);
                    }
                }
            }
            Node::Branch { children, .. } => {
                for c in children {
                    self.query_node(c, env, visit);
                }
            }
        }
    }

    /// All items whose envelope intersects `env`.
    pub fn query(&self, env: &Envelope) -> Vec<&T> {
        let mut ret = Vec::new();
        if let Some(root) = &self.root {
            self.collect_node(root, env, &mut ret);
        }
        ret
    }

    fn collect_node<'a>(&'a self, node: &'a Node, env: &Envelope, out: &mut Vec<&'a T>) {
        if !node.env().intersects(env) {
            return;
        }
        match node {
            Node::Leaf { items, .. } => {
                out.extend(
                    items
                        .iter()
                        .map(|&i| &self.items[i])
                        .filter(|(item_env, _)| item_env.intersects(env))
                        .map(|(_, item)| item),
                );
            }
            Node::Branch { children, .. } => {
                for c in children {
                    self.collect_node(c, env, out);
                }
            }
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.root.as_ref();
        while let Some(n) = node {
            depth += 1;
            node = match n {
                Node::Leaf { .. } => None,
                Node::Branch { children, .. } => children.first(),
            };
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn env_strategy() -> impl Strategy<Value = Envelope> {
        (-100.0..100.0, 0.0..10.0, -100.0..100.0, 0.0..10.0)
            .prop_map(|(x, w, y, h): (f64, f64, f64, f64)| Envelope::new(x, x + w, y, y + h))
    }

    #[test]
    fn empty() {
        let tree: StrTree<usize> = StrTree::new(vec![]);
        assert!(tree.query(&Envelope::new(0.0, 1.0, 0.0, 1.0)).is_empty());
        assert_eq!(tree.depth(), 0);

        let tree = StrTree::new(vec![(Envelope::null(), 0)]);
        assert!(tree.query(&Envelope::new(-1e9, 1e9, -1e9, 1e9)).is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn packed_levels() {
        let items: Vec<_> = (0..250)
            .map(|i| {
                let x = (i % 25) as f64;
                let y = (i / 25) as f64;
                (Envelope::new(x, x + 0.5, y, y + 0.5), i)
            })
            .collect();
        let tree = StrTree::new(items);
        // 250 items, 25 leaves, 4 branches, 1 root.
        assert_eq!(tree.depth(), 3);
        let mut hits: Vec<_> = tree
            .query(&Envelope::new(2.2, 3.1, 0.0, 0.2))
            .into_iter()
            .copied()
            .collect();
        hits.sort();
        assert_eq!(hits, vec![2, 3]);
    }

    proptest! {
        #[test]
        fn query_matches_brute_force(
            envs in prop::collection::vec(env_strategy(), 0..120),
            search in env_strategy(),
        ) {
            let items = envs.iter().copied().enumerate().map(|(i, e)| (e, i)).collect();
            let tree = StrTree::new(items);
            let mut hits: Vec<usize> = tree.query(&search).into_iter().copied().collect();
            hits.sort();
            let expected: Vec<usize> =
                (0..envs.len()).filter(|&i| envs[i].intersects(&search)).collect();
            prop_assert_eq!(&hits, &expected);

            let mut visited = Vec::new();
            tree.query_with(&search, |&i| visited.push(i));
            visited.sort();
            prop_assert_eq!(visited, expected);
        }
    }
}
