use std::collections::HashMap;
use std::hash::Hash;

/// A parent record with its children collected from flat rows
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped<P, C> {
    pub parent: P,
    pub children: Vec<C>,
}

/// Folds ordered flat rows into one record per key.
///
/// Parents and children keep their first-seen order. The parent is taken from the first row
/// of each key. Rows whose child side is `None` still create the parent but add no child.
pub fn aggregate<R, K, P, C, FK, FS>(
    rows: impl IntoIterator<Item = R>,
    key: FK,
    split: FS,
) -> Vec<Grouped<P, C>>
where
    K: Eq + Hash,
    FK: Fn(&R) -> K,
    FS: Fn(R) -> (P, Option<C>),
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Grouped<P, C>> = Vec::new();

    for row in rows {
        let row_key = key(&row);
        let (parent, child) = split(row);
        let position = *positions.entry(row_key).or_insert_with(|| {
            groups.push(Grouped {
                parent,
                children: Vec::new(),
            });
            groups.len() - 1
        });
        if let Some(child) = child {
            groups[position].children.push(child);
        }
    }

    groups
}
