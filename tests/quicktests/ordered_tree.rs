use ordered_tree::{OrderedTree, SuccessorSplice};

use quickcheck_macros::quickcheck;
use std::collections::HashSet;

/// Builds a tree from `xs`, skipping any key that is already in it.
fn distinct_tree(xs: &[i8], splice: SuccessorSplice) -> OrderedTree<i8> {
    let mut tree = OrderedTree::with_splice(splice);
    for x in xs {
        if !tree.contains(x) {
            tree.add(*x);
        }
    }

    tree
}

#[quickcheck]
fn distinct_adds_stay_valid(xs: Vec<i8>) -> bool {
    distinct_tree(&xs, SuccessorSplice::Detach).is_valid()
}

#[quickcheck]
fn count_matches_distinct_adds(xs: Vec<i8>) -> bool {
    let distinct: HashSet<_> = xs.iter().collect();
    distinct_tree(&xs, SuccessorSplice::Detach).count() == distinct.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = distinct_tree(&xs, SuccessorSplice::Detach);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = distinct_tree(&xs, SuccessorSplice::Detach);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn find_node_lands_on_key_or_nearest(xs: Vec<i8>, probe: i8) -> bool {
    let tree = distinct_tree(&xs, SuccessorSplice::Detach);

    match tree.find_node(&probe) {
        None => tree.is_empty(),
        Some(node) if *node.key() == probe => true,
        // A miss stops where the search ran out of children.
        Some(node) => {
            if probe > *node.key() {
                node.right().is_none()
            } else {
                node.left().is_none()
            }
        }
    }
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = distinct_tree(&xs, SuccessorSplice::Relink);
    for delete in &deletes {
        tree.delete(delete);
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    deletes.iter().all(|x| !tree.contains(x))
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|x| tree.contains(x))
        && tree.is_valid()
}

#[quickcheck]
fn failed_delete_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree = distinct_tree(&xs, SuccessorSplice::Detach);
    if tree.contains(&missing) {
        return true;
    }

    let before = tree.to_string();
    !tree.delete(&missing) && tree.to_string() == before && tree.is_valid()
}
