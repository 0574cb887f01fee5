use bst_menu::tree::Tree;

use std::collections::BTreeSet;

use crate::Op;

/// Applies `ops` to both the tree and a model set.
fn apply<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn agrees_with_btreeset(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    apply(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.inorder().into_iter().eq(set.iter())
}

#[quickcheck]
fn inorder_is_sorted_and_deduplicated(xs: Vec<i32>) -> bool {
    let tree: Tree<i32> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.inorder().into_iter().copied().eq(expected)
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn duplicate_insert_keeps_shape(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let before: Vec<i8> = tree.preorder().into_iter().copied().collect();

    let inserted = tree.insert(xs[pick % xs.len()]);

    !inserted && tree.preorder().into_iter().copied().eq(before)
}

#[quickcheck]
fn deleting_absent_key_keeps_shape(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().filter(|x| *x != missing).collect();
    let before: Vec<i8> = tree.preorder().into_iter().copied().collect();

    tree.delete(&missing).is_none() && tree.preorder().into_iter().copied().eq(before)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs.iter().filter(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.all(|x| tree.contains(x))
        && tree.inorder().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn deleting_everything_empties_tree(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for x in &xs {
        tree.delete(x);
    }

    tree.is_empty() && tree.inorder().is_empty() && tree.postorder().is_empty()
}
