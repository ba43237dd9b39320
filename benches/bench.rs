use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordered_tree::OrderedTree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by adding keys in ascending order. Nothing rebalances it, so this is a chain
/// hanging off the root to the right.
fn get_chain_tree(num_levels: usize) -> OrderedTree<i32> {
    let mut tree = OrderedTree::new();
    for x in (0..).take(num_nodes_in_full_tree(num_levels)) {
        tree.add(x);
    }

    tree
}

/// Builds a tree by adding keys in an order that leaves it full with `num_levels` levels.
fn get_balanced_tree(num_levels: usize) -> OrderedTree<i32> {
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    let mut tree = OrderedTree::new();
    fill_balanced_tree(&mut tree, &xs);

    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut OrderedTree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.add(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of trees before finishing the group. Each iteration gets its own clone of the tree
/// and only the closure is timed.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut OrderedTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Chains get slow quickly so they stop at 2^11.
    for num_levels in [3, 7, 11, 15] {
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;

        let mut tree_tests = vec![("balanced", get_balanced_tree(num_levels))];
        if num_levels <= 11 {
            tree_tests.push(("chain", get_chain_tree(num_levels)));
        }

        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_helper(c, "add", |tree, i| {
        tree.add(i + 1);
    });

    bench_helper(c, "contains-miss", |tree, i| {
        let _found = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });

    bench_helper(c, "count", |tree, _| {
        let _count = black_box(tree.count());
    });
    bench_helper(c, "valid", |tree, _| {
        let _valid = black_box(tree.is_valid());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
