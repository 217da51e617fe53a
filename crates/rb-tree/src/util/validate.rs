use crate::types::RbNode;

use super::{first, next};

/// Checks every red-black invariant of the tree under `root`.
///
/// Verifies root color and parentlessness, parent back-links, the absence of
/// red-red edges, uniform black-height and strictly increasing in-order keys.
/// Returns the first violation found.
pub fn assert_red_black_tree<K, C>(
    arena: &[RbNode<K>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p.is_some() {
        return Err("Root has parent".to_string());
    }
    if !arena[root as usize].is_black() {
        return Err("Root is not black".to_string());
    }

    fn black_height<K>(arena: &[RbNode<K>], node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(0);
        };

        let n = &arena[node as usize];
        for (child, name) in [(n.l, "left"), (n.r, "right")] {
            let Some(c) = child else { continue };
            if arena[c as usize].p != Some(node) {
                return Err(format!("Broken parent link on {name} child of node {node}"));
            }
            if n.is_red() && arena[c as usize].is_red() {
                return Err(format!("Red node {node} has red {name} child"));
            }
        }

        let lh = black_height(arena, n.l)?;
        let rh = black_height(arena, n.r)?;
        if lh != rh {
            return Err(format!("Black height mismatch at node {node}: {lh} != {rh}"));
        }

        Ok(lh + usize::from(n.is_black()))
    }

    black_height(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(&arena[prev as usize].k, &arena[i as usize].k) >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
