use std::fmt::Debug;

use crate::types::RbNode;

/// Debug printer for red-black trees.
///
/// ```text
/// Node[0] black { 20 }
///   L=Node[1] red { 10 }
///     L=∅
///     R=∅
///   R=∅
/// ```
pub fn print<K: Debug>(arena: &[RbNode<K>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = if n.is_black() { "black" } else { "red" };
            let child_tab = format!("{tab}  ");
            let left = print(arena, n.l, &child_tab);
            let right = print(arena, n.r, &child_tab);
            format!(
                "Node[{i}] {color} {{ {:?} }}\n{child_tab}L={left}\n{child_tab}R={right}",
                n.k
            )
        }
    }
}
