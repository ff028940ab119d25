//! Segment-tree visualization dump (`--ps`): a pre-sweep, read-only,
//! pre-order textual rendering of the initial tree shape. Non-load-bearing —
//! it never feeds back into the sweep and its absence changes nothing about
//! the computed layers.

use std::fmt::Write as _;

use crate::geom::Layer;
use crate::segtree::{Node, SegTree};

/// Render the tree's initial shape, one indented line per node in pre-order.
pub fn render(tree: &SegTree) -> String {
    let mut out = String::new();
    match tree.root() {
        Some(root) => render_node(root, 0, &mut out),
        None => out.push_str("(empty)\n"),
    }
    out
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(
        out,
        "{indent}[{}, {}] poly={:?} diff={:?}",
        node.seg_b,
        node.seg_e,
        node.status(Layer::Polysilicon),
        node.status(Layer::Diffusion),
    );
    if let Some(l) = &node.left {
        render_node(l, depth + 1, out);
    }
    if let Some(r) = &node.right {
        render_node(r, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_renders_placeholder() {
        let tree = SegTree::build(&[]);
        assert_eq!(render(&tree), "(empty)\n");
    }

    #[test]
    fn nonempty_tree_renders_one_line_per_node() {
        let tree = SegTree::build(&[0, 5, 10, 15]);
        let text = render(&tree);
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().next().unwrap().starts_with("[0, 15]"));
    }
}
