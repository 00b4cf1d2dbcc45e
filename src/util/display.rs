use color_eyre::Report;
use crossterm::{queue, style};
use std::io::Write;

use crate::rope::Rope;
use crate::tree::NodeId;

/// Dump the rope's text and every node in level order.
///
/// Each node line shows its value and subtree size followed by its parent
/// and children as `(value, size)` pairs, or `-` where a link is absent.
pub fn render_tree<W>(w: &mut W, rope: &Rope) -> Result<(), Report>
where
    W: Write,
{
    queue!(
        w,
        style::SetAttribute(style::Attribute::Bold),
        style::Print("In order: "),
        style::SetAttribute(style::Attribute::Reset),
        style::Print(rope),
        style::Print("\n"),
    )?;

    queue!(
        w,
        style::SetAttribute(style::Attribute::Bold),
        style::Print(format!("Nodes in level order ({}):\n", rope.len())),
        style::SetAttribute(style::Attribute::Reset),
    )?;

    for id in rope.level_order() {
        queue!(w, style::Print(describe(rope, id)), style::Print("\n"))?;
    }

    w.flush()?;
    Ok(())
}

/// One-line summary of a node and its links.
pub fn describe(rope: &Rope, id: NodeId) -> String {
    let node = rope.node(id);
    let link = |id: Option<NodeId>| id.map_or_else(|| "-".to_string(), |id| rope.node(id).to_string());

    format!(
        "Value: {:?}, Size: {}; Parent: {}, Left child: {}, Right child: {}",
        node.value(),
        node.size(),
        link(node.parent()),
        link(node.left()),
        link(node.right()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_links() {
        let mut rope = Rope::from("abc");
        rope.char_at(1).unwrap();
        let root = rope.root().unwrap();

        assert_eq!(
            describe(&rope, root),
            "Value: 'b', Size: 3; Parent: -, Left child: (a, 1), Right child: (c, 1)"
        );

        let left = rope.node(root).left().unwrap();
        assert_eq!(
            describe(&rope, left),
            "Value: 'a', Size: 1; Parent: (b, 3), Left child: -, Right child: -"
        );
    }

    #[test]
    fn renders_every_node() {
        let rope = Rope::from("rope");
        let mut out = Vec::new();
        render_tree(&mut out, &rope).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("rope"));
        assert_eq!(out.matches("Value: ").count(), 4);
    }
}
