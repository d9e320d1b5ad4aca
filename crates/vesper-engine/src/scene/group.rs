use crate::signal::Signal;

use super::{DrawList, Drawable, GroupId, Node, MAX_GROUP_DEPTH};

/// Ordered collection of nodes that fans out both operations.
///
/// Insertion order is paint order. The same node may be added more than once.
#[derive(Default)]
pub struct Group {
    children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `child` after the existing children.
    pub fn add(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drawable for Group {
    fn attribute(&mut self, key: &str, signal: Signal) {
        for child in &self.children {
            // Fails only when the child is this group or one of its ancestors.
            match child.try_borrow_mut() {
                Ok(mut child) => child.attribute(key, signal),
                Err(_) => log::debug!("group: skipping {key:?} for a node that is already being updated"),
            }
        }
    }

    fn draw(&self, target: &mut DrawList) {
        if !target.push_group(self as *const Self as GroupId) {
            if target.group_depth() >= MAX_GROUP_DEPTH {
                log::warn!("group: nesting deeper than the draw limit, skipping branch");
            } else {
                log::debug!("group: already drawing this group further up, skipping");
            }
            return;
        }
        for child in &self.children {
            match child.try_borrow() {
                Ok(child) => child.draw(target),
                Err(_) => log::warn!("group: skipping draw of a node that is being updated"),
            }
        }
        target.pop_group();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{node, DrawCmd, Polygon, PolygonState};

    /// Logs draw calls and attributes by name.
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Drawable for Probe {
        fn attribute(&mut self, key: &str, signal: Signal) {
            self.log.borrow_mut().push(format!("{}:{key}/{}", self.name, signal.len()));
        }

        fn draw(&self, _target: &mut DrawList) {
            self.log.borrow_mut().push(format!("draw {}", self.name));
        }
    }

    fn probe(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Node {
        node(Probe { name, log: Rc::clone(log) })
    }

    fn polygon_state(n: &Node) -> PolygonState {
        let mut list = DrawList::new();
        n.borrow().draw(&mut list);
        let DrawCmd::Polygon(cmd) = &list.items()[0];
        cmd.state.clone()
    }

    // ── attribute ─────────────────────────────────────────────────────────

    #[test]
    fn attribute_reaches_every_child_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut g = Group::new();
        g.add(probe("a", &log));
        g.add(probe("b", &log));

        g.attribute("line", Signal::scalar(1.0));
        assert_eq!(*log.borrow(), ["a:line/1", "b:line/1"]);
    }

    #[test]
    fn broadcast_matches_independent_application() {
        let (a, b) = (node(Polygon::new(3)), node(Polygon::new(8)));
        let mut g = Group::new();
        g.add(Rc::clone(&a));
        g.add(Rc::clone(&b));

        g.attribute("rotate", Signal::scalar(0.7));
        g.attribute("translate", Signal::pair(0.1, 0.2));
        g.attribute("stroke", Signal::quad(1.0, 1.0, 0.0, 1.0));

        // Same commands applied to each shape directly, in reverse order.
        let (solo_a, solo_b) = (node(Polygon::new(3)), node(Polygon::new(8)));
        for n in [&solo_b, &solo_a] {
            let mut n = n.borrow_mut();
            n.attribute("rotate", Signal::scalar(0.7));
            n.attribute("translate", Signal::pair(0.1, 0.2));
            n.attribute("stroke", Signal::quad(1.0, 1.0, 0.0, 1.0));
        }

        assert_eq!(polygon_state(&a), polygon_state(&solo_a));
        assert_eq!(polygon_state(&b), polygon_state(&solo_b));
    }

    #[test]
    fn unknown_attribute_leaves_children_unchanged() {
        let a = node(Polygon::new(4));
        let mut g = Group::new();
        g.add(Rc::clone(&a));

        g.attribute("bogus", Signal::scalar(1.0));
        assert_eq!(polygon_state(&a), PolygonState::default());
    }

    #[test]
    fn nested_groups_forward_attributes() {
        let leaf = node(Polygon::new(4));
        let inner = node({
            let mut g = Group::new();
            g.add(Rc::clone(&leaf));
            g
        });
        let mut outer = Group::new();
        outer.add(inner);

        outer.attribute("translate", Signal::pair(0.5, 0.5));
        assert_eq!(polygon_state(&leaf).transform.position, Vec2::new(0.5, 0.5));
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_follows_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut g = Group::new();
        g.add(probe("a", &log));
        g.add(probe("b", &log));

        g.draw(&mut DrawList::new());
        assert_eq!(*log.borrow(), ["draw a", "draw b"]);
    }

    #[test]
    fn draw_records_children_back_to_front() {
        let (back, front) = (node(Polygon::new(3)), node(Polygon::new(4)));
        back.borrow_mut().attribute("fill", Signal::quad(1.0, 0.0, 0.0, 1.0));
        front.borrow_mut().attribute("fill", Signal::quad(0.0, 0.0, 1.0, 1.0));

        let mut g = Group::new();
        g.add(back);
        g.add(front);

        let mut list = DrawList::new();
        g.draw(&mut list);

        let fills: Vec<Color> = list
            .items()
            .iter()
            .map(|DrawCmd::Polygon(cmd)| cmd.state.fill)
            .collect();
        assert_eq!(fills, [Color::rgba(255, 0, 0, 255), Color::rgba(0, 0, 255, 255)]);
    }

    #[test]
    fn add_does_not_deduplicate() {
        let shared = node(Polygon::new(3));
        let mut g = Group::new();
        g.add(Rc::clone(&shared));
        g.add(Rc::clone(&shared));
        assert_eq!(g.len(), 2);

        let mut list = DrawList::new();
        g.draw(&mut list);
        assert_eq!(list.len(), 2);
    }

    // ── cycles ────────────────────────────────────────────────────────────

    fn self_group() -> (Rc<RefCell<Group>>, Node) {
        let g = Rc::new(RefCell::new(Group::new()));
        let as_node: Node = g.clone();
        (g, as_node)
    }

    #[test]
    fn self_containing_group_draws_once() {
        let (g, as_node) = self_group();
        g.borrow_mut().add(Rc::clone(&as_node));
        g.borrow_mut().add(node(Polygon::new(3)));

        let mut list = DrawList::new();
        as_node.borrow().draw(&mut list);
        assert_eq!(list.len(), 1);
        assert_eq!(list.group_depth(), 0);

        as_node.borrow_mut().attribute("line", Signal::scalar(0.1));
    }

    #[test]
    fn doubly_self_containing_group_terminates() {
        let (g, as_node) = self_group();
        g.borrow_mut().add(Rc::clone(&as_node));
        g.borrow_mut().add(Rc::clone(&as_node));
        g.borrow_mut().add(node(Polygon::new(3)));

        let mut list = DrawList::new();
        as_node.borrow().draw(&mut list);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn mutual_cycle_is_cut_at_the_repeated_group() {
        let (a, a_node) = self_group();
        let (b, b_node) = self_group();
        a.borrow_mut().add(Rc::clone(&b_node));
        a.borrow_mut().add(node(Polygon::new(3)));
        b.borrow_mut().add(Rc::clone(&a_node));
        b.borrow_mut().add(Rc::clone(&a_node));
        b.borrow_mut().add(node(Polygon::new(4)));

        let mut list = DrawList::new();
        a_node.borrow().draw(&mut list);
        // b's leaf, then a's leaf.
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn shared_subgroup_draws_under_each_parent() {
        let inner = node({
            let mut g = Group::new();
            g.add(node(Polygon::new(3)));
            g
        });
        let mut outer = Group::new();
        outer.add(Rc::clone(&inner));
        outer.add(Rc::clone(&inner));

        let mut list = DrawList::new();
        outer.draw(&mut list);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn deep_chain_stops_at_the_depth_limit() {
        let mut chain = node(Polygon::new(3));
        for _ in 0..MAX_GROUP_DEPTH + 4 {
            let mut g = Group::new();
            g.add(chain);
            chain = node(g);
        }

        let mut list = DrawList::new();
        chain.borrow().draw(&mut list);
        assert!(list.is_empty());
        assert_eq!(list.group_depth(), 0);
    }
}
