use super::DrawCmd;

/// Deepest group nesting recorded before a branch is skipped.
pub const MAX_GROUP_DEPTH: usize = 64;

/// Identity of a group while it is being drawn (its address).
pub type GroupId = *const ();

/// Recorded draw stream for a frame.
///
/// Commands are painted in insertion order (back-to-front). The list keeps its
/// allocation across frames; call [`clear`](Self::clear) before recording.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    /// Groups currently being drawn, outermost first.
    active: Vec<GroupId>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands and the active group stack. Keeps capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.active.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Enters group `id`. Returns `false` (without entering) when `id` is
    /// already being drawn further up, or once [`MAX_GROUP_DEPTH`] is reached;
    /// the caller must then skip its children.
    ///
    /// Calls that return `true` must be balanced with [`pop_group`](Self::pop_group).
    pub fn push_group(&mut self, id: GroupId) -> bool {
        if self.active.len() >= MAX_GROUP_DEPTH || self.active.contains(&id) {
            return false;
        }
        self.active.push(id);
        true
    }

    #[inline]
    pub fn pop_group(&mut self) {
        let popped = self.active.pop();
        debug_assert!(popped.is_some(), "pop_group called without matching push_group");
    }

    /// Number of groups currently being drawn.
    #[inline]
    pub fn group_depth(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: usize) -> GroupId {
        n as GroupId
    }

    #[test]
    fn group_depth_is_bounded() {
        let mut list = DrawList::new();
        for n in 0..MAX_GROUP_DEPTH {
            assert!(list.push_group(id(n + 1)));
        }
        assert!(!list.push_group(id(MAX_GROUP_DEPTH + 1)));

        list.pop_group();
        assert!(list.push_group(id(MAX_GROUP_DEPTH + 1)));
    }

    #[test]
    fn active_group_is_refused() {
        let mut list = DrawList::new();
        assert!(list.push_group(id(1)));
        assert!(list.push_group(id(2)));
        assert!(!list.push_group(id(1)));
        assert_eq!(list.group_depth(), 2);

        list.pop_group();
        list.pop_group();
        // Siblings may draw the same group again once it has finished.
        assert!(list.push_group(id(1)));
    }

    #[test]
    fn clear_resets_active_groups() {
        let mut list = DrawList::new();
        for n in 0..MAX_GROUP_DEPTH {
            list.push_group(id(n + 1));
        }
        list.clear();
        assert_eq!(list.group_depth(), 0);
        assert!(list.push_group(id(1)));
        assert!(list.is_empty());
    }
}
