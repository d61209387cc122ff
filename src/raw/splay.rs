//! Splay restructuring: after an access, rotate the touched node all the
//! way to the root so hot keys drift toward the top of the tree.
//!
//! Only [`rotate_up`](RawOSTreeMap::rotate_up) moves links. The splay loop
//! above it just picks the rotation order: node's parent is the root - one
//! rotation (zig); node and parent are same-side children - parent first,
//! then node (zig-zig); opposite sides - node twice (zig-zag). Each rotation
//! re-derives the sizes of exactly the two nodes whose subtrees changed.

use super::handle::Handle;
use super::raw_ost_map::RawOSTreeMap;

impl<K, V> RawOSTreeMap<K, V> {
    /// Rotates `handle` all the way to the root.
    pub(crate) fn splay(&mut self, handle: Handle) {
        while let Some(parent) = self.node(handle).parent() {
            match self.node(parent).parent() {
                // Zig: one rotation puts the node at the root.
                None => self.rotate_up(handle),
                Some(grandparent) => {
                    if self.dir_of(handle, parent) == self.dir_of(parent, grandparent) {
                        // Zig-zig: the parent goes up first, then the node.
                        self.rotate_up(parent);
                        self.rotate_up(handle);
                    } else {
                        // Zig-zag: the node goes up twice.
                        self.rotate_up(handle);
                        self.rotate_up(handle);
                    }
                }
            }
        }
    }

    /// Single rotation promoting `handle` over its parent, valid whichever
    /// child it is. The node's inner subtree crosses over to the demoted
    /// parent; grandparent and root links are patched; the two changed
    /// sizes are re-derived (parent first - it is now the deeper node).
    fn rotate_up(&mut self, handle: Handle) {
        let parent = self
            .node(handle)
            .parent()
            .expect("`rotate_up()` - node is already the root!");
        let dir = self.dir_of(handle, parent);
        let grandparent = self.node(parent).parent();
        let inner = self.node(handle).child(dir.opposite());

        // The inner subtree swaps sides: it was between the node and the
        // parent in key order, and stays between them after the rotation.
        self.nodes.get_mut(parent).set_child(dir, inner);
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).set_parent(Some(parent));
        }

        // The parent becomes the node's child on the vacated side.
        self.nodes.get_mut(handle).set_child(dir.opposite(), Some(parent));
        self.nodes.get_mut(parent).set_parent(Some(handle));

        // The node steps into the parent's old slot.
        self.nodes.get_mut(handle).set_parent(grandparent);
        match grandparent {
            Some(grandparent_handle) => {
                let parent_dir = self.dir_of(parent, grandparent_handle);
                self.nodes.get_mut(grandparent_handle).set_child(parent_dir, Some(handle));
            }
            None => self.root = Some(handle),
        }

        self.recompute_size(parent);
        self.recompute_size(handle);
    }
}
