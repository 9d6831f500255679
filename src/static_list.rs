//!# Non-owning intrusive doubly linked list
//!
//! [StaticList] links caller-owned [Item] nodes without allocating anything
//! itself: the list stores only head/tail pointers and a length, the link
//! pointers live inside each node, and node storage belongs entirely to the
//! caller (stack, static, struct field).
//!
//!```
//!use embedded_util::static_list::{Item, StaticList};
//!
//!let mut list = StaticList::new();
//!let mut first = Item::new(1);
//!let mut second = Item::new(2);
//!unsafe {
//!    list.push_back(&mut first);
//!    list.push_back(&mut second);
//!}
//!
//!assert_eq!(list.len(), 2);
//!assert!(list.iter().eq([1, 2].iter()));
//!
//!drop(first);
//!assert!(list.iter().eq([2].iter()));
//!```
//!
//! Dropping an [Item] unlinks exactly that element from its list. Dropping
//! the list first is also fine: the list clears every node's back-reference
//! on the way out, so later node drops are no-ops.
//!
//! ## Safety
//!
//! Linking wires raw pointers between the list and caller-owned node
//! storage, which the borrow checker cannot track. [push_back](StaticList::push_back)
//! is therefore `unsafe`: the caller promises that while an item stays
//! linked, neither it nor the list is dropped, moved, detached or mutated
//! while a borrow of the other is live. In particular, a linked item must
//! not be dropped while an iterator over its list exists, and an item's
//! value must not be mutated through its own handle while the list hands
//! out references to it.
//!
//! ## Relocation
//!
//! Rust moves are plain memory copies, so a linked node cannot repair the
//! list by itself when its storage moves. After moving an [Item] or a
//! [StaticList] to a new location, call [`relink`](Item::relink) on the value
//! at its new address before using the list again. A moved-from binding never
//! runs its destructor, so the stale location drops out of the picture on its
//! own. Unlinking itself never depends on the node's address, which is why a
//! node moved into `drop()` still removes itself correctly.
//!
//! The list is not internally synchronized. Concurrent push, iteration or
//! destruction on the same list must be serialized by the caller; the raw
//! link pointers keep both types `!Send` and `!Sync`.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

/// Doubly linked list over caller-owned [Item] nodes.
///
/// O(1) append and length queries, bidirectional in-order iteration, no
/// ownership of node memory. Copying is not supported; relocation via move
/// plus [`relink`](StaticList::relink) is the only way to change the list's
/// storage location.
pub struct StaticList<T> {
    head: Option<NonNull<Item<T>>>,
    tail: Option<NonNull<Item<T>>>,
    len: usize,
    _nodes: PhantomData<Item<T>>,
}

/// A node of a [StaticList], holding one element value.
///
/// The node is constructed detached and linked with
/// [`push_back`](StaticList::push_back). It stays in the list for as long as
/// it is alive and linked: dropping it removes the element, so the node must
/// be kept somewhere for the element's intended lifetime.
#[must_use = "dropping an Item unlinks its element from the list"]
pub struct Item<T> {
    list: Option<NonNull<StaticList<T>>>,
    prev: Option<NonNull<Item<T>>>,
    next: Option<NonNull<Item<T>>>,
    value: T,
}

impl<T> StaticList<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _nodes: PhantomData,
        }
    }

    /// Append a detached node at the tail.
    ///
    /// The node is linked in place; its storage stays with the caller. A node
    /// that is still linked (to this or another list) is unlinked first.
    ///
    /// # Safety
    ///
    /// Linking stores a raw pointer to the item inside the list and a raw
    /// pointer to the list inside the item. For as long as the item stays
    /// linked the caller must uphold the aliasing rules the compiler can no
    /// longer check:
    ///
    /// * The item must not be dropped, detached or accessed through its own
    ///   handle while any borrow of the list is live (an iterator,
    ///   [front](Self::front), [back](Self::back)), and no borrow of the
    ///   list may be created while a mutable borrow of the item is live.
    /// * After moving the item or the list, [Item::relink] respectively
    ///   [StaticList::relink] must be called on the value at its new address
    ///   before either is used again.
    /// * The item must not outlive the list unless the list drops first;
    ///   the list's destructor detaches every remaining node.
    pub unsafe fn push_back(&mut self, item: &mut Item<T>) {
        item.unlink();

        let list = NonNull::from(&mut *self);
        let node = NonNull::from(&mut *item);

        item.list = Some(list);
        item.prev = self.tail;
        item.next = None;

        match self.tail {
            // Established tail gains a successor
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            // Empty list, node becomes the head as well
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First element in insertion order.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Last element in insertion order.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// In-order iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            next_back: self.tail,
            remaining: self.len,
            _list: PhantomData,
        }
    }

    /// In-order iterator yielding mutable references.
    ///
    /// While the iterator is in use the elements must not be accessed through
    /// their own [Item] handles.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            next_back: self.tail,
            remaining: self.len,
            _list: PhantomData,
        }
    }

    /// Repair the node back-references after the list was moved.
    ///
    /// Must be called on the list at its new address, before any node is
    /// pushed, dropped or detached, whenever the list's own storage has been
    /// relocated.
    ///
    /// # Safety
    ///
    /// Every linked node must still be alive at the address it was linked
    /// (or last relinked) at, and no borrow of the list or of a linked item
    /// may be live.
    pub unsafe fn relink(&mut self) {
        let list = NonNull::from(&mut *self);
        let mut cursor = self.head;
        while let Some(node) = cursor {
            // Node-to-node links are unaffected by a list move
            unsafe {
                let node = &mut *node.as_ptr();
                node.list = Some(list);
                cursor = node.next;
            }
        }
    }
}

impl<T> Default for StaticList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for StaticList<T> {
    fn drop(&mut self) {
        // Orphan the nodes so their own destructors skip the unlink
        let mut cursor = self.head;
        while let Some(node) = cursor {
            unsafe {
                let node = &mut *node.as_ptr();
                node.list = None;
                cursor = node.next;
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StaticList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Item<T> {
    /// New detached node owning `value`.
    pub const fn new(value: T) -> Self {
        Self {
            list: None,
            prev: None,
            next: None,
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Whether the node currently belongs to a list.
    pub fn is_linked(&self) -> bool {
        self.list.is_some()
    }

    /// Unlink from the owning list, keeping the value.
    ///
    /// The node may be pushed onto a list again afterwards. Detaching an
    /// already detached node does nothing.
    pub fn detach(&mut self) {
        self.unlink();
    }

    /// Repair the list's references to this node after it was moved.
    ///
    /// Must be called on the node at its new address, before the list is used
    /// again, whenever the node's storage has been relocated. Detached nodes
    /// need no relinking.
    ///
    /// # Safety
    ///
    /// The owning list and the node's neighbors must still be alive at the
    /// addresses they were linked (or last relinked) at, and no borrow of
    /// the list or of a linked item may be live.
    pub unsafe fn relink(&mut self) {
        let Some(list) = self.list else {
            return;
        };
        let node = NonNull::from(&mut *self);

        // The neighbors and the list did not move; only their pointers to
        // this node are stale.
        unsafe {
            match self.prev {
                Some(mut prev) => prev.as_mut().next = Some(node),
                None => (*list.as_ptr()).head = Some(node),
            }
            match self.next {
                Some(mut next) => next.as_mut().prev = Some(node),
                None => (*list.as_ptr()).tail = Some(node),
            }
        }
    }

    /// Splice this node out of the list.
    ///
    /// Head/tail membership is decided by link nullness, never by comparing
    /// addresses, so this stays correct for a node whose storage was moved
    /// without a relink (the inbound stale pointers are overwritten here).
    fn unlink(&mut self) {
        let Some(list) = self.list.take() else {
            return;
        };

        unsafe {
            let list = &mut *list.as_ptr();
            match self.prev {
                Some(mut prev) => prev.as_mut().next = self.next,
                None => list.head = self.next,
            }
            match self.next {
                Some(mut next) => next.as_mut().prev = self.prev,
                None => list.tail = self.prev,
            }
            list.len -= 1;
        }

        self.prev = None;
        self.next = None;
    }
}

impl<T: Default> Default for Item<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Deref for Item<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Item<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Drop for Item<T> {
    fn drop(&mut self) {
        self.unlink();
    }
}

impl<T: fmt::Debug> fmt::Debug for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("value", &self.value)
            .field("linked", &self.is_linked())
            .finish()
    }
}

/// Borrowing in-order iterator, see [StaticList::iter].
pub struct Iter<'a, T> {
    next: Option<NonNull<Item<T>>>,
    next_back: Option<NonNull<Item<T>>>,
    remaining: usize,
    _list: PhantomData<&'a StaticList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let node = self.next?;
        unsafe {
            let node = &*node.as_ptr();
            self.next = node.next;
            Some(&node.value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let node = self.next_back?;
        unsafe {
            let node = &*node.as_ptr();
            self.next_back = node.prev;
            Some(&node.value)
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing in-order iterator, see [StaticList::iter_mut].
pub struct IterMut<'a, T> {
    next: Option<NonNull<Item<T>>>,
    next_back: Option<NonNull<Item<T>>>,
    remaining: usize,
    _list: PhantomData<&'a mut StaticList<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let node = self.next?;
        unsafe {
            let node = &mut *node.as_ptr();
            self.next = node.next;
            Some(&mut node.value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let node = self.next_back?;
        unsafe {
            let node = &mut *node.as_ptr();
            self.next_back = node.prev;
            Some(&mut node.value)
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a StaticList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut StaticList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
