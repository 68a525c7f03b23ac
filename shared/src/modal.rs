//! Which dialogs are open, topmost last.
//!
//! The app keeps one [`ModalStack`] for every page. Each entry records the
//! page that opened it, and Escape always closes the topmost entry, so a
//! lookup popup opened from inside a record form closes before the form
//! does.

use crate::lookup::LookupKind;
use crate::records::RecordKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    /// Create/edit dialog of the page's record kind
    RecordForm,
    /// Lookup popup writing its result into the named field
    Lookup(LookupKind, &'static str),
    /// Calendar popup writing its result into the named field
    Calendar(&'static str),
}

/// A dialog together with the page that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalEntry {
    pub owner: RecordKind,
    pub id: ModalId,
}

impl ModalEntry {
    pub fn new(owner: RecordKind, id: ModalId) -> Self {
        Self { owner, id }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalStack {
    stack: Vec<ModalEntry>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `entry` on top. An already open entry is moved to the top.
    pub fn open(&mut self, entry: ModalEntry) {
        self.stack.retain(|open| *open != entry);
        self.stack.push(entry);
    }

    /// Close `entry` wherever it is in the stack
    pub fn close(&mut self, entry: ModalEntry) -> bool {
        let before = self.stack.len();
        self.stack.retain(|open| *open != entry);
        before != self.stack.len()
    }

    /// Escape key
    pub fn close_top(&mut self) -> Option<ModalEntry> {
        self.stack.pop()
    }

    /// Drop every dialog, e.g. when the visible screen changes
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn top(&self) -> Option<ModalEntry> {
        self.stack.last().copied()
    }

    pub fn is_open(&self, entry: ModalEntry) -> bool {
        self.stack.contains(&entry)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Bottom to top, the order dialogs are rendered in
    pub fn iter(&self) -> impl Iterator<Item = ModalEntry> + '_ {
        self.stack.iter().copied()
    }

    /// Dialogs owned by one page, bottom to top
    pub fn owned_by(&self, owner: RecordKind) -> impl Iterator<Item = ModalId> + '_ {
        self.stack.iter().filter(move |entry| entry.owner == owner).map(|entry| entry.id)
    }
}
