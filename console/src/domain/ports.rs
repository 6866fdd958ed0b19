//! Ports to the collaborators outside the core.
//!
//! Views subscribe to stores through [`StoreListener`]; the toast display
//! receives notices through [`Notifier`]. Both are synchronous: a store
//! calls its listeners before the mutating method returns.

use super::notification::Notice;

/// Which slice of state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreChange {
    /// The user collection was added to, edited, or shrunk.
    Users,
    /// The user list sort direction changed.
    SortDirection,
    /// The settings record changed.
    Settings,
    /// The theme preference changed.
    Theme,
}

/// Receives change notifications from a store.
#[cfg_attr(test, mockall::automock)]
pub trait StoreListener {
    /// Called once per effective mutation.
    fn on_change(&mut self, change: StoreChange);
}

/// Receives transient notices for display.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Display `notice`; no acknowledgement is expected.
    fn notify(&mut self, notice: Notice);
}

/// In-memory [`Notifier`] that keeps notices until drained.
///
/// # Examples
///
/// ```
/// use admin_console::domain::{Notice, NoticeQueue, Notifier};
///
/// let mut queue = NoticeQueue::default();
/// queue.notify(Notice::info("hello"));
/// assert_eq!(queue.drain(), vec![Notice::info("hello")]);
/// assert!(queue.pending().is_empty());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
}

impl NoticeQueue {
    /// Notices not yet drained, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[Notice] {
        &self.notices
    }

    /// Take every pending notice, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
