//! Lifecycle events at which triggers fire.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of component lifecycle events.
///
/// A trigger registers for one event or a union of several; dispatch always
/// fires a single event.
///
/// # Examples
///
/// ```rust
/// use term_field::triggers::TriggerEvents;
///
/// let on = TriggerEvents::BEFORE_GET | TriggerEvents::AFTER_GET;
/// assert!(on.contains(TriggerEvents::AFTER_GET));
/// assert!(!on.contains(TriggerEvents::BEFORE_SET));
/// assert_eq!(on.to_string(), "BeforeGet | AfterGet");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TriggerEvents(u32);

impl TriggerEvents {
    /// No events.
    pub const NONE: Self = Self(0);
    /// The owning page object is being initialized.
    pub const ON_PAGE_OBJECT_INIT: Self = Self(1 << 0);
    /// The owning page object finished initialization.
    pub const ON_PAGE_OBJECT_INIT_COMPLETED: Self = Self(1 << 1);
    /// A field value is about to be read.
    pub const BEFORE_GET: Self = Self(1 << 2);
    /// A field value has been read.
    pub const AFTER_GET: Self = Self(1 << 3);
    /// A field value is about to be written.
    pub const BEFORE_SET: Self = Self(1 << 4);
    /// A field value has been written.
    pub const AFTER_SET: Self = Self(1 << 5);

    const NAMED: [(Self, &'static str); 6] = [
        (Self::ON_PAGE_OBJECT_INIT, "OnPageObjectInit"),
        (Self::ON_PAGE_OBJECT_INIT_COMPLETED, "OnPageObjectInitCompleted"),
        (Self::BEFORE_GET, "BeforeGet"),
        (Self::AFTER_GET, "AfterGet"),
        (Self::BEFORE_SET, "BeforeSet"),
        (Self::AFTER_SET, "AfterSet"),
    ];

    /// Returns true if every event in `other` is in `self`.
    pub fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Returns true if `self` and `other` share at least one event.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn single_name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(event, _)| *event == self)
            .map(|(_, name)| *name)
    }

    /// Iterates over the single events in this set.
    pub fn iter(self) -> impl Iterator<Item = TriggerEvents> {
        Self::NAMED
            .into_iter()
            .map(|(event, _)| event)
            .filter(move |event| self.contains(*event))
    }
}

impl BitOr for TriggerEvents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TriggerEvents {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for TriggerEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        let names: Vec<&str> = self.iter().filter_map(TriggerEvents::single_name).collect();
        write!(f, "{}", names.join(" | "))
    }
}

impl fmt::Debug for TriggerEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TriggerEvents({self})")
    }
}
