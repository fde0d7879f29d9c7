//! Reorder arithmetic for the drag-sortable note board.
//!
//! The UI reports which item was dropped over which; the owner of the list
//! commits the new order with [`apply_reorder`].

use crate::error::{Error, Result};

/// Move the item at `from` so it ends up at index `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

impl Reorder {
    /// Reorder produced by dropping `active` onto `over`.
    ///
    /// `None` when either id is unknown or both are the same item.
    #[must_use]
    pub fn between<T: PartialEq>(ids: &[T], active: &T, over: &T) -> Option<Self> {
        if active == over {
            return None;
        }
        let from = ids.iter().position(|id| id == active)?;
        let to = ids.iter().position(|id| id == over)?;
        Some(Self { from, to })
    }

    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Apply a reorder in place (remove at `from`, insert at `to`).
pub fn apply_reorder<T>(items: &mut Vec<T>, reorder: Reorder) -> Result<()> {
    let len = items.len();
    if reorder.from >= len || reorder.to >= len {
        return Err(Error::InvalidReorder {
            from: reorder.from,
            to: reorder.to,
            len,
        });
    }
    if reorder.is_noop() {
        return Ok(());
    }

    let item = items.remove(reorder.from);
    items.insert(reorder.to, item);
    tracing::debug!("Moved item {} -> {}", reorder.from, reorder.to);
    Ok(())
}
