//! Migration pass — self-heal minimum sizes on loaded layouts.
//!
//! Earlier releases persisted placements whose `minW`/`minH` were below
//! the usable grid size. The pass clamps both up to `MIN_CELLS` (never
//! down, never touching `w`/`h`) and reports whether anything changed so
//! the caller can write back exactly once. Running it again on migrated
//! data is a no-op.

use crate::types::layout::{Breakpoint, Layouts, MIN_CELLS};


/// Clamp `minW`/`minH` up to `MIN_CELLS` across all breakpoints.
/// Returns `true` if any placement was changed.
pub fn clamp_minimums(layouts: &mut Layouts) -> bool {
    let mut changed = false;
    for bp in Breakpoint::ALL {
        for placement in layouts.get_mut(bp) {
            if placement.min_w < MIN_CELLS || placement.min_h < MIN_CELLS {
                placement.min_w = placement.min_w.max(MIN_CELLS);
                placement.min_h = placement.min_h.max(MIN_CELLS);
                changed = true;
            }
        }
    }
    changed
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
