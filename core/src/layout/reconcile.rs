//! Layout reconciliation — merge a saved layout with the default table.
//!
//! The defaults give the authoritative ordering and base geometry for each
//! breakpoint. A saved placement with a matching id wins, except that a
//! degenerate saved height (below the default's minimum or below
//! `MIN_CELLS`) falls back to the default's height. Saved placements the
//! defaults don't know about are appended unchanged, never dropped.

use crate::layout::defaults;
use crate::types::layout::{Breakpoint, Layouts, Placement, MIN_CELLS};


/// Reconcile one breakpoint's saved placements against its defaults.
pub fn reconcile_breakpoint(default: &[Placement], saved: &[Placement]) -> Vec<Placement> {
    let mut merged: Vec<Placement> = default
        .iter()
        .map(|d| match saved.iter().find(|s| s.id == d.id) {
            // A previously persisted degenerate height: keep the saved
            // position but restore the default height and minimum.
            Some(s) if s.h < d.min_h || s.h < MIN_CELLS => Placement {
                h: d.h,
                min_h: d.min_h,
                ..s.clone()
            },
            Some(s) => s.clone(),
            None => d.clone(),
        })
        .collect();

    // Saved placements with no default counterpart are carried over.
    for s in saved {
        if !merged.iter().any(|m| m.id == s.id) {
            merged.push(s.clone());
        }
    }

    merged
}


/// Reconcile every breakpoint of the default table against `saved`.
/// Breakpoints absent from the defaults are dropped.
pub fn reconcile_layouts(saved: &Layouts) -> Layouts {
    let baseline = defaults::default_layouts();
    let mut merged = Layouts::default();
    for bp in Breakpoint::ALL {
        *merged.get_mut(bp) = reconcile_breakpoint(baseline.get(bp), saved.get(bp));
    }
    merged
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
