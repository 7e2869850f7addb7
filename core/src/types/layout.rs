//! Grid layout types — breakpoints and widget placements.
//!
//! A dashboard layout is stored per breakpoint: five named viewport tiers
//! from `lg` down to `xxs`, each holding an ordered list of `Placement`
//! records. The wire format matches what the web grid persists, so the
//! widget id field serializes as `"i"`.

use serde::{Deserialize, Serialize};


/// Smallest usable widget size in grid cells. The migration pass clamps
/// `minW`/`minH` up to this, never down.
pub const MIN_CELLS: u32 = 2;


/// The five viewport tiers, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Lg,
    Md,
    Sm,
    Xs,
    Xxs,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Lg,
        Breakpoint::Md,
        Breakpoint::Sm,
        Breakpoint::Xs,
        Breakpoint::Xxs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Lg => "lg",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
            Breakpoint::Xs => "xs",
            Breakpoint::Xxs => "xxs",
        }
    }
}


/// Position and size of one widget within one breakpoint's grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Widget id; persisted as `i` by the web grid.
    #[serde(rename = "i")]
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(default)]
    pub min_w: u32,
    #[serde(default)]
    pub min_h: u32,
}

impl Placement {
    /// A placement with the standard minimum size.
    pub fn new(id: &str, x: u32, y: u32, w: u32, h: u32) -> Placement {
        Placement {
            id: id.into(),
            x,
            y,
            w,
            h,
            min_w: MIN_CELLS,
            min_h: MIN_CELLS,
        }
    }
}


/// Per-breakpoint placement lists. The field set is closed: breakpoint
/// keys the defaults don't know about are dropped when saved JSON is
/// read, exactly like the original merge.
///
/// `Layouts::default()` is empty; the authoritative baseline lives in
/// `layout::defaults` and reconciliation fills every breakpoint from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layouts {
    pub lg: Vec<Placement>,
    pub md: Vec<Placement>,
    pub sm: Vec<Placement>,
    pub xs: Vec<Placement>,
    pub xxs: Vec<Placement>,
}

impl Layouts {
    pub fn get(&self, bp: Breakpoint) -> &[Placement] {
        match bp {
            Breakpoint::Lg => &self.lg,
            Breakpoint::Md => &self.md,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Xs => &self.xs,
            Breakpoint::Xxs => &self.xxs,
        }
    }

    pub fn get_mut(&mut self, bp: Breakpoint) -> &mut Vec<Placement> {
        match bp {
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Xxs => &mut self.xxs,
        }
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
