//! Virtualization geometry.
//!
//! All rows share one height and all gaps share one separator height, so the
//! position of any row is `index * stride` where `stride = row_height +
//! separator_height`. The visible window and the realized window (visible plus
//! overscan rows on each side) are computed from the scroll offset alone,
//! without touching the data.

use std::ops::Range;

use super::types::ItemLayout;

/// Fixed geometry used to compute windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Geometry {
    pub row_height: usize,
    pub separator_height: usize,
    pub viewport_height: usize,
    pub overscan: usize,
}

/// Rows to show and rows to realize for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Window {
    pub visible: Range<usize>,
    pub realized: Range<usize>,
}

impl Geometry {
    pub fn new(
        row_height: usize,
        separator_height: usize,
        viewport_height: usize,
        overscan: usize,
    ) -> Self {
        Self {
            row_height: row_height.max(1),
            separator_height,
            viewport_height,
            overscan,
        }
    }

    pub fn stride(&self) -> usize {
        self.row_height + self.separator_height
    }

    /// Total lines of `len` rows with separators between them.
    pub fn content_height(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        len * self.row_height + (len - 1) * self.separator_height
    }

    pub fn max_offset(&self, len: usize) -> usize {
        self.content_height(len)
            .saturating_sub(self.viewport_height)
    }

    pub fn layout(&self, index: usize) -> ItemLayout {
        ItemLayout {
            index,
            offset: index * self.stride(),
            length: self.row_height,
        }
    }

    /// Upper bound on rows realized in any frame.
    ///
    /// A viewport can cut one row or separator at each edge, hence the two
    /// extra rows.
    pub fn max_realized(&self) -> usize {
        self.viewport_height
            .div_ceil(self.stride())
            .saturating_add(2)
            .saturating_add(self.overscan.saturating_mul(2))
    }

    /// Computes the window for a list of `len` rows scrolled to `offset`.
    pub fn window(&self, len: usize, offset: usize) -> Window {
        if len == 0 || self.viewport_height == 0 {
            return Window {
                visible: 0..0,
                realized: 0..0,
            };
        }

        let stride = self.stride();
        let offset = offset.min(self.max_offset(len));
        let last_line = offset + self.viewport_height - 1;

        // A row counts as visible when its lines or a separator next to it
        // are on screen, so the realized strip always covers every line.
        let first = offset / stride;
        let end = ((last_line + self.separator_height) / stride + 1).min(len);

        Window {
            visible: first..end,
            realized: first.saturating_sub(self.overscan)..end.saturating_add(self.overscan).min(len),
        }
    }
}
