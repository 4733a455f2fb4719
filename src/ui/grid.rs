//! Selection movement across the stacked emoticon grids.
//!
//! The picker shows several panels, each a grid with the same column count.
//! Cells are addressed by a flat index running through all panels in display
//! order. Moving up or down past the edge of a panel continues in the
//! neighbouring panel, keeping the column where possible; moving past the
//! first or last cell wraps around.

/// Grid geometry for a list of panels.
#[derive(Debug, Clone, Copy)]
pub struct GridNavigator<'a> {
    /// Number of cells in each panel.
    lengths: &'a [usize],
    /// Cells per row, at least 1.
    columns: usize,
}

impl<'a> GridNavigator<'a> {
    /// Create a navigator for panels with the given cell counts.
    pub fn new(lengths: &'a [usize], columns: usize) -> Self {
        Self {
            lengths,
            columns: columns.max(1),
        }
    }

    /// Total number of cells.
    pub fn total(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Split a flat index into `(panel, offset)`.
    pub fn locate(&self, index: usize) -> Option<(usize, usize)> {
        let mut start = 0;
        for (panel, &len) in self.lengths.iter().enumerate() {
            if index < start + len {
                return Some((panel, index - start));
            }
            start += len;
        }
        None
    }

    fn flat(&self, panel: usize, offset: usize) -> usize {
        self.lengths[..panel].iter().sum::<usize>() + offset
    }

    fn rows(&self, panel: usize) -> usize {
        self.lengths[panel].div_ceil(self.columns)
    }

    /// Next non-empty panel after `panel`, wrapping.
    fn panel_after(&self, panel: usize) -> usize {
        let count = self.lengths.len();
        (1..=count)
            .map(|step| (panel + step) % count)
            .find(|&p| self.lengths[p] > 0)
            .unwrap_or(panel)
    }

    /// Previous non-empty panel before `panel`, wrapping.
    fn panel_before(&self, panel: usize) -> usize {
        let count = self.lengths.len();
        (1..=count)
            .map(|step| (panel + count - step) % count)
            .find(|&p| self.lengths[p] > 0)
            .unwrap_or(panel)
    }

    /// One cell forward, wrapping to the first cell.
    pub fn next(&self, index: usize) -> Option<usize> {
        let total = self.total();
        (total > 0).then(|| if index + 1 < total { index + 1 } else { 0 })
    }

    /// One cell back, wrapping to the last cell.
    pub fn prev(&self, index: usize) -> Option<usize> {
        let total = self.total();
        (total > 0).then(|| {
            if index == 0 || index >= total {
                total - 1
            } else {
                index - 1
            }
        })
    }

    /// One row down, continuing into the next panel.
    pub fn down(&self, index: usize) -> Option<usize> {
        let (panel, offset) = self.locate(index)?;
        let row = offset / self.columns;
        let col = offset % self.columns;

        if row + 1 < self.rows(panel) {
            let target = ((row + 1) * self.columns + col).min(self.lengths[panel] - 1);
            return Some(self.flat(panel, target));
        }

        let next = self.panel_after(panel);
        Some(self.flat(next, col.min(self.lengths[next] - 1)))
    }

    /// One row up, continuing into the previous panel's last row.
    pub fn up(&self, index: usize) -> Option<usize> {
        let (panel, offset) = self.locate(index)?;
        let row = offset / self.columns;
        let col = offset % self.columns;

        if row > 0 {
            return Some(self.flat(panel, (row - 1) * self.columns + col));
        }

        let prev = self.panel_before(panel);
        let len = self.lengths[prev];
        let last_row = (len - 1) / self.columns;
        Some(self.flat(prev, (last_row * self.columns + col).min(len - 1)))
    }

    /// Position of the row holding `index` among the rendered children,
    /// where every panel contributes one header followed by its rows.
    pub fn child_index(&self, index: usize) -> Option<usize> {
        let (panel, offset) = self.locate(index)?;
        let before: usize = (0..panel).map(|p| 1 + self.rows(p)).sum();
        Some(before + 1 + offset / self.columns)
    }
}
