//! Column-count aware placement of flashback tiles.
//!
//! Placement is row-major over a fixed column width. Resize notifications are
//! debounced: only the last one in a burst is acted on, and only when its
//! width differs from the width the grid was last laid out for.

use log::debug;
use std::time::{Duration, Instant};

/// Row/column position of each item plus the column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlacement {
    pub column_count: usize,
    /// `(row, column)` for each item, in item order.
    pub cells: Vec<(usize, usize)>,
}

impl GridPlacement {
    pub fn row_count(&self) -> usize {
        self.cells.last().map(|(row, _)| row + 1).unwrap_or(0)
    }
}

/// Lays out `item_count` items in as many columns of `column_width` as fit.
pub fn plan(available_width: f32, column_width: f32, item_count: usize) -> GridPlacement {
    let fitting = if column_width > 0.0 && available_width.is_finite() {
        (available_width / column_width).floor().max(0.0) as usize
    } else {
        0
    };
    let column_count = fitting.max(1);

    let cells = (0..item_count)
        .map(|index| (index / column_count, index % column_count))
        .collect();

    GridPlacement {
        column_count,
        cells,
    }
}

/// What a resize timer should do when it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizePoll {
    /// No resize is pending.
    Idle,
    /// The quiet period has not elapsed; check again after this long.
    Waiting(Duration),
    /// The burst settled on the width already laid out.
    Unchanged,
    /// The burst settled on a new width; reflow the grid.
    Reflow(f32),
}

#[derive(Debug, Clone, Copy)]
struct PendingResize {
    width: f32,
    due: Instant,
}

pub struct GridLayoutPlanner {
    column_width: f32,
    debounce: Duration,
    last_width: Option<f32>,
    pending: Option<PendingResize>,
}

impl GridLayoutPlanner {
    pub fn new(column_width: f32, debounce: Duration) -> Self {
        Self {
            column_width,
            debounce,
            last_width: None,
            pending: None,
        }
    }

    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    /// Lays out the items and remembers `available_width` as current.
    pub fn plan(&mut self, available_width: f32, item_count: usize) -> GridPlacement {
        let placement = plan(available_width, self.column_width, item_count);
        debug!(
            "Grid plan: width {} -> {} column(s) for {} item(s)",
            available_width, placement.column_count, item_count
        );
        self.last_width = Some(available_width);
        placement
    }

    /// Records a resize notification, replacing any pending one.
    ///
    /// Returns how long the caller should wait before polling.
    pub fn notify_resize(&mut self, width: f32, now: Instant) -> Duration {
        self.pending = Some(PendingResize {
            width,
            due: now + self.debounce,
        });
        self.debounce
    }

    /// Resolves the pending resize once its quiet period has passed.
    pub fn poll_resize(&mut self, now: Instant) -> ResizePoll {
        let Some(pending) = self.pending else {
            return ResizePoll::Idle;
        };

        if now < pending.due {
            return ResizePoll::Waiting(pending.due - now);
        }

        self.pending = None;
        if self.last_width == Some(pending.width) {
            debug!("Resize settled on unchanged width {}", pending.width);
            ResizePoll::Unchanged
        } else {
            ResizePoll::Reflow(pending.width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(200);

    #[test]
    fn five_items_in_seven_hundred_pixels() {
        let placement = plan(700.0, 210.0, 5);
        assert_eq!(placement.column_count, 3);
        assert_eq!(placement.cells[3], (1, 0));
        assert_eq!(placement.cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]);
        assert_eq!(placement.row_count(), 2);
    }

    #[test]
    fn narrow_window_still_gets_one_column() {
        let placement = plan(100.0, 210.0, 3);
        assert_eq!(placement.column_count, 1);
        assert_eq!(placement.cells, vec![(0, 0), (1, 0), (2, 0)]);

        assert_eq!(plan(0.0, 210.0, 0).column_count, 1);
        assert_eq!(plan(f32::NAN, 210.0, 1).column_count, 1);
    }

    #[test]
    fn exact_multiple_fills_row() {
        let placement = plan(630.0, 210.0, 4);
        assert_eq!(placement.column_count, 3);
        assert_eq!(placement.cells[2], (0, 2));
        assert_eq!(placement.cells[3], (1, 0));
    }

    #[test]
    fn empty_grid_has_no_rows() {
        assert_eq!(plan(700.0, 210.0, 0).row_count(), 0);
    }

    #[test]
    fn widening_reflows_every_item() {
        let mut planner = GridLayoutPlanner::new(210.0, DEBOUNCE);
        let narrow = planner.plan(420.0, 4);
        let wide = planner.plan(900.0, 4);
        assert_eq!(narrow.cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(wide.cells, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn burst_of_resizes_triggers_one_reflow_with_last_width() {
        let mut planner = GridLayoutPlanner::new(210.0, DEBOUNCE);
        planner.plan(700.0, 5);
        let start = Instant::now();

        let widths = [720.0, 760.0, 800.0, 850.0, 910.0];
        let mut last_notice = start;
        for (i, width) in widths.iter().enumerate() {
            last_notice = start + Duration::from_millis(i as u64 * 30);
            assert_eq!(planner.notify_resize(*width, last_notice), DEBOUNCE);
        }

        let mut reflows = Vec::new();
        let mut now = start;
        while now <= last_notice + DEBOUNCE + Duration::from_millis(100) {
            if let ResizePoll::Reflow(width) = planner.poll_resize(now) {
                reflows.push(width);
            }
            now += Duration::from_millis(10);
        }

        assert_eq!(reflows, vec![910.0]);
        assert_eq!(planner.poll_resize(now), ResizePoll::Idle);
    }

    #[test]
    fn early_poll_reports_remaining_wait() {
        let mut planner = GridLayoutPlanner::new(210.0, DEBOUNCE);
        let start = Instant::now();
        planner.notify_resize(500.0, start);
        assert_eq!(
            planner.poll_resize(start + Duration::from_millis(50)),
            ResizePoll::Waiting(Duration::from_millis(150))
        );
        assert_eq!(planner.poll_resize(start + DEBOUNCE), ResizePoll::Reflow(500.0));
    }

    #[test]
    fn unchanged_width_skips_reflow() {
        let mut planner = GridLayoutPlanner::new(210.0, DEBOUNCE);
        planner.plan(640.0, 2);
        let start = Instant::now();
        planner.notify_resize(700.0, start);
        planner.notify_resize(640.0, start + Duration::from_millis(20));

        assert_eq!(
            planner.poll_resize(start + Duration::from_millis(220)),
            ResizePoll::Unchanged
        );
        assert_eq!(planner.poll_resize(start + Duration::from_secs(1)), ResizePoll::Idle);
    }

    #[test]
    fn first_resize_before_any_layout_reflows() {
        let mut planner = GridLayoutPlanner::new(210.0, DEBOUNCE);
        let start = Instant::now();
        planner.notify_resize(0.0, start);
        assert_eq!(planner.poll_resize(start + DEBOUNCE), ResizePoll::Reflow(0.0));
    }
}
