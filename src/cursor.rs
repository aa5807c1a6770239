// cursor.rs - Cursor Position Readout
//
// Debug aid for authoring geometry tables: a small window that shows the
// global cursor position, polled on its own interval independently of
// the capture pipeline. The actual cursor query is platform code in the
// binary; this type owns the cadence and the label.

use std::time::{Duration, Instant};

use crate::geometry::Point;

pub struct MousePositionView {
    interval: Duration,
    last_poll: Option<Instant>,
    position: Option<Point>,
}

impl MousePositionView {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_poll: None,
            position: None,
        }
    }

    /// Whether a poll is due at `now`. The first call is always due.
    pub fn due(&self, now: Instant) -> bool {
        match self.last_poll {
            Some(last) => now.duration_since(last) >= self.interval,
            None => true,
        }
    }

    /// When the next poll is due, for event-loop wakeup scheduling.
    pub fn next_due(&self, now: Instant) -> Instant {
        match self.last_poll {
            Some(last) => last + self.interval,
            None => now,
        }
    }

    /// Record a poll result. Returns true when the label changed and the
    /// readout window should repaint.
    pub fn record(&mut self, now: Instant, position: Option<Point>) -> bool {
        self.last_poll = Some(now);
        let changed = position != self.position;
        self.position = position;
        changed
    }

    /// Readout text, e.g. `X: 1582, Y: 1297`. Dashes while the platform
    /// has no cursor position to report.
    pub fn label(&self) -> String {
        match self.position {
            Some(p) => format!("X: {}, Y: {}", p.x, p.y),
            None => "X: --, Y: --".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_is_always_due() {
        let view = MousePositionView::new(Duration::from_millis(30));
        assert!(view.due(Instant::now()));
    }

    #[test]
    fn polls_are_gated_by_the_interval() {
        let mut view = MousePositionView::new(Duration::from_millis(30));
        let start = Instant::now();

        view.record(start, Some(Point::new(1, 1)));
        assert!(!view.due(start + Duration::from_millis(10)));
        assert!(view.due(start + Duration::from_millis(30)));
        assert_eq!(view.next_due(start), start + Duration::from_millis(30));
    }

    #[test]
    fn record_reports_label_changes_only() {
        let mut view = MousePositionView::new(Duration::from_millis(30));
        let now = Instant::now();

        assert!(view.record(now, Some(Point::new(100, 200))));
        assert!(!view.record(now, Some(Point::new(100, 200))));
        assert!(view.record(now, Some(Point::new(101, 200))));
        assert!(view.record(now, None));
    }

    #[test]
    fn label_formats_position_or_dashes() {
        let mut view = MousePositionView::new(Duration::from_millis(30));
        assert_eq!(view.label(), "X: --, Y: --");

        view.record(Instant::now(), Some(Point::new(1582, 1297)));
        assert_eq!(view.label(), "X: 1582, Y: 1297");
    }
}
