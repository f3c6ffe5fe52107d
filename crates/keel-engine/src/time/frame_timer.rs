/// Timing snapshot published for one executed frame.
///
/// Written once per rendered frame and readable by every collaborator
/// (scenes, editor) while that frame runs.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds accumulated since the previous executed frame.
    pub delta_time: f64,

    /// Frames per second, recomputed once per print period.
    pub frame_rate: f64,

    /// Number of frames executed before this one.
    pub frame_index: u64,
}

/// Max-FPS frame pacer with rolling frame-rate tracking.
///
/// The host loop calls `advance(now)` on every iteration. When it returns
/// `true` the caller runs one logical frame and then calls `frame_executed()`.
/// Iterations that arrive before the frame budget has elapsed are skipped; the
/// backlog never exceeds one frame because the accumulator resets to zero
/// instead of keeping the overshoot.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_frame_time: f64,
    delta_time: f64,
    accumulated: f64,

    max_fps: u32,
    frame_budget: f64,

    frames_since_print: u32,
    time_since_print: f64,
    print_period: f64,
    frame_rate: f64,

    frame_index: u64,
}

impl FrameTimer {
    /// Creates a timer anchored at `now`.
    ///
    /// The first `advance` always runs a frame and publishes an initial
    /// frame rate of zero. `max_fps` is clamped to at least 1.
    pub fn new(max_fps: u32, print_period: f64, now: f64) -> Self {
        let max_fps = max_fps.max(1);
        let frame_budget = 1.0 / f64::from(max_fps);

        Self {
            last_frame_time: now,
            delta_time: 0.0,
            accumulated: frame_budget,
            max_fps,
            frame_budget,
            frames_since_print: 0,
            time_since_print: print_period,
            print_period,
            frame_rate: 0.0,
            frame_index: 0,
        }
    }

    /// Advances to `now` and reports whether a logical frame is due.
    pub fn advance(&mut self, now: f64) -> bool {
        // Clocks are monotonic; a regression is treated as no elapsed time.
        self.delta_time = (now - self.last_frame_time).max(0.0);
        self.last_frame_time = now;

        if self.time_since_print >= self.print_period {
            self.frame_rate = if self.time_since_print > 0.0 {
                f64::from(self.frames_since_print) / self.time_since_print
            } else {
                0.0
            };

            log::debug!(
                "fps={:.1} frames={} window={:.2}s",
                self.frame_rate,
                self.frames_since_print,
                self.time_since_print
            );

            self.time_since_print = 0.0;
            self.frames_since_print = 0;
        }

        self.time_since_print += self.delta_time;
        self.accumulated += self.delta_time;

        self.accumulated >= self.frame_budget
    }

    /// Records that the due frame ran and returns its timing snapshot.
    ///
    /// The snapshot carries the accumulated time that was handed to the frame.
    pub fn frame_executed(&mut self) -> FrameTime {
        let snapshot = self.snapshot();

        self.frames_since_print += 1;
        self.accumulated = 0.0;
        self.frame_index = self.frame_index.wrapping_add(1);

        snapshot
    }

    /// Timing values as they stand right now.
    pub fn snapshot(&self) -> FrameTime {
        FrameTime {
            delta_time: self.accumulated,
            frame_rate: self.frame_rate,
            frame_index: self.frame_index,
        }
    }

    /// Time left before the next frame is due, zero if it already is.
    pub fn remaining(&self) -> f64 {
        (self.frame_budget - self.accumulated).max(0.0)
    }

    pub fn last_frame_time(&self) -> f64 {
        self.last_frame_time
    }

    /// Elapsed time measured by the latest `advance`.
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    pub fn max_fps(&self) -> u32 {
        self.max_fps
    }

    pub fn frame_budget(&self) -> f64 {
        self.frame_budget
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn frames_since_print(&self) -> u32 {
        self.frames_since_print
    }

    pub fn time_since_print(&self) -> f64 {
        self.time_since_print
    }

    pub fn print_period(&self) -> f64 {
        self.print_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs `advance`, and `frame_executed` when due. Returns whether a frame ran.
    fn step(timer: &mut FrameTimer, now: f64) -> bool {
        let due = timer.advance(now);
        if due {
            timer.frame_executed();
        }
        due
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn budget_is_inverse_of_max_fps() {
        let t = FrameTimer::new(4, 1.0, 0.0);
        assert_eq!(t.frame_budget(), 0.25);
        assert_eq!(t.max_fps(), 4);
    }

    #[test]
    fn zero_max_fps_is_capped_not_uncapped() {
        let t = FrameTimer::new(0, 1.0, 0.0);
        assert_eq!(t.max_fps(), 1);
        assert_eq!(t.frame_budget(), 1.0);
    }

    #[test]
    fn first_iteration_runs_a_frame() {
        let mut t = FrameTimer::new(120, 3.0, 10.0);
        assert!(t.advance(10.0));
        assert_eq!(t.delta_time(), 0.0);
    }

    // ── accumulator ───────────────────────────────────────────────────────

    #[test]
    fn iterations_below_budget_are_skipped_until_threshold() {
        let mut t = FrameTimer::new(4, 100.0, 0.0);
        assert!(step(&mut t, 0.0));

        assert!(!step(&mut t, 0.0625));
        assert!(!step(&mut t, 0.125));
        assert!(!step(&mut t, 0.1875));
        assert_eq!(t.accumulated(), 0.1875);

        assert!(t.advance(0.25));
        assert_eq!(t.accumulated(), 0.25);
        t.frame_executed();
        assert_eq!(t.accumulated(), 0.0);
    }

    #[test]
    fn accumulator_resets_to_zero_not_remainder() {
        let mut t = FrameTimer::new(4, 100.0, 0.0);
        assert!(step(&mut t, 0.0));

        assert!(!step(&mut t, 0.2));
        // 0.4 accumulated: overshoots the 0.25 budget by 0.15.
        assert!(t.advance(0.4));
        let ft = t.frame_executed();
        assert!((ft.delta_time - 0.4).abs() < 1e-12);
        assert_eq!(t.accumulated(), 0.0);

        // The overshoot is not carried: a 0.125 step alone is not enough.
        assert!(!step(&mut t, 0.525));
    }

    #[test]
    fn long_stall_runs_exactly_one_frame() {
        let mut t = FrameTimer::new(60, 100.0, 0.0);
        assert!(step(&mut t, 0.0));

        assert!(step(&mut t, 5.0));
        assert_eq!(t.accumulated(), 0.0);
        assert!(!step(&mut t, 5.001));
    }

    #[test]
    fn clock_regression_counts_as_no_time() {
        let mut t = FrameTimer::new(4, 100.0, 1.0);
        assert!(step(&mut t, 1.0));
        assert!(!t.advance(0.5));
        assert_eq!(t.delta_time(), 0.0);
        assert_eq!(t.accumulated(), 0.0);
    }

    #[test]
    fn remaining_reports_time_to_next_frame() {
        let mut t = FrameTimer::new(4, 100.0, 0.0);
        assert!(step(&mut t, 0.0));
        assert_eq!(t.remaining(), 0.25);
        assert!(!step(&mut t, 0.125));
        assert_eq!(t.remaining(), 0.125);
    }

    // ── frame rate ────────────────────────────────────────────────────────

    #[test]
    fn frame_rate_is_frames_over_print_period_at_boundary() {
        let mut t = FrameTimer::new(4, 1.0, 0.0);

        // t = 0: initial publish (0 fps) then the first frame.
        assert!(step(&mut t, 0.0));
        assert_eq!(t.frame_rate(), 0.0);

        for now in [0.25, 0.5, 0.75, 1.0] {
            assert!(step(&mut t, now));
        }
        assert_eq!(t.time_since_print(), 1.0);
        assert_eq!(t.frames_since_print(), 5);

        // Next iteration crosses the boundary: 5 frames over exactly 1 second.
        t.advance(1.25);
        assert_eq!(t.frame_rate(), 5.0);
        assert_eq!(t.frames_since_print(), 0);
        assert_eq!(t.time_since_print(), 0.25);
    }

    #[test]
    fn frame_rate_holds_between_boundaries() {
        let mut t = FrameTimer::new(4, 2.0, 0.0);
        assert!(step(&mut t, 0.0));
        for i in 1..=8 {
            step(&mut t, f64::from(i) * 0.25);
        }
        t.advance(2.25);
        assert_eq!(t.frame_rate(), 4.5);

        step(&mut t, 2.5);
        assert_eq!(t.frame_rate(), 4.5);
    }

    #[test]
    fn snapshot_carries_index_and_rate() {
        let mut t = FrameTimer::new(4, 1.0, 0.0);
        let first = {
            assert!(t.advance(0.0));
            t.frame_executed()
        };
        assert_eq!(first.frame_index, 0);
        assert_eq!(first.delta_time, 0.25);

        assert!(t.advance(0.5));
        let second = t.frame_executed();
        assert_eq!(second.frame_index, 1);
        assert_eq!(second.delta_time, 0.5);
        assert_eq!(t.snapshot().frame_index, 2);
    }
}
