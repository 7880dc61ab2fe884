//! Headless drive loop

use std::time::{Duration, Instant};

/// Frame interval for the headless loop.
const FRAME: Duration = Duration::from_millis(16);

/// Drive `step` like a render loop until it returns false.
///
/// Each iteration sleeps one frame, measures the real elapsed time since
/// the previous frame, and passes it to `step` — the session's `update`
/// belongs in there, preceded by whatever command draining the caller
/// needs.
pub fn run<F>(mut step: F)
where
    F: FnMut(Duration) -> bool,
{
    let mut last_frame = Instant::now();
    loop {
        std::thread::sleep(FRAME);
        let now = Instant::now();
        let delta = now.duration_since(last_frame);
        last_frame = now;

        if !step(delta) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_accumulates_elapsed_time() {
        let mut total = Duration::ZERO;
        run(|delta| {
            total += delta;
            total < Duration::from_millis(50)
        });
        assert!(total >= Duration::from_millis(50));
    }
}
