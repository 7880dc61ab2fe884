//! Window lifecycle and session admission

use std::time::Duration;

use crate::gate::AdmissionGate;
use crate::host::{Host, Surface};
use crate::layout::{resolve, Layout};
use crate::reveal::TypewriterReveal;
use crate::types::DisplayRequest;

/// Lifecycle of one message window after admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Glyphs are still being revealed
    Revealing,
    /// Fully revealed, waiting out the hold period
    Holding { remaining: Duration },
    /// Ready to be detached and released
    Closed,
}

/// One active message window: owns its surface and drives the reveal,
/// then the hold period, to completion.
struct MessageWindow<S: Surface> {
    surface: S,
    reveal: TypewriterReveal,
    hold: Duration,
    phase: Phase,
}

impl<S: Surface> MessageWindow<S> {
    fn new(mut surface: S, layout: Layout, request: &DisplayRequest) -> Self {
        surface.clear();
        let reveal =
            TypewriterReveal::new(&request.message, request.velocity_ms, layout.width as f32);
        Self {
            surface,
            reveal,
            hold: Duration::from_secs_f32(request.hold_secs.max(0.0)),
            phase: Phase::Revealing,
        }
    }

    /// Advance by `delta`. Returns true while the window stays open.
    fn update(&mut self, delta: Duration) -> bool {
        match self.phase {
            Phase::Revealing => {
                self.reveal.update(delta, &mut self.surface);
                if self.reveal.is_complete() {
                    // Hold expiry is only checked on a later update, so
                    // dismissal stays asynchronous even at zero hold.
                    self.phase = Phase::Holding {
                        remaining: self.hold,
                    };
                    log::debug!("message revealed, holding for {:?}", self.hold);
                }
                true
            }
            Phase::Holding { remaining } => {
                if remaining > delta {
                    self.phase = Phase::Holding {
                        remaining: remaining - delta,
                    };
                    true
                } else {
                    self.phase = Phase::Closed;
                    false
                }
            }
            Phase::Closed => false,
        }
    }

    fn into_surface(self) -> S {
        self.surface
    }
}

/// Owns the admission gate, the host handle, and at most one active
/// message window.
///
/// The caller drives the session from a single thread: [`show`](Self::show)
/// to submit a request, [`update`](Self::update) from the event loop with
/// the time elapsed since the last call.
pub struct Session<H: Host> {
    host: H,
    gate: AdmissionGate,
    active: Option<MessageWindow<H::Surface>>,
}

impl<H: Host> Session<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            gate: AdmissionGate::new(),
            active: None,
        }
    }

    /// Submit a request.
    ///
    /// Returns false when another window is still in flight; the request
    /// is dropped silently, not queued. On acceptance the window surface
    /// is created, attached, and cleared before the first reveal tick.
    pub fn show(&mut self, request: DisplayRequest) -> bool {
        if !self.gate.try_accept() {
            return false;
        }

        let (screen_width, screen_height) = self.host.screen_size();
        let layout = resolve(&request, screen_width, screen_height);
        log::info!(
            "opening message window {}x{} at ({}, {})",
            layout.width,
            layout.height,
            layout.x,
            layout.y
        );

        let surface = self.host.open(&layout);
        self.active = Some(MessageWindow::new(surface, layout, &request));
        true
    }

    /// Advance the active window, detaching it and releasing the gate once
    /// its hold period has expired. Returns true while a window is open.
    pub fn update(&mut self, delta: Duration) -> bool {
        let open = match self.active.as_mut() {
            Some(window) => window.update(delta),
            None => return false,
        };

        if !open {
            if let Some(window) = self.active.take() {
                self.host.close(window.into_surface());
            }
            self.gate.release();
            log::info!("message window closed");
        }
        self.gate.is_active()
    }

    /// Whether a request is currently in flight.
    pub fn is_active(&self) -> bool {
        self.gate.is_active()
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use std::cell::RefCell;
    use std::rc::Rc;

    const GLYPH_WIDTH: f32 = 12.0;
    const LINE_HEIGHT: f32 = 20.0;

    type DrawLog = Rc<RefCell<Vec<(char, f32, f32)>>>;

    struct TestSurface {
        drawn: DrawLog,
    }

    impl Surface for TestSurface {
        fn clear(&mut self) {
            self.drawn.borrow_mut().clear();
        }

        fn glyph_width(&mut self, _glyph: char) -> f32 {
            GLYPH_WIDTH
        }

        fn line_height(&self) -> f32 {
            LINE_HEIGHT
        }

        fn draw_glyph(&mut self, glyph: char, x: f32, y: f32) {
            self.drawn.borrow_mut().push((glyph, x, y));
        }
    }

    struct TestHost {
        drawn: DrawLog,
        opened: Vec<Layout>,
        closed: usize,
    }

    impl TestHost {
        fn new(drawn: DrawLog) -> Self {
            Self {
                drawn,
                opened: Vec::new(),
                closed: 0,
            }
        }
    }

    impl Host for TestHost {
        type Surface = TestSurface;

        fn screen_size(&self) -> (u32, u32) {
            (816, 624)
        }

        fn open(&mut self, layout: &Layout) -> TestSurface {
            self.opened.push(*layout);
            TestSurface {
                drawn: Rc::clone(&self.drawn),
            }
        }

        fn close(&mut self, _surface: TestSurface) {
            self.closed += 1;
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let drawn: DrawLog = Rc::default();
        let mut session = Session::new(TestHost::new(Rc::clone(&drawn)));

        let request = DisplayRequest::new("Hi")
            .with_velocity_ms(100)
            .with_size(600, 200)
            .with_position(Position::Center)
            .with_hold_secs(5.0);
        assert!(session.show(request));
        assert!(session.is_active());
        assert_eq!(
            session.host().opened,
            vec![Layout {
                x: 108,
                y: 212,
                width: 600,
                height: 200
            }]
        );

        // Two glyph reveals 100 ms apart
        session.update(Duration::ZERO);
        assert_eq!(drawn.borrow().len(), 1);
        session.update(Duration::from_millis(100));
        assert_eq!(drawn.borrow().len(), 2);
        assert_eq!(drawn.borrow()[1], ('i', GLYPH_WIDTH, 0.0));

        // Completion tick starts the five second hold
        session.update(Duration::from_millis(100));
        assert!(session.is_active());

        session.update(Duration::from_millis(4999));
        assert!(session.is_active());
        assert_eq!(session.host().closed, 0);

        session.update(Duration::from_millis(1));
        assert!(!session.is_active());
        assert_eq!(session.host().closed, 1);
    }

    #[test]
    fn test_overlapping_request_is_dropped() {
        let drawn: DrawLog = Rc::default();
        let mut session = Session::new(TestHost::new(Rc::clone(&drawn)));

        assert!(session.show(DisplayRequest::new("first").with_velocity_ms(0)));
        assert!(!session.show(DisplayRequest::new("second")));
        // No surface was created for the rejected request
        assert_eq!(session.host().opened.len(), 1);

        // Finish the first request: reveal, then its full hold period
        session.update(Duration::ZERO);
        session.update(Duration::from_secs(30));
        assert!(!session.is_active());

        // Only now is a new request admitted
        assert!(session.show(DisplayRequest::new("third")));
        assert_eq!(session.host().opened.len(), 2);
    }

    #[test]
    fn test_zero_hold_dismisses_on_next_update() {
        let drawn: DrawLog = Rc::default();
        let mut session = Session::new(TestHost::new(drawn));

        session.show(
            DisplayRequest::new("x")
                .with_velocity_ms(0)
                .with_hold_secs(0.0),
        );

        // The update that completes the reveal never closes the window
        assert!(session.update(Duration::ZERO));
        assert!(session.is_active());

        // The next scheduling opportunity does
        assert!(!session.update(Duration::ZERO));
        assert!(!session.is_active());
        assert_eq!(session.host().closed, 1);
    }

    #[test]
    fn test_update_without_active_window_is_a_no_op() {
        let drawn: DrawLog = Rc::default();
        let mut session = Session::new(TestHost::new(drawn));
        assert!(!session.update(Duration::from_secs(1)));
        assert_eq!(session.host().closed, 0);
    }
}
