//! Tracking lifecycle: owns the landmark source and the session, bounded
//! by explicit `start`/`stop`, pumped one frame at a time.
//!
//! The detector and camera live behind [`LandmarkSource`] so the whole
//! pipeline can be driven by a scripted backend in tests.

use crate::landmarks::HandFrame;
use crate::session::Session;
use anyhow::Context;
use std::collections::VecDeque;

/// One delivery from the landmark source. `video_ts` is the source video
/// timestamp used to drop frames that were already processed.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFrame {
    pub hand: Option<HandFrame>,
    pub video_ts: f64,
}

/// Camera + hand landmark detector boundary. `open` performs the async
/// resource acquisition (camera permission, model load) once at start-up;
/// `next_frame` must never block.
pub trait LandmarkSource {
    fn open(&mut self) -> anyhow::Result<()>;
    /// The most recent detection, or `None` when no new frame is ready.
    fn next_frame(&mut self) -> anyhow::Result<Option<SourceFrame>>;
    fn close(&mut self) -> anyhow::Result<()>;
}

pub struct TrackingService {
    source: Box<dyn LandmarkSource>,
    session: Session,
    running: bool,
    last_video_ts: Option<f64>,
}

impl TrackingService {
    pub fn new(source: Box<dyn LandmarkSource>, session: Session) -> Self {
        Self {
            source,
            session,
            running: false,
            last_video_ts: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Acquire the source. When acquisition fails the service stays
    /// stopped and the error is surfaced to the caller for display.
    pub fn start(&mut self) -> anyhow::Result<()> {
        if self.running {
            return Ok(());
        }
        self.source
            .open()
            .context("failed to start hand tracking")?;
        self.running = true;
        tracing::info!("hand tracking started");
        Ok(())
    }

    /// Halt the pump, release the source and drop all transient state.
    /// Committed notes and strokes survive; a later `start` begins from a
    /// clean idle state.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.last_video_ts = None;
        if let Err(err) = self.source.close() {
            tracing::error!(?err, "failed to release landmark source");
        }
        self.session.reset_transient();
        tracing::info!("hand tracking stopped");
    }

    /// Run one tick: poll the source, skip already-processed video frames,
    /// feed the session. Returns whether a frame was processed.
    ///
    /// A faulty frame from the source is logged and dropped; every tick is
    /// a fresh attempt, so the frame loop itself is the retry mechanism.
    pub fn pump_frame(&mut self, at_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        let frame = match self.source.next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => return false,
            Err(err) => {
                tracing::warn!(?err, "frame processing failed, keeping previous state");
                return false;
            }
        };
        if self.last_video_ts == Some(frame.video_ts) {
            return false;
        }
        self.last_video_ts = Some(frame.video_ts);
        self.session.tick(frame.hand.as_ref(), at_ms);
        true
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

/// Scripted source for tests: replays a queue of frames, optionally
/// failing on open.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    frames: VecDeque<anyhow::Result<Option<SourceFrame>>>,
    fail_open: bool,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    pub fn push_frame(&mut self, hand: Option<HandFrame>, video_ts: f64) {
        self.frames.push_back(Ok(Some(SourceFrame { hand, video_ts })));
    }

    pub fn push_fault(&mut self, message: &'static str) {
        self.frames.push_back(Err(anyhow::anyhow!(message)));
    }
}

impl LandmarkSource for ScriptedSource {
    fn open(&mut self) -> anyhow::Result<()> {
        if self.fail_open {
            anyhow::bail!("camera permission denied");
        }
        Ok(())
    }

    fn next_frame(&mut self) -> anyhow::Result<Option<SourceFrame>> {
        self.frames.pop_front().unwrap_or(Ok(None))
    }

    fn close(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
