use {
    std::{
        sync::{Arc, Mutex},
        time::Duration,
    },
    tokio::{
        task::JoinHandle,
        time::{Instant, interval_at},
    },
};

pub const SLIDE_GAP_PX: f64 = 12.0;
pub const AUTOPLAY_PERIOD: Duration = Duration::from_secs(5);

/// Whatever moves the reviews strip on screen.
pub trait SlideTrack: Send + Sync {
    fn translate_x(&self, offset_px: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SlideState {
    index: usize,
    total: usize,
    slide_width: f64,
}

impl SlideState {
    fn offset(&self) -> f64 {
        -(self.index as f64) * (self.slide_width + SLIDE_GAP_PX)
    }

    fn step(&mut self, forward: bool) {
        if self.total == 0 {
            return;
        }
        self.index = if forward {
            (self.index + 1) % self.total
        } else {
            (self.index + self.total - 1) % self.total
        };
    }
}

struct Track {
    state: Mutex<SlideState>,
    track: Arc<dyn SlideTrack>,
}

impl Track {
    fn update(&self, f: impl FnOnce(&mut SlideState)) {
        let offset = {
            let mut state = self.state.lock().unwrap_or_else(|p| p.into_inner());
            f(&mut state);
            state.offset()
        };
        self.track.translate_x(offset);
    }

    fn index(&self) -> usize {
        self.state.lock().unwrap_or_else(|p| p.into_inner()).index
    }
}

/// Testimonial carousel. The slider owns its single auto-advance timer, so
/// hover pause/resume can never leave two timers running.
pub struct ReviewSlider {
    track: Arc<Track>,
    total: usize,
    period: Duration,
    autoplay: Option<JoinHandle<()>>,
}

impl ReviewSlider {
    /// Renders slide 0 immediately.
    pub fn new(total: usize, slide_width: f64, track: Arc<dyn SlideTrack>) -> Self {
        let track = Arc::new(Track {
            state: Mutex::new(SlideState {
                index: 0,
                total,
                slide_width,
            }),
            track,
        });
        track.update(|_| {});
        Self {
            track,
            total,
            period: AUTOPLAY_PERIOD,
            autoplay: None,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn index(&self) -> usize {
        self.track.index()
    }

    pub fn next(&self) {
        self.track.update(|s| s.step(true));
    }

    pub fn prev(&self) {
        self.track.update(|s| s.step(false));
    }

    /// Re-render the current slide with a new slide width.
    pub fn resize(&self, slide_width: f64) {
        self.track.update(|s| s.slide_width = slide_width);
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn start_autoplay(&mut self) {
        if self.autoplay.is_some() || self.total == 0 {
            return;
        }
        let track = Arc::clone(&self.track);
        let period = self.period;
        self.autoplay = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                track.update(|s| s.step(true));
            }
        }));
    }

    pub fn stop_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            handle.abort();
        }
    }

    pub fn pause_on_hover(&mut self) {
        self.stop_autoplay();
    }

    pub fn resume_after_hover(&mut self) {
        self.start_autoplay();
    }
}

impl Drop for ReviewSlider {
    fn drop(&mut self) {
        self.stop_autoplay();
    }
}
