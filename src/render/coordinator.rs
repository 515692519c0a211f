use crate::geometry::engine::{compute_transform, static_style};
use crate::geometry::state::{ScrollState, TransformVector};
use crate::options::config::BackgroundConfig;
use crate::render::host::{ImageLoadFailure, RenderHost, StaticBackground};
use crate::render::scheduler::FrameScheduler;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorOpts {
    /// URL prefix that overlay pattern file names are appended to.
    pub overlay_path: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatorState {
    Uninitialized,
    StaticBackground,
    ParallaxActive,
    Unmounted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorStats {
    pub computes: u64,
    pub applies: u64,
    pub frames_requested: u64,
}

/// Drives one page background from mount to unmount.
///
/// Scroll and resize signals only record the latest metrics; the transform is computed and
/// applied at most once per animation frame.
pub struct RenderCoordinator<H: RenderHost> {
    host: H,
    config: BackgroundConfig,
    opts: CoordinatorOpts,
    state: CoordinatorState,
    selector: Option<String>,
    scroll: ScrollState,
    scheduler: FrameScheduler,
    awaiting_image: bool,
    subscribed: bool,
    last_transform: Option<TransformVector>,
    stats: CoordinatorStats,
}

impl<H: RenderHost> RenderCoordinator<H> {
    pub fn new(host: H, config: BackgroundConfig, opts: CoordinatorOpts) -> Self {
        Self {
            host,
            config,
            opts,
            state: CoordinatorState::Uninitialized,
            selector: None,
            scroll: ScrollState::default(),
            scheduler: FrameScheduler::new(),
            awaiting_image: false,
            subscribed: false,
            last_transform: None,
            stats: CoordinatorStats::default(),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn mount(&mut self, selector: &str) {
        if self.state != CoordinatorState::Uninitialized || self.selector.is_some() {
            tracing::warn!(state = ?self.state, "mount ignored, background already mounted");
            return;
        }
        self.selector = Some(selector.to_owned());
        self.scroll = self.host.measure();

        match self.config.image().filter(|_| self.config.is_parallax()) {
            Some(image) => {
                tracing::debug!(src = %image.url, "loading parallax image");
                self.awaiting_image = true;
                self.host.load_image(&image.url);
            }
            None => self.enter_static(selector.to_owned()),
        }
    }

    pub fn on_image_loaded(&mut self, result: Result<(), ImageLoadFailure>) {
        if !self.awaiting_image || self.state != CoordinatorState::Uninitialized {
            tracing::debug!(state = ?self.state, "stale image load notification");
            return;
        }
        self.awaiting_image = false;
        let Some(selector) = self.selector.clone() else {
            return;
        };

        if let Err(err) = result {
            tracing::warn!(error = %err, "parallax image unavailable, using static background");
            self.enter_static(selector);
            return;
        }
        let Some(image) = self.config.image() else {
            self.enter_static(selector);
            return;
        };

        self.host.create_image_container(&selector, image);
        if let Some(file) = self.config.overlay().image.file_name() {
            let url = overlay_url(&self.opts.overlay_path, &file);
            let opacity = self.config.overlay().opacity.value();
            self.host.create_overlay(&selector, &url, opacity);
        }
        self.host.subscribe();
        self.subscribed = true;
        self.state = CoordinatorState::ParallaxActive;
        tracing::info!(selector = %selector, "parallax background active");

        self.scroll = self.host.measure();
        self.apply_frame();
    }

    pub fn on_scroll(&mut self, scroll_top: f64, scroll_left: f64) {
        self.scroll.scroll_top = scroll_top;
        self.scroll.scroll_left = scroll_left;
        self.schedule();
    }

    pub fn on_resize(
        &mut self,
        viewport_width: f64,
        viewport_height: f64,
        document_width: f64,
        document_height: f64,
    ) {
        self.scroll.viewport_width = viewport_width;
        self.scroll.viewport_height = viewport_height;
        self.scroll.document_width = document_width;
        self.scroll.document_height = document_height;
        self.schedule();
    }

    pub fn on_animation_frame(&mut self) {
        let dirty = self.scheduler.begin_frame();
        if dirty && self.state == CoordinatorState::ParallaxActive {
            self.apply_frame();
        }
    }

    pub fn unmount(&mut self) {
        if self.state == CoordinatorState::Unmounted {
            return;
        }
        if self.subscribed {
            self.host.unsubscribe();
            self.subscribed = false;
        }
        self.scheduler.reset();
        self.awaiting_image = false;
        tracing::info!(from = ?self.state, "background unmounted");
        self.state = CoordinatorState::Unmounted;
    }

    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    pub fn stats(&self) -> CoordinatorStats {
        self.stats
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    /// Transform most recently handed to the host.
    pub fn last_transform(&self) -> Option<&TransformVector> {
        self.last_transform.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn schedule(&mut self) {
        if self.state != CoordinatorState::ParallaxActive {
            return;
        }
        if self.scheduler.mark_dirty() {
            self.stats.frames_requested += 1;
            self.host.request_animation_frame();
        }
    }

    fn apply_frame(&mut self) {
        let transform = compute_transform(&self.config, self.config.image_size(), &self.scroll);
        self.stats.computes += 1;
        self.host.apply_transform(&transform);
        self.stats.applies += 1;
        self.last_transform = Some(transform);
    }

    fn enter_static(&mut self, selector: String) {
        let transform = compute_transform(
            &static_only(&self.config),
            self.config.image_size(),
            &self.scroll,
        );
        self.stats.computes += 1;
        let background = StaticBackground {
            color: self.config.background_color(),
            image: self.config.image(),
            style: static_style(&self.config),
            transform,
        };
        self.host.apply_static_background(&selector, &background);
        self.stats.applies += 1;
        self.last_transform = Some(transform);
        self.state = CoordinatorState::StaticBackground;
        tracing::info!(selector = %selector, "static background applied");
    }
}

/// The same config with the parallax loop switched off, for load-failure fallback.
fn static_only(config: &BackgroundConfig) -> BackgroundConfig {
    let mut parallax = *config.parallax();
    parallax.enabled = false;
    BackgroundConfig::new(
        config.background_color().cloned(),
        config.image().cloned(),
        *config.static_options(),
        parallax,
        *config.overlay(),
    )
}

fn overlay_url(prefix: &str, file: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        format!("{prefix}{file}")
    } else {
        format!("{prefix}/{file}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/coordinator.rs"]
mod tests;
