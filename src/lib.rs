//! Full-viewport page backgrounds with optional scroll-coupled parallax.
//!
//! The crate splits into a server half and a client half that meet at [`ClientPayload`].
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: stored option values, which may be canonical tokens or display strings in
//!    any configured locale, are mapped back to canonical tokens ([`LocaleNormalizer`]).
//! 2. **Resolve**: `RawOptions + ImageMeta -> BackgroundConfig`. Unknown or disallowed values fall
//!    back to defaults; parallax is only kept for images of at least 1920x1200
//!    ([`ConfigResolver`], [`eligibility`]).
//! 3. **Transfer**: the config is flattened into a [`ClientPayload`] and rebuilt on the client.
//! 4. **Render**: [`RenderCoordinator`] drives a [`RenderHost`], coalescing scroll and resize
//!    signals into at most one [`compute_transform`] per animation frame.
//!
//! Resolution and geometry are pure functions of their inputs. Only startup configuration
//! (locale tables, option tables, payload decoding) can return a [`BackdropError`].
#![forbid(unsafe_code)]

mod boundary;
mod foundation;
mod gate;
mod geometry;
mod locale;
mod media;
mod options;
mod page;
mod render;
mod resolve;

pub use boundary::ClientPayload;
pub use foundation::core::{Affine, Size, Vec2};
pub use foundation::error::{BackdropError, BackdropResult};
pub use gate::{
    Eligibility, MIN_PARALLAX_HEIGHT, MIN_PARALLAX_WIDTH, eligibility, eligibility_for_size,
    is_parallax_eligible,
};
pub use geometry::engine::{compute_transform, scroll_ratio, static_style};
pub use geometry::state::{ScrollState, StaticStyle, TransformVector};
pub use locale::normalizer::{Canonical, LocaleNormalizer};
pub use locale::table::{LocaleTable, LocaleTableDef};
pub use media::fs::{FsMediaLibrary, normalize_rel_path};
pub use media::library::{InMemoryMediaLibrary, MediaLibrary};
pub use options::color::HexColor;
pub use options::config::{
    BackgroundConfig, ImageMeta, OverlayOptions, ParallaxOptions, StaticOptions,
};
pub use options::field::Field;
pub use options::tokens::{
    Attachment, Direction, HorizontalPosition, HorizontalScrollDirection, OverlayImage,
    OverlayOpacity, Repeat, ScrollDirection, Token, VerticalPosition, VerticalScrollDirection,
};
pub use page::{PageOpts, PreparedPage, prepare_page};
pub use render::coordinator::{
    CoordinatorOpts, CoordinatorState, CoordinatorStats, RenderCoordinator,
};
pub use render::host::{ImageLoadFailure, RenderHost, StaticBackground};
pub use render::scheduler::FrameScheduler;
pub use resolve::raw::{KEY_ATTACHMENT_ID, KEY_BACKGROUND_COLOR, KEY_PARALLAX_ENABLED, RawOptions};
pub use resolve::resolver::ConfigResolver;
pub use resolve::tables::{OptionTables, OptionTablesDef};
