use crate::gate::is_parallax_eligible;
use crate::locale::normalizer::{Canonical, LocaleNormalizer};
use crate::options::color::HexColor;
use crate::options::config::{
    BackgroundConfig, ImageMeta, OverlayOptions, ParallaxOptions, StaticOptions,
};
use crate::options::field::Field;
use crate::options::tokens::Token;
use crate::resolve::raw::{KEY_BACKGROUND_COLOR, KEY_PARALLAX_ENABLED, RawOptions, is_truthy};
use crate::resolve::tables::OptionTables;

/// Turns raw stored options into a [`BackgroundConfig`].
///
/// This is the only place that decides whether a value is set or falls back to its default.
/// Resolution is total: nothing a page stores can make it fail.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    normalizer: LocaleNormalizer,
    tables: OptionTables,
}

impl ConfigResolver {
    pub fn new(normalizer: LocaleNormalizer, tables: OptionTables) -> Self {
        Self { normalizer, tables }
    }

    pub fn normalizer(&self) -> &LocaleNormalizer {
        &self.normalizer
    }

    pub fn tables(&self) -> &OptionTables {
        &self.tables
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn resolve(&self, raw: &RawOptions, image: Option<&ImageMeta>) -> BackgroundConfig {
        let background_color = raw.get(KEY_BACKGROUND_COLOR).and_then(HexColor::sanitize);

        let static_options = StaticOptions {
            repeat: self.token(raw, Field::BackgroundRepeat),
            position_x: self.token(raw, Field::PositionX),
            position_y: self.token(raw, Field::PositionY),
            attachment: self.token(raw, Field::BackgroundAttachment),
        };

        let requested = is_truthy(raw.get(KEY_PARALLAX_ENABLED));
        let eligible = is_parallax_eligible(image);
        if requested && !eligible {
            tracing::debug!("parallax requested but image is not eligible; using static mode");
        }

        let parallax = ParallaxOptions {
            enabled: requested && eligible,
            direction: self.token(raw, Field::Direction),
            vertical_scroll_direction: self.token(raw, Field::VerticalScrollDirection),
            horizontal_scroll_direction: self.token(raw, Field::HorizontalScrollDirection),
            horizontal_alignment: self.token(raw, Field::HorizontalAlignment),
            vertical_alignment: self.token(raw, Field::VerticalAlignment),
        };

        let overlay = OverlayOptions {
            image: self.token(raw, Field::OverlayImage),
            opacity: self.token(raw, Field::OverlayOpacity),
        };

        BackgroundConfig::new(
            background_color,
            image.cloned(),
            static_options,
            parallax,
            overlay,
        )
    }

    /// Resolve one enumerated field: normalize, whitelist, fall back to the default.
    fn token<T: Token>(&self, raw: &RawOptions, field: Field) -> T {
        let fallback = self.default_value::<T>(field);
        let Some(value) = raw.get(field.key()) else {
            return fallback;
        };

        match self.normalizer.to_canonical(value, field) {
            Canonical::Recognized(token) if self.tables.is_allowed(field, token) => {
                T::from_canonical(token).unwrap_or(fallback)
            }
            Canonical::Recognized(token) => {
                tracing::debug!(%field, token, "value not in whitelist; using default");
                fallback
            }
            Canonical::Unrecognized => {
                tracing::debug!(%field, value, "unrecognized value; using default");
                fallback
            }
        }
    }

    fn default_value<T: Token>(&self, field: Field) -> T {
        T::from_canonical(self.tables.default_token(field)).unwrap_or(T::ALL[0])
    }
}

impl Default for ConfigResolver {
    /// Canonical-token-only normalizer with built-in tables.
    fn default() -> Self {
        Self::new(
            LocaleNormalizer::canonical_only("en"),
            OptionTables::builtin(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/resolver.rs"]
mod tests;
