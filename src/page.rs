use serde::{Deserialize, Serialize};

use crate::boundary::ClientPayload;
use crate::gate::{Eligibility, eligibility};
use crate::media::library::MediaLibrary;
use crate::options::config::BackgroundConfig;
use crate::resolve::raw::RawOptions;
use crate::resolve::resolver::ConfigResolver;

/// Options for [`prepare_page`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOpts {
    /// URL prefix for overlay pattern files, passed through to the client.
    pub overlay_path: String,
}

/// Resolved background for one page plus what is sent to the client.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedPage {
    pub config: BackgroundConfig,
    pub eligibility: Eligibility,
    pub payload: ClientPayload,
}

/// Raw options → media lookup → resolve → payload.
///
/// Never fails: a missing image or bad option only changes what gets rendered.
pub fn prepare_page(
    resolver: &ConfigResolver,
    media: &dyn MediaLibrary,
    raw: &RawOptions,
    opts: &PageOpts,
) -> PreparedPage {
    let image = raw.attachment_ref().and_then(|r| {
        let found = media.lookup(r);
        if found.is_none() {
            tracing::debug!(attachment_ref = r, "no image for attachment reference");
        }
        found
    });

    let config = resolver.resolve(raw, image.as_ref());
    let payload = ClientPayload::from_config(&config, &opts.overlay_path);
    PreparedPage {
        eligibility: eligibility(image.as_ref()),
        config,
        payload,
    }
}

#[cfg(test)]
#[path = "../tests/unit/page/prepare.rs"]
mod tests;
