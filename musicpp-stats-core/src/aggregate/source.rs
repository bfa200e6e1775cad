use crate::flags::vocabulary::{
    AM_AVAIL, AM_USED, IMGUR_USED, LFM_AVAIL, LFM_USED, SP_AVAIL, SPOTIFY_USED,
};
use serde::{Deserialize, Serialize};

/// A data source whose usage and availability are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub name: String,

    /// Flag set on a line when the source was consulted.
    pub used_flag: String,

    /// Flag set when the source actually had a result. Sources without one
    /// only track usage.
    #[serde(default)]
    pub available_flag: Option<String>,
}

impl SourceSpec {
    pub fn new(name: &str, used_flag: &str, available_flag: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            used_flag: used_flag.to_string(),
            available_flag: available_flag.map(str::to_string),
        }
    }

    pub fn tracks_availability(&self) -> bool {
        self.available_flag.is_some()
    }
}

/// Apple Music, Last.fm, Spotify and Imgur, in display order.
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new("am", AM_USED, Some(AM_AVAIL)),
        SourceSpec::new("lfm", LFM_USED, Some(LFM_AVAIL)),
        SourceSpec::new("sp", SPOTIFY_USED, Some(SP_AVAIL)),
        SourceSpec::new("imgur", IMGUR_USED, None),
    ]
}
