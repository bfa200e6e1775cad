//! Flag tokens written by the application. Tokens outside this list may
//! appear in newer logs and are ignored.

pub const AM_USED: &str = "am_used";
pub const AM_AVAIL: &str = "am_avail";
pub const LFM_USED: &str = "lfm_used";
pub const LFM_AVAIL: &str = "lfm_avail";
pub const SPOTIFY_USED: &str = "spotify_used";
pub const SP_AVAIL: &str = "sp_avail";
pub const IMGUR_USED: &str = "imgur_used";

pub const DB_HIT_IMAGE: &str = "db_hit_image";
pub const IMG_EXPIRED: &str = "img_expired";
pub const CACHE_WRITTEN: &str = "cache_written";

/// Field content written when a lookup set no flags at all.
pub const NONE_SENTINEL: &str = "NONE";
