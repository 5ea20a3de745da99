//! Tag recognition for short messages ("mews").
//!
//! [`tags`] finds cashtags (`$AAPL`), hashtags (`#news`), mentions (`@alice`), link tags
//! (`^report`, `^[annual report]`) and raw URLs, and splits a message into ordered segments
//! for rendering. [`core`] holds the configuration, input, and output plumbing used by the
//! `mewtags` binary.

pub mod core;
pub mod tags;
