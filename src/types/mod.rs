mod media;
mod source;

pub use media::{SearchResult, SubOrDub};
pub use source::{Episode, EpisodeServer, VideoSource, VideoSourceType};
