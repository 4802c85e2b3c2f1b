mod label;
mod patterns;

pub use label::{EpisodeKind, ParsedEpisode, order_labels};
