pub mod apply;

pub use apply::filter_stories;
