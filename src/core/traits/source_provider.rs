use crate::core::errors::Result;
use crate::core::models::alias_source::DiscoveredSource;

/// Port for discovering alias sources.
pub trait SourceProvider {
    /// All sources, in the order they must be loaded.
    ///
    /// A file that cannot be read is returned as an `UnreadableSource`
    /// in its place, so one bad file never hides the others. The outer
    /// error is reserved for failures of discovery itself.
    fn sources(&self) -> Result<Vec<DiscoveredSource>>;
}
