//! The fetch collaborator seen from the session side.
use crate::error::LoadError;
use crate::model::quote::Quote;

/// Something that can hand over a batch of quotes.
///
/// Implementations perform the outbound read and classify failures into the three
/// `LoadError` kinds. An empty `Ok` vector is allowed here; the session rejects it.
pub trait QuoteSource {
    /// Retrieve the ordered batch of quotes.
    fn fetch(&self) -> Result<Vec<Quote>, LoadError>;
}

