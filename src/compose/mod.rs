//! The compositor and everything around it: parameters, placement, output.

/// Render parameters and per-card request.
pub mod params;
/// Compositing pipeline.
pub mod pipeline;
/// Layer placement arithmetic.
pub mod placement;
/// Output collaborators.
pub mod sink;
