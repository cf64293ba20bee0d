//! Static species catalog.

pub mod species;
