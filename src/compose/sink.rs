use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    compose::pipeline::RenderedCard,
    foundation::error::{BirdcardError, BirdcardResult},
};

/// Receives finished cards. Parameters go in, image bytes come out here.
pub trait OutputSink {
    /// Hand over `card`; returns where it was written, if anywhere on disk.
    fn deliver(&mut self, card: &RenderedCard) -> BirdcardResult<Option<PathBuf>>;
}

/// Keeps the last delivered PNG in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySink {
    last: Option<(String, Vec<u8>)>,
}

impl InMemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// File name and PNG bytes of the last card.
    pub fn last(&self) -> Option<(&str, &[u8])> {
        self.last
            .as_ref()
            .map(|(name, bytes)| (name.as_str(), bytes.as_slice()))
    }
}

impl OutputSink for InMemorySink {
    fn deliver(&mut self, card: &RenderedCard) -> BirdcardResult<Option<PathBuf>> {
        self.last = Some((card.file_name.clone(), card.png.clone()));
        Ok(None)
    }
}

/// Writes `<dir>/<file_name>`.
#[derive(Clone, Debug)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Write cards into `dir`, created on first delivery.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl OutputSink for DirSink {
    fn deliver(&mut self, card: &RenderedCard) -> BirdcardResult<Option<PathBuf>> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        let path = self.dir.join(&card.file_name);
        std::fs::write(&path, &card.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(Some(path))
    }
}

/// Stages each card in a named temp file and reads it back before handing out the path.
///
/// The file lives until the next delivery or until the sink is dropped.
#[derive(Debug, Default)]
pub struct TempFileSink {
    staged: Option<tempfile::NamedTempFile>,
}

impl TempFileSink {
    /// A sink with nothing staged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the currently staged file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.staged.as_ref().map(|f| f.path())
    }
}

impl OutputSink for TempFileSink {
    fn deliver(&mut self, card: &RenderedCard) -> BirdcardResult<Option<PathBuf>> {
        let mut tmp = tempfile::Builder::new()
            .prefix("birdcard-")
            .suffix(".png")
            .tempfile()
            .context("create temp file for card")?;
        tmp.write_all(&card.png).context("write staged card")?;
        tmp.flush().context("flush staged card")?;

        let back = std::fs::read(tmp.path())
            .with_context(|| format!("read back '{}'", tmp.path().display()))?;
        if back != card.png {
            return Err(BirdcardError::image(format!(
                "staged card '{}' differs from rendered bytes",
                tmp.path().display()
            )));
        }

        let path = tmp.path().to_path_buf();
        self.staged = Some(tmp);
        Ok(Some(path))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/sink.rs"]
mod tests;
