use std::path::{Path, PathBuf};

use ab_glyph::FontArc;

use crate::{
    foundation::error::{BirdcardError, BirdcardResult},
    text::script::ScriptClass,
};

/// Built-in fallback face (DejaVu Sans), used when a selected font cannot be loaded.
pub const BUILTIN_FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// Where a loaded face came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// Read from a font file.
    File(PathBuf),
    /// The embedded fallback face.
    Builtin,
}

/// The two faces used by the mixed-script renderer.
#[derive(Clone, Debug)]
pub struct FontPair {
    primary: FontArc,
    secondary: FontArc,
    primary_origin: FontOrigin,
    secondary_origin: FontOrigin,
}

impl FontPair {
    /// Both classes drawn with the built-in face.
    pub fn builtin() -> BirdcardResult<Self> {
        let face = FontArc::try_from_slice(BUILTIN_FONT_BYTES)
            .map_err(|e| BirdcardError::font(format!("built-in font: {e}")))?;
        Ok(Self {
            primary: face.clone(),
            secondary: face,
            primary_origin: FontOrigin::Builtin,
            secondary_origin: FontOrigin::Builtin,
        })
    }

    /// Parse both faces from memory; fails if either is not a usable font.
    pub fn from_bytes(primary: Vec<u8>, secondary: Vec<u8>) -> BirdcardResult<Self> {
        let primary = FontArc::try_from_vec(primary)
            .map_err(|e| BirdcardError::font(format!("primary font: {e}")))?;
        let secondary = FontArc::try_from_vec(secondary)
            .map_err(|e| BirdcardError::font(format!("secondary font: {e}")))?;
        Ok(Self {
            primary,
            secondary,
            primary_origin: FontOrigin::Builtin,
            secondary_origin: FontOrigin::Builtin,
        })
    }

    /// Load both faces from files, falling back to [`FontPair::builtin`] for both classes if
    /// either one fails.
    pub fn load_or_builtin(primary: &Path, secondary: &Path) -> BirdcardResult<Self> {
        match Self::load_files(primary, secondary) {
            Ok(pair) => Ok(pair),
            Err(err) => {
                tracing::debug!(error = %err, "font load failed; using built-in font");
                Self::builtin()
            }
        }
    }

    fn load_files(primary: &Path, secondary: &Path) -> BirdcardResult<Self> {
        let read = |p: &Path| {
            std::fs::read(p)
                .map_err(|e| BirdcardError::font(format!("read font '{}': {e}", p.display())))
        };
        let mut pair = Self::from_bytes(read(primary)?, read(secondary)?)?;
        pair.primary_origin = FontOrigin::File(primary.to_path_buf());
        pair.secondary_origin = FontOrigin::File(secondary.to_path_buf());
        Ok(pair)
    }

    /// Face for a script class.
    pub fn for_class(&self, class: ScriptClass) -> &FontArc {
        match class {
            ScriptClass::Wide => &self.primary,
            ScriptClass::Other => &self.secondary,
        }
    }

    /// Origin of the face used for a script class.
    pub fn origin(&self, class: ScriptClass) -> &FontOrigin {
        match class {
            ScriptClass::Wide => &self.primary_origin,
            ScriptClass::Other => &self.secondary_origin,
        }
    }

    /// Whether the built-in fallback is in use.
    pub fn is_builtin(&self) -> bool {
        self.primary_origin == FontOrigin::Builtin && self.secondary_origin == FontOrigin::Builtin
    }
}

/// A directory of font files the user picks from by file name.
#[derive(Clone, Debug)]
pub struct FontLibrary {
    dir: PathBuf,
    files: Vec<String>,
}

impl FontLibrary {
    /// Scan `dir` for font files. A missing or unreadable directory is an error.
    #[tracing::instrument(skip_all)]
    pub fn open(dir: impl Into<PathBuf>) -> BirdcardResult<Self> {
        let dir = dir.into();
        let entries = std::fs::read_dir(&dir).map_err(|e| {
            BirdcardError::font(format!("read font directory '{}': {e}", dir.display()))
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                BirdcardError::font(format!("read font directory '{}': {e}", dir.display()))
            })?;
            let path = entry.path();
            if !path.is_file() || !is_font_file(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_owned());
            }
        }
        files.sort();
        tracing::debug!(dir = %dir.display(), fonts = files.len(), "font directory scanned");
        Ok(Self { dir, files })
    }

    /// Directory being served.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Font file names, sorted.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Resolve a bare file name inside the library directory.
    pub fn path_for(&self, name: &str) -> BirdcardResult<PathBuf> {
        let p = Path::new(name);
        let bare = p.components().count() == 1 && p.file_name().is_some_and(|n| n == name);
        if name.is_empty() || !bare {
            return Err(BirdcardError::validation(format!(
                "font name must be a bare file name, got '{name}'"
            )));
        }
        Ok(self.dir.join(p))
    }

    /// Load the primary (wide-script) and secondary faces by file name.
    ///
    /// Unloadable selections degrade to the built-in face; only invalid names are errors.
    #[tracing::instrument(skip(self))]
    pub fn load_pair(&self, primary: &str, secondary: &str) -> BirdcardResult<FontPair> {
        let primary = self.path_for(primary)?;
        let secondary = self.path_for(secondary)?;
        FontPair::load_or_builtin(&primary, &secondary)
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
