//! Font resolution and loading.
//!
//! The rasterizer needs exactly three faces per render: a monospace face for
//! structural glyphs, a content face for plain text, and a bold face for
//! emphasized text. Each can be named explicitly (a file path or a family
//! name searched for in the platform font directories) or left unset, in
//! which case a per-role list of common system fonts is tried in order.
//!
//! Only `.ttf` files are considered during the directory search.

use std::env;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, PxScaleFont};
use walkdir::WalkDir;

use crate::error::RasterError;

/// Recognized font file extensions during directory search.
const FONT_EXTENSIONS: &[&str] = &[".ttf", ".TTF"];

/// How many directory levels below a font directory the search descends.
const SEARCH_DEPTH: usize = 2;

/// The role a face plays in a render, used to pick default candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    /// Monospace face for border glyphs; also the metrics source for layout.
    Structural,
    /// Face for unemphasized cell content.
    Plain,
    /// Face for emphasized cell content.
    Emphasized,
}

impl FontRole {
    /// System font names to try, in order of preference, when no explicit
    /// name or path was given for this role.
    fn default_candidates(self) -> &'static [&'static str] {
        match self {
            FontRole::Plain => &[
                "DejaVu Sans",
                "Arial",
                "Helvetica",
                "Liberation Sans",
                "FreeSans",
                "Noto Sans",
                "Source Code Pro",
            ],
            FontRole::Emphasized => &[
                "DejaVu Sans Bold",
                "Arial Bold",
                "Helvetica Bold",
                "Liberation Sans Bold",
                "FreeSans Bold",
                "Noto Sans Bold",
                "Source Code Pro Bold",
            ],
            FontRole::Structural => &[
                "DejaVu Sans Mono",
                "Courier New",
                "Liberation Mono",
                "FreeMono",
                "Noto Sans Mono",
                "Consolas",
                "Source Code Pro",
            ],
        }
    }
}

/// A loaded, scaled font face.
#[derive(Debug)]
pub struct FontFace {
    font: FontVec,
    scale: PxScale,
    path: PathBuf,
}

impl FontFace {
    /// Loads and parses a font file at the given pixel size.
    pub fn load(path: &Path, size: f32) -> Result<Self, RasterError> {
        let data = std::fs::read(path)?;
        let font = FontVec::try_from_vec(data).map_err(|e| RasterError::FontResolution {
            name: path.display().to_string(),
            size,
            reason: format!("invalid font data: {e}"),
        })?;
        Ok(FontFace {
            font,
            scale: PxScale::from(size),
            path: path.to_path_buf(),
        })
    }

    /// The parsed font.
    pub fn font(&self) -> &FontVec {
        &self.font
    }

    /// The pixel scale this face renders at.
    pub fn scale(&self) -> PxScale {
        self.scale
    }

    /// The font with its scale applied, for metrics queries.
    pub fn scaled(&self) -> PxScaleFont<&FontVec> {
        self.font.as_scaled(self.scale)
    }

    /// The file the face was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The three faces one image render draws with.
pub struct FontSet {
    pub structural: FontFace,
    pub plain: FontFace,
    pub emphasized: FontFace,
}

/// Per-role font selection, as it arrives from configuration.
///
/// `name` may be a file path or a system font family name; `None` (or an
/// empty string) selects the role's default candidates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontSelection {
    pub structural: FontRequest,
    pub plain: FontRequest,
    pub emphasized: FontRequest,
}

/// One requested face: an optional name/path and a pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct FontRequest {
    pub name: Option<String>,
    pub size: f32,
}

impl Default for FontRequest {
    fn default() -> Self {
        FontRequest {
            name: None,
            size: 16.0,
        }
    }
}

/// Resolves font names and paths to loadable files.
///
/// Resolution order: an existing file path wins outright; otherwise the
/// platform font directories are searched for a `.ttf` file whose stem
/// matches the name under several naming conventions (spaces kept, removed,
/// dashed, underscored, lowercased), first flat, then recursively two levels
/// deep.
pub struct FontProvider {
    directories: Vec<PathBuf>,
}

impl Default for FontProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FontProvider {
    /// Creates a provider searching the platform font directories.
    pub fn new() -> Self {
        FontProvider {
            directories: font_directories(),
        }
    }

    /// Creates a provider searching only the given directories. Used by
    /// tests and by callers bundling their own fonts.
    pub fn with_directories(directories: Vec<PathBuf>) -> Self {
        FontProvider { directories }
    }

    /// Resolves a name or path to a font file and loads it.
    pub fn resolve(&self, name_or_path: &str, size: f32) -> Result<FontFace, RasterError> {
        let path = self.resolve_path(name_or_path, size)?;
        FontFace::load(&path, size)
    }

    /// Resolves one role: the explicit request if named, else the role's
    /// default candidates in order.
    pub fn resolve_role(&self, role: FontRole, request: &FontRequest) -> Result<FontFace, RasterError> {
        match request.name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => self.resolve(name, request.size),
            None => {
                for candidate in role.default_candidates() {
                    if let Ok(path) = self.resolve_path(candidate, request.size) {
                        return FontFace::load(&path, request.size);
                    }
                }
                Err(RasterError::FontResolution {
                    name: role.default_candidates().join(", "),
                    size: request.size,
                    reason: "no matching system font found; specify a font path or place \
                             .ttf files in ./fonts"
                        .to_string(),
                })
            }
        }
    }

    /// Resolves all three faces of a selection.
    pub fn resolve_set(&self, selection: &FontSelection) -> Result<FontSet, RasterError> {
        Ok(FontSet {
            structural: self.resolve_role(FontRole::Structural, &selection.structural)?,
            plain: self.resolve_role(FontRole::Plain, &selection.plain)?,
            emphasized: self.resolve_role(FontRole::Emphasized, &selection.emphasized)?,
        })
    }

    /// Resolves a name or path to an existing font file, without loading it.
    pub fn resolve_path(&self, name_or_path: &str, size: f32) -> Result<PathBuf, RasterError> {
        let direct = Path::new(name_or_path);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }

        let variations = name_variations(name_or_path);

        for dir in &self.directories {
            if !dir.is_dir() {
                continue;
            }

            // Flat lookup first: dir/<variation>.ttf
            for name in &variations {
                for ext in FONT_EXTENSIONS {
                    let candidate = dir.join(format!("{name}{ext}"));
                    if candidate.is_file() {
                        return Ok(candidate);
                    }
                }
            }

            // Then a bounded recursive walk.
            if let Some(found) = search_subdirectories(dir, &variations) {
                return Ok(found);
            }
        }

        Err(RasterError::FontResolution {
            name: name_or_path.to_string(),
            size,
            reason: format!("no .ttf file found (tried {})", variations.join(", ")),
        })
    }
}

/// Naming conventions a font family name is tried under.
fn name_variations(name: &str) -> Vec<String> {
    let mut variations = vec![
        name.to_string(),
        name.replace(' ', ""),
        name.replace(' ', "-"),
        name.replace(' ', "_"),
        name.to_lowercase().replace(' ', ""),
        name.to_lowercase().replace(' ', "-"),
    ];

    // Source Code Pro files ship under weight-suffixed names.
    let lower = name.to_lowercase();
    if lower.contains("source code pro") {
        if lower.contains("bold") {
            variations.push("SourceCodePro-Bold".to_string());
            variations.push("SourceCodePro-Semibold".to_string());
        } else {
            variations.push("SourceCodePro-Regular".to_string());
        }
    }

    variations.dedup();
    variations
}

/// Searches a directory tree (bounded depth) for a `.ttf` file whose stem
/// matches one of the variations, case-insensitively.
fn search_subdirectories(base: &Path, variations: &[String]) -> Option<PathBuf> {
    for entry in WalkDir::new(base)
        .min_depth(1)
        .max_depth(SEARCH_DEPTH + 1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        let Some(stem) = FONT_EXTENSIONS
            .iter()
            .find_map(|ext| file_name.strip_suffix(ext))
        else {
            continue;
        };
        if variations.iter().any(|v| v.eq_ignore_ascii_case(stem)) {
            return Some(entry.path().to_path_buf());
        }
    }
    None
}

/// Platform-specific font directories, most local first.
fn font_directories() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("./fonts"), PathBuf::from(".")];

    if cfg!(target_os = "windows") {
        if let Some(windir) = env::var_os("WINDIR") {
            dirs.push(PathBuf::from(windir).join("Fonts"));
        }
        if let Some(local) = env::var_os("LOCALAPPDATA") {
            dirs.push(PathBuf::from(local).join("Microsoft/Windows/Fonts"));
        }
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
        if let Some(home) = env::var_os("HOME") {
            dirs.push(PathBuf::from(home).join("Library/Fonts"));
        }
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = env::var_os("HOME") {
            let home = PathBuf::from(home);
            dirs.push(home.join(".fonts"));
            dirs.push(home.join(".local/share/fonts"));
        }
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn name_variations_cover_common_conventions() {
        let variations = name_variations("DejaVu Sans");
        assert!(variations.contains(&"DejaVu Sans".to_string()));
        assert!(variations.contains(&"DejaVuSans".to_string()));
        assert!(variations.contains(&"DejaVu-Sans".to_string()));
        assert!(variations.contains(&"DejaVu_Sans".to_string()));
        assert!(variations.contains(&"dejavusans".to_string()));
        assert!(variations.contains(&"dejavu-sans".to_string()));
    }

    #[test]
    fn name_variations_source_code_pro() {
        let regular = name_variations("Source Code Pro");
        assert!(regular.contains(&"SourceCodePro-Regular".to_string()));

        let bold = name_variations("Source Code Pro Bold");
        assert!(bold.contains(&"SourceCodePro-Bold".to_string()));
        assert!(bold.contains(&"SourceCodePro-Semibold".to_string()));
    }

    #[test]
    fn resolve_path_prefers_existing_file_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("custom.ttf");
        fs::write(&file, b"stub").unwrap();

        let provider = FontProvider::with_directories(vec![]);
        let resolved = provider
            .resolve_path(file.to_str().unwrap(), 16.0)
            .unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn resolve_path_finds_flat_file_by_variation() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CoolFont.ttf"), b"stub").unwrap();

        let provider = FontProvider::with_directories(vec![dir.path().to_path_buf()]);
        let resolved = provider.resolve_path("Cool Font", 16.0).unwrap();
        assert_eq!(resolved, dir.path().join("CoolFont.ttf"));
    }

    #[test]
    fn resolve_path_searches_subdirectories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("truetype/cool");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("coolfont.ttf"), b"stub").unwrap();

        let provider = FontProvider::with_directories(vec![dir.path().to_path_buf()]);
        let resolved = provider.resolve_path("Cool Font", 16.0).unwrap();
        assert_eq!(resolved, nested.join("coolfont.ttf"));
    }

    #[test]
    fn resolve_path_ignores_non_ttf_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CoolFont.otf"), b"stub").unwrap();

        let provider = FontProvider::with_directories(vec![dir.path().to_path_buf()]);
        assert!(provider.resolve_path("Cool Font", 16.0).is_err());
    }

    #[test]
    fn resolve_path_unknown_name_reports_variations() {
        let provider = FontProvider::with_directories(vec![]);
        let err = provider.resolve_path("No Such Font", 12.0).unwrap_err();
        match err {
            RasterError::FontResolution { name, size, reason } => {
                assert_eq!(name, "No Such Font");
                assert_eq!(size, 12.0);
                assert!(reason.contains("NoSuchFont"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn loading_invalid_font_data_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bad.ttf");
        fs::write(&file, b"not a font").unwrap();

        let err = FontFace::load(&file, 16.0).unwrap_err();
        assert!(matches!(err, RasterError::FontResolution { .. }));
    }

    #[test]
    fn default_request_has_usable_size() {
        let request = FontRequest::default();
        assert!(request.name.is_none());
        assert_eq!(request.size, 16.0);
    }
}
