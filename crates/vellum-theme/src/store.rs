//! Theme files on disk.
//!
//! A saved theme is two sibling files named after its id:
//! `<id>.json` holds the serialized [`ResumeTheme`] and `<id>.css` holds the
//! output of [`generate_stylesheet`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, ThemeError};
use crate::theme::{generate_stylesheet, ResumeTheme};

fn check_id(id: &str) -> Result<()> {
    let bad = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\'])
        || id.chars().any(char::is_control);
    if bad {
        return Err(ThemeError::InvalidThemeId(id.to_string()));
    }
    Ok(())
}

/// Writes `<id>.json` and `<id>.css` into `dir`, creating it if needed.
///
/// Returns the JSON and CSS paths, in that order.
///
/// # Errors
///
/// [`ThemeError::InvalidThemeId`] if the id is not a plain file name, or an
/// I/O error.
pub fn save_theme<P: AsRef<Path>>(dir: P, theme: &ResumeTheme) -> Result<(PathBuf, PathBuf)> {
    check_id(&theme.id)?;
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let json_path = dir.join(format!("{}.json", theme.id));
    let css_path = dir.join(format!("{}.css", theme.id));
    fs::write(&json_path, serde_json::to_string_pretty(theme)?)?;
    fs::write(&css_path, generate_stylesheet(theme))?;

    info!(id = %theme.id, dir = %dir.display(), "saved theme");
    Ok((json_path, css_path))
}

/// Reads a theme back from a `<id>.json` file.
pub fn load_theme<P: AsRef<Path>>(path: P) -> Result<ResumeTheme> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let theme: ResumeTheme = serde_json::from_str(&content)?;
    info!(id = %theme.id, path = %path.display(), "loaded theme");
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::create_from_template;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let theme = create_from_template("creative-bold", None).unwrap();

        let (json_path, css_path) = save_theme(dir.path(), &theme).unwrap();
        assert_eq!(json_path, dir.path().join("creative-bold.json"));
        assert_eq!(css_path, dir.path().join("creative-bold.css"));

        assert_eq!(load_theme(&json_path).unwrap(), theme);

        let css = fs::read_to_string(&css_path).unwrap();
        assert_eq!(css, generate_stylesheet(&theme));
        assert!(css.contains("[data-theme=\"dark\"] {"));
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("themes").join("custom");
        let theme = create_from_template("minimal-clean", None).unwrap();
        save_theme(&nested, &theme).unwrap();
        assert!(nested.join("minimal-clean.json").is_file());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let dir = TempDir::new().unwrap();
        let theme = create_from_template("modern-professional", None).unwrap();
        let (json_path, _) = save_theme(dir.path(), &theme).unwrap();
        let json = fs::read_to_string(json_path).unwrap();
        assert!(json.contains("\"borderRadius\""));
        assert!(json.contains("\"lineHeight\""));
        assert!(json.contains("\"industry\": \"technology\""));
    }

    #[test]
    fn test_rejects_path_like_ids() {
        let dir = TempDir::new().unwrap();
        let mut theme = create_from_template("modern-professional", None).unwrap();
        for id in ["", "..", "../escape", "a/b", "a\\b"] {
            theme.id = id.to_string();
            let err = save_theme(dir.path(), &theme).unwrap_err();
            assert!(matches!(err, ThemeError::InvalidThemeId(_)), "{:?}", id);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_theme(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"id\": 3").unwrap();
        let err = load_theme(&path).unwrap_err();
        assert!(matches!(err, ThemeError::Serialization(_)));
    }
}
