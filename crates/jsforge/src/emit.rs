//! Writing generated scripts with tamper-evident manifests.
//!
//! Every generated script can be written alongside a
//! `<name>.manifest.json` recording a blake3 hash of its contents and how
//! it was produced. [`verify`] re-hashes the file, so a manual edit of
//! generated output is detected on the next load instead of silently
//! shipping.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a script was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// Tool that generated the script
    pub tool: String,
    /// Tool version
    pub version: String,
    /// Blake3 hash of the generation input
    pub source_hash: String,
    /// ISO 8601 generation timestamp
    pub generated_at: String,
    /// Command that regenerates the script
    pub regenerate_cmd: String,
}

impl GenerationMetadata {
    /// Metadata stamped with the current UTC time.
    #[must_use]
    pub fn now(
        tool: impl Into<String>,
        version: impl Into<String>,
        source_hash: impl Into<String>,
        regenerate_cmd: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            version: version.into(),
            source_hash: source_hash.into(),
            generated_at: Utc::now().to_rfc3339(),
            regenerate_cmd: regenerate_cmd.into(),
        }
    }
}

/// Manifest stored alongside a generated script as
/// `<filename>.manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptManifest {
    /// Manifest format version
    pub manifest_version: u32,
    /// File name of the generated script
    pub script_path: String,
    /// Blake3 hash of the script contents
    pub script_hash: String,
    /// Generation metadata
    pub generation: GenerationMetadata,
}

impl ScriptManifest {
    /// Current manifest format version.
    pub const VERSION: u32 = 1;

    /// Create a manifest for `script_path` with the given contents hash.
    #[must_use]
    pub fn new(
        script_path: impl Into<String>,
        script_hash: impl Into<String>,
        generation: GenerationMetadata,
    ) -> Self {
        Self {
            manifest_version: Self::VERSION,
            script_path: script_path.into(),
            script_hash: script_hash.into(),
            generation,
        }
    }

    /// The manifest path for a generated script.
    #[must_use]
    pub fn path_for(script: &Path) -> PathBuf {
        let mut file_name = script
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        file_name.push_str(".manifest.json");
        script.with_file_name(file_name)
    }

    /// Write this manifest as pretty JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a manifest back.
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Blake3 hash of script contents, hex-encoded.
#[must_use]
pub fn hash_script(contents: &str) -> String {
    blake3::hash(contents.as_bytes()).to_hex().to_string()
}

/// Write a generated script together with its manifest.
pub fn write_with_manifest(
    path: &Path,
    contents: &str,
    generation: GenerationMetadata,
) -> Result<()> {
    std::fs::write(path, contents)?;

    let manifest = ScriptManifest::new(
        path.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        hash_script(contents),
        generation,
    );
    manifest.write(&ScriptManifest::path_for(path))
}

/// Verify a generated script against its manifest.
///
/// Fails with [`Error::ManifestMissing`] when the manifest cannot be read
/// and [`Error::ScriptModified`] when the contents hash no longer matches.
pub fn verify(script: &Path) -> Result<()> {
    let manifest_path = ScriptManifest::path_for(script);
    let manifest = ScriptManifest::read(&manifest_path).map_err(|e| Error::ManifestMissing {
        path: script.display().to_string(),
        reason: e.to_string(),
    })?;

    let contents = std::fs::read_to_string(script)?;
    let actual = hash_script(&contents);
    if actual != manifest.script_hash {
        return Err(Error::ScriptModified {
            path: script.display().to_string(),
            expected: manifest.script_hash,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn metadata() -> GenerationMetadata {
        GenerationMetadata {
            tool: "jsforge".to_string(),
            version: "0.3.0".to_string(),
            source_hash: "feed1234".to_string(),
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            regenerate_cmd: "cargo run --bin gen".to_string(),
        }
    }

    #[test]
    fn manifest_path_suffix() {
        let path = ScriptManifest::path_for(Path::new("/out/boot.js"));
        assert_eq!(path.file_name().unwrap(), "boot.js.manifest.json");
    }

    #[test]
    fn hash_is_deterministic_and_content_sensitive() {
        assert_eq!(hash_script("let x = 1;"), hash_script("let x = 1;"));
        assert_ne!(hash_script("let x = 1;"), hash_script("let x = 2;"));
    }

    #[test]
    fn write_then_verify() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boot.js");
        write_with_manifest(&path, "boot();", metadata())?;
        verify(&path)
    }

    #[test]
    fn verify_detects_edit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boot.js");
        write_with_manifest(&path, "boot();", metadata()).unwrap();

        std::fs::write(&path, "boot();evil();").unwrap();

        match verify(&path).unwrap_err() {
            Error::ScriptModified { expected, actual, .. } => assert_ne!(expected, actual),
            e => panic!("expected ScriptModified, got {e:?}"),
        }
    }

    #[test]
    fn verify_without_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boot.js");
        std::fs::write(&path, "boot();").unwrap();

        match verify(&path).unwrap_err() {
            Error::ManifestMissing { .. } => {}
            e => panic!("expected ManifestMissing, got {e:?}"),
        }
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let manifest = ScriptManifest::new("boot.js", "abc", metadata());
        let json = serde_json::to_string(&manifest).unwrap();
        let parsed: ScriptManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest, parsed);
        assert_eq!(parsed.manifest_version, ScriptManifest::VERSION);
    }

    #[test]
    fn metadata_now_stamps_rfc3339() {
        let meta = GenerationMetadata::now("jsforge", "0.3.0", "h", "make gen");
        assert!(meta.generated_at.contains('T'));
    }
}
