//! Project catalog loading.
//!
//! The catalog is explicit configuration handed to the pipeline, not
//! module-level state. Files may be RON or JSON; with no file given, the
//! built-in default list is used.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use folio_core::ProjectRef;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    projects: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    name: String,
    url: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl From<CatalogEntry> for ProjectRef {
    fn from(entry: CatalogEntry) -> Self {
        ProjectRef {
            name: entry.name,
            url: entry.url,
            summary: entry.summary,
            category: entry.category,
        }
    }
}

pub(crate) fn load(path: Option<&Path>) -> Result<Vec<ProjectRef>> {
    let Some(path) = path else {
        return Ok(default_catalog());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let file: CatalogFile = match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => ron::from_str(&content)
            .with_context(|| format!("failed to parse RON catalog {}", path.display()))?,
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON catalog {}", path.display()))?,
        other => bail!("unsupported catalog format {other:?} (expected .ron or .json)"),
    };
    Ok(file.projects.into_iter().map(ProjectRef::from).collect())
}

fn entry(name: &str, url: &str, summary: &str) -> ProjectRef {
    ProjectRef {
        name: name.to_string(),
        url: url.to_string(),
        summary: Some(summary.to_string()),
        category: None,
    }
}

/// The stock catalog shown when no file is supplied.
pub(crate) fn default_catalog() -> Vec<ProjectRef> {
    vec![
        entry(
            "Marchitects Builders",
            "https://www.marchitects.builders/",
            "Local business site designed for trust and lead conversion.",
        ),
        entry(
            "Kiminou Knox",
            "https://kiminouknox.com/",
            "Personal site for writing, projects, and professional identity.",
        ),
        entry(
            "AAFC Builders",
            "https://www.aafcbuilders.org/",
            "Agency and program hub for community-forward digital builds.",
        ),
        entry(
            "Muisi",
            "https://muisi.vercel.app/",
            "Seasonal dancer website for Muisi Kongo Malonga.",
        ),
        entry(
            "Muisi Kongo Malonga",
            "https://www.muisikongo.com/",
            "Website for artist Muisi Kongo Malonga",
        ),
        entry(
            "Linea Collective",
            "https://www.lineaculture.com/",
            "Collective site built to communicate mission, work, and credibility.",
        ),
        entry(
            "Ricardo Scales Piano",
            "https://ricardoscalespiano.com/",
            "Booking-focused musician site with clean navigation.",
        ),
        entry(
            "SL Montgomery Law (Preview)",
            "https://slmontgomerylaw-upgrade.vercel.app/",
            "Modern law firm preview build with strong messaging.",
        ),
        entry(
            "DGRP Baysound",
            "https://www.dgrpbaysound.com/",
            "Music brand site with clear identity and contact path.",
        ),
        entry(
            "Social Following Studio",
            "https://social-following-studios.vercel.app/",
            "Updated studio site focused on social following growth services.",
        ),
        entry(
            "Wellness Escape Coach, Marti Shaw's website",
            "https://wellness-escape-webiste.vercel.app/",
            "Wellness coaching website with a calm, personal brand experience.",
        ),
    ]
}
