use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    animation::transformer::AnimationTransformer,
    config::conversion::ConversionConfig,
    foundation::{
        core::TargetSize,
        error::{DmdError, DmdResult},
    },
    transform::{Transform, static_image::StaticImageTransformer},
};

/// Whether a source is a still image or an animation, decided by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Any non-GIF raster.
    Static,
    /// A `.gif` file.
    Animated,
}

impl SourceKind {
    /// `.gif` (any case) is animated, everything else static.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gif") => Self::Animated,
            _ => Self::Static,
        }
    }
}

/// One piece of artwork handed to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceItem {
    /// Where the source bytes live.
    pub path: PathBuf,
    /// Grouping directory in the output tree (e.g. a platform name).
    pub category: String,
    /// Output file stem.
    pub item_name: String,
    /// Derived from `path`.
    pub kind: SourceKind,
}

impl SourceItem {
    /// Build an item, deriving its kind from the extension of `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        category: impl Into<String>,
        item_name: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let kind = SourceKind::from_path(&path);
        Self {
            path,
            category: category.into(),
            item_name: item_name.into(),
            kind,
        }
    }

    /// `true` for `.gif` sources.
    pub fn is_animated(&self) -> bool {
        self.kind == SourceKind::Animated
    }
}

impl<'de> Deserialize<'de> for SourceItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr {
            path: PathBuf,
            category: String,
            item_name: String,
        }

        let r = Repr::deserialize(deserializer)?;
        Ok(Self::new(r.path, r.category, r.item_name))
    }
}

/// Which pipeline a job runs through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobKind {
    /// [`StaticImageTransformer`], PNG output.
    Static,
    /// [`AnimationTransformer`], GIF output.
    Animation,
}

static STATIC_TRANSFORMER: StaticImageTransformer = StaticImageTransformer;
static ANIMATION_TRANSFORMER: AnimationTransformer = AnimationTransformer;

impl JobKind {
    /// The transform implementation for this kind.
    pub fn transformer(self) -> &'static dyn Transform {
        match self {
            Self::Static => &STATIC_TRANSFORMER,
            Self::Animation => &ANIMATION_TRANSFORMER,
        }
    }
}

impl From<SourceKind> for JobKind {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Static => Self::Static,
            SourceKind::Animated => Self::Animation,
        }
    }
}

/// One source item at one target size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionJob<'a> {
    /// The item being converted.
    pub source: &'a SourceItem,
    /// The requested output size.
    pub size: TargetSize,
    /// Pipeline selection.
    pub kind: JobKind,
    /// `{output_root}/{W}x{H}/{category}/{item_name}.{ext}`.
    pub output_path: PathBuf,
}

impl<'a> ConversionJob<'a> {
    /// Build the job and derive its output path.
    ///
    /// Fails when the category or item name could escape its directory.
    pub fn new(
        source: &'a SourceItem,
        size: TargetSize,
        config: &ConversionConfig,
    ) -> DmdResult<Self> {
        validate_component("category", &source.category)?;
        validate_component("item name", &source.item_name)?;

        let kind = JobKind::from(source.kind);
        let output_path = output_path(&config.output_root, size, source, kind);
        Ok(Self {
            source,
            size,
            kind,
            output_path,
        })
    }
}

/// Pure function of root, size, category, item name and kind.
pub fn output_path(root: &Path, size: TargetSize, source: &SourceItem, kind: JobKind) -> PathBuf {
    root.join(size.dir_name())
        .join(&source.category)
        .join(format!(
            "{}.{}",
            source.item_name,
            kind.transformer().extension()
        ))
}

fn validate_component(what: &str, value: &str) -> DmdResult<()> {
    if value.trim().is_empty() {
        return Err(DmdError::validation(format!("{what} must not be empty")));
    }
    if value == "." || value == ".." {
        return Err(DmdError::validation(format!("{what} \"{value}\" is not a name")));
    }
    if let Some(c) = value.chars().find(|c| matches!(c, '/' | '\\' | ':' | '\0')) {
        return Err(DmdError::validation(format!(
            "{what} \"{value}\" contains invalid character {c:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/convert/job.rs"]
mod tests;
