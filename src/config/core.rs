use crate::splice::SpliceMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for codemend.
///
/// Every section is optional; an absent section means the hard-coded paths
/// the scripts were written for.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CodemendConfig {
    #[serde(default)]
    pub params_promise: ParamsPromiseConfig,

    #[serde(default)]
    pub stats_mock: StatsMockConfig,

    #[serde(default)]
    pub locales: LocalesConfig,

    #[serde(default)]
    pub scenes: ScenesConfig,

    #[serde(default)]
    pub splice: SpliceConfig,
}

/// Route handler migration to awaited `params`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParamsPromiseConfig {
    #[serde(default = "default_params_root")]
    pub root: PathBuf,

    #[serde(default = "default_handler_file_names")]
    pub file_names: Vec<String>,

    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
}

impl Default for ParamsPromiseConfig {
    fn default() -> Self {
        Self {
            root: default_params_root(),
            file_names: default_handler_file_names(),
            excluded_dirs: default_excluded_dirs(),
        }
    }
}

fn default_params_root() -> PathBuf {
    PathBuf::from("app")
}

fn default_handler_file_names() -> Vec<String> {
    ["route.ts", "route.tsx", "page.tsx", "layout.tsx"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_excluded_dirs() -> Vec<String> {
    ["node_modules", ".next", ".git"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Test files whose `getUserStats` mocks get backfilled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsMockConfig {
    #[serde(default = "default_stats_files")]
    pub files: Vec<PathBuf>,

    #[serde(default = "default_stats_method")]
    pub method: String,
}

impl Default for StatsMockConfig {
    fn default() -> Self {
        Self {
            files: default_stats_files(),
            method: default_stats_method(),
        }
    }
}

fn default_stats_files() -> Vec<PathBuf> {
    vec![PathBuf::from(
        "__tests__/lib/services/reputation.service.test.ts",
    )]
}

fn default_stats_method() -> String {
    "getUserStats".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalesConfig {
    #[serde(default = "default_locale_merges")]
    pub merges: Vec<LocaleMerge>,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            merges: default_locale_merges(),
        }
    }
}

/// Merge `source` into `target`, optionally below a dotted `namespace`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleMerge {
    pub target: PathBuf,
    pub source: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

fn default_locale_merges() -> Vec<LocaleMerge> {
    ["en", "es"]
        .iter()
        .map(|locale| LocaleMerge {
            target: PathBuf::from(format!("messages/{locale}.json")),
            source: PathBuf::from(format!("messages/{locale}.additions.json")),
            namespace: None,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenesConfig {
    #[serde(default = "default_scenes_root")]
    pub root: PathBuf,

    #[serde(default = "default_scene_categories")]
    pub categories: Vec<String>,
}

impl Default for ScenesConfig {
    fn default() -> Self {
        Self {
            root: default_scenes_root(),
            categories: default_scene_categories(),
        }
    }
}

fn default_scenes_root() -> PathBuf {
    PathBuf::from("lib/director/scenes")
}

fn default_scene_categories() -> Vec<String> {
    crate::commands::clean_scenes::SCENE_CATEGORIES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpliceConfig {
    #[serde(default = "default_splice_jobs")]
    pub jobs: Vec<SpliceJob>,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            jobs: default_splice_jobs(),
        }
    }
}

/// Replace `function` (found by its doc `comment`) in `target` with the
/// contents of `fragment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpliceJob {
    pub target: PathBuf,
    pub fragment: PathBuf,
    pub function: String,
    pub comment: String,
    #[serde(default)]
    pub mode: SpliceMode,
}

fn default_splice_jobs() -> Vec<SpliceJob> {
    vec![SpliceJob {
        target: PathBuf::from("lib/minecraft/component-generator.ts"),
        fragment: PathBuf::from("/tmp/generated_component.ts"),
        function: "generateHairShort_02_BobCut".to_string(),
        comment: "Tipo 2: Bob Cut".to_string(),
        mode: SpliceMode::Function,
    }]
}
