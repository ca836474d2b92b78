use crate::analyzer::{
    BuiltinPlugins, ConfigPlugins, DiscoveredAnalyzer, PatternAnalyzer, PluginSource,
    discover_plugins,
};
use crate::models::prelude::{HelpMetadata, ModelRoot};
use crate::shared::RUN_ID_ENV_VAR;
use crate::shared::models::prelude::ParsedConfig;
use clap::{ArgGroup, Parser};
use colored::*;
use directories::{BaseDirs, UserDirs};
use serde::Deserialize;
use serde_yaml::{Deserializer, Value};
use thiserror::Error;

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub const CONFIG_DIR_NAME: &str = ".textlens";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to get a working dir")]
    WorkingDirUnavailable,
    #[error("Unable to read file {path} because {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Parser, Debug, Default)]
#[clap(group = ArgGroup::new("config"))]
pub struct ConfigOptions {
    /// Add paths to search for configuration. By default, `textlens` will search up
    /// for `.textlens` directories and attempt to load `.yml` and `.yaml` files for config.
    /// If the config directory is somewhere else, specifying this option will _add_
    /// the paths/files to the loaded config.
    #[clap(long, env = "TEXTLENS_CONFIG_DIR", global(true))]
    extra_config: Vec<String>,

    /// When set, default config files will not be loaded and only specified config will be loaded.
    #[arg(
        long,
        env = "TEXTLENS_DISABLE_DEFAULT_CONFIG",
        default_value = "false",
        global(true)
    )]
    disable_default_config: bool,

    /// Do not offer the analyzers built into textlens.
    #[arg(long, global(true))]
    no_builtins: bool,

    /// Override the working directory
    #[arg(long, short = 'C', global(true))]
    working_dir: Option<String>,

    /// When outputting logs the run-id is the unique value that will define where they go.
    /// In the case that the run-id is re-used, the old values will be overwritten.
    #[arg(long, global(true), env = RUN_ID_ENV_VAR)]
    run_id: Option<String>,
}

impl ConfigOptions {
    pub fn generate_run_id() -> String {
        let id = nanoid::nanoid!(4, &nanoid::alphabet::SAFE);
        let now = chrono::Local::now();
        let current_time = now.format("%Y%m%d");
        format!("{}-{}", current_time, id)
    }

    pub fn get_run_id(&self) -> String {
        self.run_id.clone().unwrap_or_else(Self::generate_run_id)
    }

    /// Pin a generated run id so the log file and the loaded config agree.
    pub fn resolve_run_id(&mut self) {
        if self.run_id.is_none() {
            self.run_id = Some(Self::generate_run_id());
        }
    }

    pub fn load_config(&self) -> Result<FoundConfig, ConfigError> {
        let current_dir = std::env::current_dir();
        let working_dir = match (current_dir, &self.working_dir) {
            (_, Some(dir)) => PathBuf::from(&dir),
            (Ok(cwd), None) => cwd,
            _ => {
                error!(target: "user", "Unable to get a working dir");
                return Err(ConfigError::WorkingDirUnavailable);
            }
        };

        let config_path = self.find_config_paths(&working_dir);
        let found_config = FoundConfig::new(self, working_dir, config_path);

        debug!("Loaded config {:?}", found_config);

        Ok(found_config)
    }

    fn find_config_paths(&self, working_dir: &Path) -> Vec<PathBuf> {
        let mut config_paths = Vec::new();

        if !self.disable_default_config {
            for config_dir in build_config_path(working_dir) {
                debug!("Checking if {} exists", config_dir.display().to_string());
                if config_dir.exists() {
                    config_paths.push(config_dir)
                }
            }
        }

        for extra_config in &self.extra_config {
            let config_dir = Path::new(&extra_config);
            debug!("Checking if {} exists", config_dir.display().to_string());
            if config_dir.exists() {
                config_paths.push(config_dir.to_path_buf())
            }
        }

        config_paths
    }
}

#[derive(Debug, Clone)]
pub struct FoundConfig {
    pub working_dir: PathBuf,
    /// Pattern analyzers in load order, at most one per resource name.
    pub text_analyzer: Vec<PatternAnalyzer>,
    pub include_builtins: bool,
}

impl FoundConfig {
    pub fn empty(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            text_analyzer: Vec::new(),
            include_builtins: true,
        }
    }

    pub fn new(
        config_options: &ConfigOptions,
        working_dir: PathBuf,
        config_path: Vec<PathBuf>,
    ) -> Self {
        let mut this = Self {
            working_dir,
            text_analyzer: Vec::new(),
            include_builtins: !config_options.no_builtins,
        };

        for raw_config in load_all_config(&config_path) {
            let full_name = raw_config.full_name();
            let file_path = raw_config.file_path();
            match ParsedConfig::try_from(raw_config) {
                Ok(value) => this.add_model(value),
                Err(e) => {
                    warn!(target: "user", "Skipping {} in {}. {}", full_name.bold(), file_path, e)
                }
            }
        }

        this
    }

    /// Every analyzer this config can offer: built-ins first, then config
    /// resources in load order.
    pub fn discover_analyzers(&self) -> Vec<DiscoveredAnalyzer> {
        let config_plugins = ConfigPlugins::new(self.text_analyzer.iter().cloned());

        let mut sources: Vec<&dyn PluginSource> = Vec::new();
        if self.include_builtins {
            sources.push(&BuiltinPlugins);
        }
        sources.push(&config_plugins);

        discover_plugins(&sources)
    }

    fn add_model(&mut self, parsed_config: ParsedConfig) {
        match parsed_config {
            ParsedConfig::TextAnalyzer(analyzer) => {
                insert_if_absent(&mut self.text_analyzer, analyzer);
            }
        }
    }
}

/// Keep the first resource loaded for each name, which is the one closest to
/// the working dir.
fn insert_if_absent<T: HelpMetadata>(loaded: &mut Vec<T>, entry: T) {
    if loaded.iter().any(|existing| existing.name() == entry.name()) {
        warn!(target: "user", "Duplicate {} found, dropping {} in {}", entry.full_name().to_string().bold(), entry.name().bold(), entry.metadata().file_path());
    } else {
        loaded.push(entry);
    }
}

fn read_config_file(file_path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(file_path).map_err(|source| ConfigError::ReadFile {
        path: file_path.display().to_string(),
        source,
    })
}

fn load_all_config(paths: &[PathBuf]) -> Vec<ModelRoot<Value>> {
    let mut loaded_values = Vec::new();

    for file_path in expand_to_files(paths) {
        let file_contents = match read_config_file(&file_path) {
            Err(e) => {
                warn!(target: "user", "{}", e);
                continue;
            }
            Ok(content) => content,
        };
        for doc in Deserializer::from_str(&file_contents) {
            if let Some(parsed_model) = parse_model(doc, &file_path) {
                loaded_values.push(parsed_model)
            }
        }
    }

    loaded_values
}

pub(crate) fn parse_model(doc: Deserializer, file_path: &Path) -> Option<ModelRoot<Value>> {
    let value = match Value::deserialize(doc) {
        Ok(value) => value,
        Err(e) => {
            warn!(target: "user", "Unable to load document from {} because {}", file_path.display(), e);
            return None;
        }
    };

    match serde_yaml::from_value::<ModelRoot<Value>>(value) {
        Ok(mut value) => {
            value.metadata.annotations.file_path = Some(file_path.display().to_string());
            Some(value)
        }
        Err(e) => {
            warn!(target: "user", "Unable to parse model from {} because {}", file_path.display(), e);
            None
        }
    }
}

fn expand_to_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut config_files = Vec::new();
    for path in paths {
        let expanded_paths = expand_path(path).unwrap_or_else(|e| {
            warn!(target: "user", "Unable to access filesystem because {}", e);
            Vec::new()
        });
        config_files.extend(expanded_paths);
    }

    config_files
}

fn expand_path(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        let mut files = Vec::new();
        for dir_entry in fs::read_dir(path)?.flatten() {
            if !dir_entry.path().is_file() {
                continue;
            }

            let file_path = dir_entry.path();
            let extension = file_path.extension();
            if extension == Some(OsStr::new("yaml")) || extension == Some(OsStr::new("yml")) {
                debug!(target: "user", "Found file {:?}", file_path);
                files.push(file_path);
            }
        }
        files.sort();

        return Ok(files);
    }

    warn!("Unknown file type {}", path.display().to_string());
    Ok(Vec::new())
}

pub fn build_config_path(working_dir: &Path) -> Vec<PathBuf> {
    let mut config_path = Vec::new();

    let working_dir = fs::canonicalize(working_dir).unwrap_or_else(|_| working_dir.to_path_buf());
    for search_dir in working_dir.ancestors() {
        config_path.push(search_dir.join(CONFIG_DIR_NAME))
    }

    if let Some(user_dirs) = UserDirs::new() {
        config_path.push(user_dirs.home_dir().join(CONFIG_DIR_NAME));
    }

    if let Some(base_dirs) = BaseDirs::new() {
        config_path.push(base_dirs.config_dir().join(CONFIG_DIR_NAME));
    }

    config_path
}
