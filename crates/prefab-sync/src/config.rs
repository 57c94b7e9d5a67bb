/*
 * config.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Resolution of input and output locations.
//!
//! Precedence is command-line flag, then environment, then built-in default.
//! Missing inputs are reported here, before any file is parsed.

use std::path::{Path, PathBuf};

use clap::Args;
use prefab_db::ReconcileOptions;
use thiserror::Error;

/// Environment variable holding the roaming application-data directory.
pub const APPDATA_VAR: &str = "APPDATA";

/// r2modman profile the mod author tests with.
pub const DEFAULT_PROFILE: &str = "Mod-Debug";

/// File name BepInEx gives the mod's config file.
pub const CONFIG_FILE_NAME: &str = "Searica.Valheim.MoreVanillaBuildPrefabs.cfg";

/// Baseline location relative to the project directory.
pub const DEFAULT_BASELINE: &str = "Configs/PrefabDefaults.cs";

/// Output location relative to the project directory.
pub const DEFAULT_OUTPUT: &str = "Python/DefaultConfigs.txt";

/// Errors locating or opening input files.
#[derive(Debug, Error)]
pub enum InvalidInputPath {
    #[error("environment variable {var} is not set; pass --config to locate the BepInEx config file")]
    MissingEnv { var: &'static str },

    #[error("{role} file not found: {}", path.display())]
    NotFound { role: &'static str, path: PathBuf },

    #[error("cannot read {role} file {}", path.display())]
    Unreadable {
        role: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Command-line flags that locate the inputs and output.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Mod project root that default paths are relative to
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Baseline C# file (default: <project-dir>/Configs/PrefabDefaults.cs)
    #[arg(short, long, value_name = "FILE")]
    pub baseline: Option<PathBuf>,

    /// BepInEx config file (default: the profile's config under %APPDATA%)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// r2modman profile used to locate the config file
    #[arg(short, long, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Write output to FILE (use '--output -' for stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Line in the baseline where the table starts
    #[arg(long)]
    pub marker: Option<String>,

    /// Number of preamble lines to skip in the config file
    #[arg(long, value_name = "N")]
    pub header_lines: Option<usize>,
}

/// Where merged output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub baseline: PathBuf,
    pub overrides: PathBuf,
    pub output: Destination,
    pub options: ReconcileOptions,
}

impl SyncConfig {
    /// Resolve against the process environment.
    pub fn from_env(args: &SyncArgs) -> Result<Self, InvalidInputPath> {
        Self::resolve(args, |var| std::env::var(var).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve<F>(args: &SyncArgs, env: F) -> Result<Self, InvalidInputPath>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_dir = args.project_dir.clone().unwrap_or_else(|| PathBuf::from("."));

        let baseline = args
            .baseline
            .clone()
            .unwrap_or_else(|| project_dir.join(DEFAULT_BASELINE));

        let overrides = match &args.config {
            Some(path) => path.clone(),
            None => {
                let appdata = env(APPDATA_VAR)
                    .filter(|value| !value.is_empty())
                    .ok_or(InvalidInputPath::MissingEnv { var: APPDATA_VAR })?;
                profile_config_path(Path::new(&appdata), &args.profile)
            }
        };

        let output = match &args.output {
            Some(path) if path.as_os_str() == "-" => Destination::Stdout,
            Some(path) => Destination::File(path.clone()),
            None => Destination::File(project_dir.join(DEFAULT_OUTPUT)),
        };

        let mut options = ReconcileOptions::default();
        if let Some(marker) = &args.marker {
            options = options.with_marker(marker.as_str());
        }
        if let Some(lines) = args.header_lines {
            options = options.with_header_lines(lines);
        }

        let config = SyncConfig {
            baseline,
            overrides,
            output,
            options,
        };
        config.check_inputs()?;
        Ok(config)
    }

    fn check_inputs(&self) -> Result<(), InvalidInputPath> {
        for (role, path) in [("baseline", &self.baseline), ("config", &self.overrides)] {
            if !path.is_file() {
                return Err(InvalidInputPath::NotFound {
                    role,
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Path of the mod's config file inside an r2modman profile.
pub fn profile_config_path(appdata: &Path, profile: &str) -> PathBuf {
    appdata
        .join("r2modmanPlus-local")
        .join("Valheim")
        .join("profiles")
        .join(profile)
        .join("BepInEx")
        .join("config")
        .join(CONFIG_FILE_NAME)
}

/// Read an input file, naming its role on failure.
pub fn read_input(role: &'static str, path: &Path) -> Result<String, InvalidInputPath> {
    std::fs::read_to_string(path).map_err(|source| InvalidInputPath::Unreadable {
        role,
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Project {
        dir: TempDir,
    }

    impl Project {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::create_dir_all(dir.path().join("Configs")).unwrap();
            fs::write(dir.path().join(DEFAULT_BASELINE), "").unwrap();
            Project { dir }
        }

        fn appdata(&self) -> PathBuf {
            let appdata = self.dir.path().join("AppData");
            let cfg = profile_config_path(&appdata, DEFAULT_PROFILE);
            fs::create_dir_all(cfg.parent().unwrap()).unwrap();
            fs::write(&cfg, "").unwrap();
            appdata
        }

        fn args(&self) -> SyncArgs {
            SyncArgs {
                project_dir: Some(self.dir.path().to_path_buf()),
                profile: DEFAULT_PROFILE.to_string(),
                ..SyncArgs::default()
            }
        }
    }

    #[test]
    fn test_defaults_from_appdata() {
        let project = Project::new();
        let appdata = project.appdata();
        let env = |var: &str| (var == APPDATA_VAR).then(|| appdata.to_string_lossy().to_string());

        let config = SyncConfig::resolve(&project.args(), env).unwrap();
        assert_eq!(config.baseline, project.dir.path().join(DEFAULT_BASELINE));
        assert!(config.overrides.ends_with(
            "r2modmanPlus-local/Valheim/profiles/Mod-Debug/BepInEx/config/Searica.Valheim.MoreVanillaBuildPrefabs.cfg"
        ));
        assert_eq!(
            config.output,
            Destination::File(project.dir.path().join(DEFAULT_OUTPUT))
        );
        assert_eq!(config.options.header_lines, prefab_db::DEFAULT_HEADER_LINES);
    }

    #[test]
    fn test_missing_appdata() {
        let project = Project::new();
        let err = SyncConfig::resolve(&project.args(), |_| None).unwrap_err();
        assert!(matches!(err, InvalidInputPath::MissingEnv { var: "APPDATA" }));

        let err = SyncConfig::resolve(&project.args(), |_| Some(String::new())).unwrap_err();
        assert!(matches!(err, InvalidInputPath::MissingEnv { .. }));
    }

    #[test]
    fn test_explicit_config_skips_environment() {
        let project = Project::new();
        let cfg = project.dir.path().join("local.cfg");
        fs::write(&cfg, "").unwrap();

        let args = SyncArgs {
            config: Some(cfg.clone()),
            output: Some(PathBuf::from("-")),
            header_lines: Some(3),
            marker: Some("// table".to_string()),
            ..project.args()
        };
        let config = SyncConfig::resolve(&args, |_| None).unwrap();
        assert_eq!(config.overrides, cfg);
        assert_eq!(config.output, Destination::Stdout);
        assert_eq!(config.options.header_lines, 3);
        assert_eq!(config.options.marker, "// table");
    }

    #[test]
    fn test_missing_baseline_is_reported() {
        let project = Project::new();
        let appdata = project.appdata();
        let args = SyncArgs {
            baseline: Some(project.dir.path().join("nope.cs")),
            ..project.args()
        };
        let err = SyncConfig::resolve(&args, |_| Some(appdata.to_string_lossy().to_string()))
            .unwrap_err();
        assert!(matches!(err, InvalidInputPath::NotFound { role: "baseline", .. }));
        assert!(err.to_string().contains("nope.cs"));
    }

    #[test]
    fn test_missing_profile_config_is_reported() {
        let project = Project::new();
        let appdata = project.appdata();
        let args = SyncArgs {
            profile: "Default".to_string(),
            ..project.args()
        };
        let err = SyncConfig::resolve(&args, |_| Some(appdata.to_string_lossy().to_string()))
            .unwrap_err();
        assert!(matches!(err, InvalidInputPath::NotFound { role: "config", .. }));
    }
}
