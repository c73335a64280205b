//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads and validates a `tempo.toml` configuration from a project directory.
///
/// Reads `<project_dir>/tempo.toml`, parses it, and validates required fields.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("tempo.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `tempo.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are consistent.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.project.top_module.is_empty() {
        return Err(ConfigError::MissingField("project.top_module".to_string()));
    }
    if !(config.flow.initial_period > 0.0) {
        return Err(ConfigError::ValidationError(format!(
            "flow.initial_period must be > 0 (got {})",
            config.flow.initial_period
        )));
    }
    if config.flow.max_iterations == 0 {
        return Err(ConfigError::ValidationError(
            "flow.max_iterations must be > 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[project]
name = "fft_block"
top_module = "dft_top"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "fft_block");
        assert_eq!(config.project.top_module, "dft_top");
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[project]
name = "fft_block"
top_module = "dft_top"

[flow]
initial_period = 8.0
max_iterations = 40
constraints = "cfg/constraints.tcl"

[synthesis]
run = "make syn"
rerun = ["make redo-syn"]
report = "build/syn-rundir/reports/final_time_ss_100C_1v60.setup_view.rpt"

[par]
run = "make par"
rerun = ["make clean-build", "make par"]

[reports]
area = "build/par-rundir/dft_top_area.rpt"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.flow.max_iterations, 40);
        assert_eq!(config.synthesis.run.as_deref(), Some("make syn"));
        assert_eq!(config.par.rerun.as_ref().unwrap().len(), 2);
        assert!(config.reports.area.is_some());
    }

    #[test]
    fn missing_name_errors() {
        let toml = r#"
[project]
name = ""
top_module = "dft_top"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn missing_top_module_errors() {
        let toml = r#"
[project]
name = "fft_block"
top_module = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn zero_period_errors() {
        let toml = r#"
[project]
name = "fft_block"
top_module = "dft_top"

[flow]
initial_period = 0.0
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn negative_period_errors() {
        let toml = r#"
[project]
name = "fft_block"
top_module = "dft_top"

[flow]
initial_period = -4.0
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn zero_iterations_errors() {
        let toml = r#"
[project]
name = "fft_block"
top_module = "dft_top"

[flow]
max_iterations = 0
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
