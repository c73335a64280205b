//! External toolchain invocation via `make`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Command;

use flate2::read::GzDecoder;

use tempo_config::ResolvedStage;
use tempo_tune::{RunMode, RunnerError, StageRunner};

/// Runs a stage's configured shell commands in the project directory.
///
/// Commands are split on whitespace and spawned directly, without a shell.
/// After every successful run the stage's gzipped reports are decompressed
/// in place so the report parsers can read them as plain text.
pub struct MakeRunner {
    project_dir: PathBuf,
    run: String,
    rerun: Vec<String>,
    decompress: Vec<PathBuf>,
    quiet: bool,
}

impl MakeRunner {
    /// Creates a runner for a resolved stage, rooted at the project directory.
    pub fn new(project_dir: &Path, stage: &ResolvedStage, quiet: bool) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            run: stage.run.clone(),
            rerun: stage.rerun.clone(),
            decompress: stage
                .compressed
                .iter()
                .map(|p| project_dir.join(p))
                .collect(),
            quiet,
        }
    }

    fn run_command(&self, command: &str) -> Result<(), RunnerError> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| RunnerError::new("empty command"))?;

        if !self.quiet {
            eprintln!("  running `{command}`");
        }

        let status = Command::new(program)
            .args(parts)
            .current_dir(&self.project_dir)
            .status()
            .map_err(|e| RunnerError::new(format!("failed to launch `{command}`: {e}")))?;

        if !status.success() {
            return Err(RunnerError::new(format!(
                "`{command}` exited with {status}"
            )));
        }
        Ok(())
    }

    /// Decompresses each configured `.gz` report next to itself, dropping
    /// the `.gz` suffix. Missing archives are skipped; the toolchain may
    /// write the report uncompressed.
    fn decompress_reports(&self) -> Result<(), RunnerError> {
        for gz_path in &self.decompress {
            if !gz_path.exists() {
                continue;
            }
            let out_path = gz_path.with_extension("");
            let gz_file = File::open(gz_path).map_err(|e| {
                RunnerError::new(format!("failed to open {}: {e}", gz_path.display()))
            })?;
            let mut decoder = GzDecoder::new(gz_file);
            let mut out = File::create(&out_path).map_err(|e| {
                RunnerError::new(format!("failed to create {}: {e}", out_path.display()))
            })?;
            std::io::copy(&mut decoder, &mut out).map_err(|e| {
                RunnerError::new(format!("failed to decompress {}: {e}", gz_path.display()))
            })?;
        }
        Ok(())
    }
}

impl StageRunner for MakeRunner {
    fn run(&mut self, mode: RunMode) -> Result<(), RunnerError> {
        match mode {
            RunMode::Initial => self.run_command(&self.run)?,
            RunMode::Rerun => {
                for command in &self.rerun {
                    self.run_command(command)?;
                }
            }
        }
        self.decompress_reports()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;
    use tempo_common::StageKind;

    fn stage(run: &str, rerun: &[&str], compressed: &[&str]) -> ResolvedStage {
        ResolvedStage {
            kind: StageKind::Synthesis,
            run: run.to_string(),
            rerun: rerun.iter().map(|s| s.to_string()).collect(),
            report: "report.rpt".to_string(),
            compressed: compressed.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn initial_run_executes_run_command() {
        let tmp = TempDir::new().unwrap();
        let mut runner = MakeRunner::new(tmp.path(), &stage("touch ran.txt", &[], &[]), true);
        runner.run(RunMode::Initial).unwrap();
        assert!(tmp.path().join("ran.txt").exists());
    }

    #[test]
    fn rerun_executes_all_commands_in_order() {
        let tmp = TempDir::new().unwrap();
        let mut runner = MakeRunner::new(
            tmp.path(),
            &stage("true", &["touch first.txt", "touch second.txt"], &[]),
            true,
        );
        runner.run(RunMode::Rerun).unwrap();
        assert!(tmp.path().join("first.txt").exists());
        assert!(tmp.path().join("second.txt").exists());
    }

    #[test]
    fn failing_command_errors() {
        let tmp = TempDir::new().unwrap();
        let mut runner = MakeRunner::new(tmp.path(), &stage("false", &[], &[]), true);
        let err = runner.run(RunMode::Initial).unwrap_err();
        assert!(err.message.contains("`false` exited with"));
    }

    #[test]
    fn missing_program_errors() {
        let tmp = TempDir::new().unwrap();
        let mut runner =
            MakeRunner::new(tmp.path(), &stage("no-such-program-xyz", &[], &[]), true);
        let err = runner.run(RunMode::Initial).unwrap_err();
        assert!(err.message.contains("failed to launch"));
    }

    #[test]
    fn empty_command_errors() {
        let tmp = TempDir::new().unwrap();
        let mut runner = MakeRunner::new(tmp.path(), &stage("", &[], &[]), true);
        let err = runner.run(RunMode::Initial).unwrap_err();
        assert!(err.message.contains("empty command"));
    }

    #[test]
    fn decompresses_reports_after_run() {
        let tmp = TempDir::new().unwrap();
        let gz_path = tmp.path().join("timing.rpt.gz");
        let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
        encoder.write_all(b"Path 1: MET (0.05 ns)\n").unwrap();
        encoder.finish().unwrap();

        let mut runner =
            MakeRunner::new(tmp.path(), &stage("true", &[], &["timing.rpt.gz"]), true);
        runner.run(RunMode::Initial).unwrap();

        let text = std::fs::read_to_string(tmp.path().join("timing.rpt")).unwrap();
        assert_eq!(text, "Path 1: MET (0.05 ns)\n");
    }

    #[test]
    fn decompression_replaces_stale_report() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("timing.rpt"), "stale contents\n").unwrap();
        let gz_path = tmp.path().join("timing.rpt.gz");
        let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
        encoder.write_all(b"fresh contents\n").unwrap();
        encoder.finish().unwrap();

        let mut runner =
            MakeRunner::new(tmp.path(), &stage("true", &[], &["timing.rpt.gz"]), true);
        runner.run(RunMode::Initial).unwrap();

        let text = std::fs::read_to_string(tmp.path().join("timing.rpt")).unwrap();
        assert_eq!(text, "fresh contents\n");
    }

    #[test]
    fn missing_archive_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let mut runner =
            MakeRunner::new(tmp.path(), &stage("true", &[], &["timing.rpt.gz"]), true);
        runner.run(RunMode::Initial).unwrap();
        assert!(!tmp.path().join("timing.rpt").exists());
    }
}
