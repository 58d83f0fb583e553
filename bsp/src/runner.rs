//!
//! Post-build step runner
//!
//! Runs each step of a bound `PostAction` in order with the
//! toolchain directory in front of `PATH`, and stops at the
//! first step that fails
//!

use core::fmt;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use swallow_profile::{BuildConfig, PostAction, PostStep};

#[derive(Debug)]
pub enum Error {
    Spawn {
        program: String,
        source: std::io::Error,
    },
    StepFailed {
        program: String,
        status: ExitStatus,
    },
    BadPath(std::env::JoinPathsError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spawn { program, source } => write!(f, "failed to start `{program}`: {source}"),
            Error::StepFailed { program, status } => write!(f, "`{program}` exited with {status}"),
            Error::BadPath(err) => write!(f, "cannot extend PATH with the toolchain directory: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Spawn { source, .. } => Some(source),
            Error::BadPath(err) => Some(err),
            Error::StepFailed { .. } => None,
        }
    }
}

pub struct PostBuildRunner {
    exec_path: PathBuf,
    action: PostAction,
}

impl PostBuildRunner {
    pub fn new(config: &BuildConfig, target: &str) -> Self {
        Self {
            exec_path: config.toolchain_path.clone(),
            action: config.post_action.bind(target),
        }
    }

    pub fn action(&self) -> &PostAction {
        &self.action
    }

    pub fn run(&self) -> Result<(), Error> {
        let path = search_path(&self.exec_path, std::env::var_os("PATH"))?;

        for step in &self.action.steps {
            log::info!("{}", step.render());

            let status = command_for(step, &path)
                .status()
                .map_err(|source| Error::Spawn {
                    program: step.program.clone(),
                    source,
                })?;

            if !status.success() {
                return Err(Error::StepFailed {
                    program: step.program.clone(),
                    status,
                });
            }
        }

        Ok(())
    }
}

fn command_for(step: &PostStep, path: &OsString) -> Command {
    let mut command = Command::new(&step.program);
    command.args(&step.args).env("PATH", path);
    command
}

/// `exec_path` followed by the entries of `current`
fn search_path(exec_path: &Path, current: Option<OsString>) -> Result<OsString, Error> {
    let mut entries = vec![exec_path.to_path_buf()];
    if let Some(current) = current {
        entries.extend(std::env::split_paths(&current));
    }
    std::env::join_paths(entries).map_err(Error::BadPath)
}
