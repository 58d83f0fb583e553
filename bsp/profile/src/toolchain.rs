use core::str::FromStr;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::Error;

/// Cross prefix of the bare-metal RISC-V GNU toolchain
pub const GCC_PREFIX: &str = "riscv64-unknown-elf-";

pub const GCC_DEFAULT_EXEC_PATH: &str = "/usr/bin";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainVendor {
    #[default]
    Gcc,
}

impl ToolchainVendor {
    pub fn name(self) -> &'static str {
        match self {
            ToolchainVendor::Gcc => "gcc",
        }
    }

    pub fn default_exec_path(self) -> PathBuf {
        match self {
            ToolchainVendor::Gcc => PathBuf::from(GCC_DEFAULT_EXEC_PATH),
        }
    }

    pub fn tools(self) -> Tools {
        match self {
            ToolchainVendor::Gcc => Tools::with_prefix(GCC_PREFIX),
        }
    }
}

impl FromStr for ToolchainVendor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gcc" => Ok(ToolchainVendor::Gcc),
            other => Err(Error::UnsupportedToolchain(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Cc,
    As,
    Ar,
    Link,
    Size,
    Objdump,
    Objcopy,
}

///
/// Binary names of every tool the build uses
///
/// The assembler and the linker are both the compiler driver,
/// invoked in assembly / link mode
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tools {
    pub cc: String,
    #[serde(rename = "as")]
    pub as_: String,
    pub ar: String,
    pub link: String,
    pub size: String,
    pub objdump: String,
    pub objcopy: String,
}

impl Tools {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            cc: format!("{prefix}gcc"),
            as_: format!("{prefix}gcc"),
            ar: format!("{prefix}ar"),
            link: format!("{prefix}gcc"),
            size: format!("{prefix}size"),
            objdump: format!("{prefix}objdump"),
            objcopy: format!("{prefix}objcopy"),
        }
    }

    pub fn name(&self, tool: Tool) -> &str {
        match tool {
            Tool::Cc => &self.cc,
            Tool::As => &self.as_,
            Tool::Ar => &self.ar,
            Tool::Link => &self.link,
            Tool::Size => &self.size,
            Tool::Objdump => &self.objdump,
            Tool::Objcopy => &self.objcopy,
        }
    }

    pub fn path(&self, exec_path: &Path, tool: Tool) -> PathBuf {
        exec_path.join(self.name(tool))
    }
}
