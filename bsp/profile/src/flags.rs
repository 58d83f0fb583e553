//!
//! Typed compiler / assembler / linker flags
//!
//! Flags are kept as structured entries and only turned into
//! argv tokens (or one display string) when a tool is invoked
//!

use core::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    /// `-march=<isa>`
    Arch(String),
    /// `-mabi=<abi>`
    Abi(String),
    /// `-mcmodel=<model>`
    CodeModel(String),
    /// `-msmall-data-limit=<bytes>`
    SmallDataLimit(u32),
    /// `-L<dir>`
    LibraryPath(PathBuf),
    NoStartFiles,
    /// `-l<name>`
    Library(String),
    /// `-save-temps=<where>`
    SaveTemps(String),
    /// `-D<name>`
    Define(String),
    /// `-O<level>`
    Optimize(u8),
    /// `-g` when no level is given, `-g<level>` otherwise
    DebugInfo(Option<u8>),
    /// `-c`
    CompileOnly,
    /// `-x <language>`
    Language(String),
    /// `-Wl,<arg>,<arg>...`
    Linker(Vec<String>),
    /// `-T <script>`
    LinkScript(PathBuf),
}

impl Flag {
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Flag::Arch(isa) => vec![format!("-march={isa}")],
            Flag::Abi(abi) => vec![format!("-mabi={abi}")],
            Flag::CodeModel(model) => vec![format!("-mcmodel={model}")],
            Flag::SmallDataLimit(limit) => vec![format!("-msmall-data-limit={limit}")],
            Flag::LibraryPath(dir) => vec![format!("-L{}", dir.display())],
            Flag::NoStartFiles => vec!["-nostartfiles".to_string()],
            Flag::Library(name) => vec![format!("-l{name}")],
            Flag::SaveTemps(location) => vec![format!("-save-temps={location}")],
            Flag::Define(name) => vec![format!("-D{name}")],
            Flag::Optimize(level) => vec![format!("-O{level}")],
            Flag::DebugInfo(None) => vec!["-g".to_string()],
            Flag::DebugInfo(Some(level)) => vec![format!("-g{level}")],
            Flag::CompileOnly => vec!["-c".to_string()],
            Flag::Language(lang) => vec!["-x".to_string(), lang.clone()],
            Flag::Linker(args) => vec![format!("-Wl,{}", args.join(","))],
            Flag::LinkScript(script) => vec!["-T".to_string(), script.display().to_string()],
        }
    }
}

///
/// Ordered list of flags
///
/// Order is significant and preserved, duplicates are allowed
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: Vec<Flag>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self { flags: Vec::new() }
    }

    pub fn with(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn with_all<I: IntoIterator<Item = Flag>>(mut self, flags: I) -> Self {
        self.flags.extend(flags);
        self
    }

    pub fn push(&mut self, flag: Flag) {
        self.flags.push(flag);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    pub fn contains(&self, flag: &Flag) -> bool {
        self.flags.contains(flag)
    }

    /// Flatten into the argv tokens handed to a process
    pub fn tokens(&self) -> Vec<String> {
        self.flags.iter().flat_map(Flag::tokens).collect()
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

impl Serialize for FlagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tokens())
    }
}
