//!
//! Hook the resolved configuration into `cc`
//!
//! Lets a `build.rs` compile board C / assembly sources with the
//! same cross compiler and flags as the rest of the BSP. C and
//! assembly get separate builds, one flag set each
//!

use crate::{BuildConfig, Flag, FlagSet, Tool};

impl BuildConfig {
    /// Build for C sources, carrying the compiler flags
    pub fn c_build(&self) -> cc::Build {
        self.build_with(&self.compiler_flags)
    }

    /// Build for `.S` sources, carrying the assembler flags
    pub fn asm_build(&self) -> cc::Build {
        self.build_with(&self.assembler_flags)
    }

    ///
    /// Fresh `cc::Build` on the resolved cross compiler and archiver
    ///
    /// `cc` defaults and warnings are off, the command line is exactly
    /// the flag set
    ///
    fn build_with(&self, flags: &FlagSet) -> cc::Build {
        log::debug!("Configuring cc with {}", self.tool_path(Tool::Cc).display());

        let mut build = cc::Build::new();
        build
            .compiler(self.tool_path(Tool::Cc))
            .archiver(self.tool_path(Tool::Ar))
            .no_default_flags(true)
            .warnings(false);

        // cc passes -c on its own
        for flag in flags.iter().filter(|flag| **flag != Flag::CompileOnly) {
            for token in flag.tokens() {
                build.flag(token.as_str());
            }
        }

        build
    }
}
