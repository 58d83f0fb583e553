//!
//! Swallow build profile resolution
//!
//! Maps {toolchain vendor, toolchain path, build profile, link script}
//! onto the tools, flags and artifact names used to build the
//! RT-Thread image for the Swallow board (RISC-V scr1)
//!

pub mod compile;
pub mod env;
pub mod error;
pub mod flags;
pub mod post_action;
pub mod profile;
pub mod toolchain;

use std::path::PathBuf;

use serde::Serialize;

pub use env::{Environment, MapEnv, ProcessEnv};
pub use error::Error;
pub use flags::{Flag, FlagSet};
pub use post_action::{PostAction, PostStep};
pub use profile::{BuildProfile, LinkScript};
pub use toolchain::{Tool, ToolchainVendor, Tools};

pub const ARCH: &str = "risc-v";
pub const CPU: &str = "scr1";

pub const MAP_FILE: &str = "rtthread.map";
pub const TARGET_NAME: &str = "rtthread.bin";
pub const TARGET_EXT: &str = "elf";

pub const MARCH: &str = "rv32imc";
pub const MABI: &str = "ilp32";
pub const CODE_MODEL: &str = "medany";
pub const SMALL_DATA_LIMIT: u32 = 8;

/// Marks every C translation unit as part of the OS build
pub const SOURCE_DEFINE: &str = "__RT_THREAD__";

///
/// Flags shared by the compiler, the assembler and the linker
///
/// target ISA, ABI, code model, small-data threshold, library
/// search path and freestanding startup
///
pub fn device_flags() -> FlagSet {
    FlagSet::new()
        .with(Flag::Arch(MARCH.to_string()))
        .with(Flag::Abi(MABI.to_string()))
        .with(Flag::CodeModel(CODE_MODEL.to_string()))
        .with(Flag::SmallDataLimit(SMALL_DATA_LIMIT))
        .with(Flag::LibraryPath(PathBuf::from(".")))
        .with(Flag::NoStartFiles)
        .with(Flag::Library("c".to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    pub architecture: &'static str,
    pub cpu_model: &'static str,
    pub toolchain_vendor: ToolchainVendor,
    pub toolchain_path: PathBuf,
    pub build_profile: BuildProfile,
    pub map_file: &'static str,
    pub link_script: LinkScript,
    pub target_name: &'static str,
    pub target_ext: &'static str,
    pub tools: Tools,
    pub compiler_flags: FlagSet,
    pub assembler_flags: FlagSet,
    pub linker_flags: FlagSet,
    pub post_action: PostAction,
}

impl BuildConfig {
    /// Resolve with the default (flash) link script
    pub fn resolve<E: Environment>(env: &E, profile: BuildProfile) -> Result<Self, Error> {
        Resolver::new(env).profile(profile).resolve()
    }

    pub fn tool_path(&self, tool: Tool) -> PathBuf {
        self.tools.path(&self.toolchain_path, tool)
    }
}

///
/// One-shot resolver
///
/// Reads the environment once in `resolve` and produces a
/// complete `BuildConfig` or an error, never anything in between
///
pub struct Resolver<'e, E: Environment> {
    env: &'e E,
    profile: BuildProfile,
    link_script: LinkScript,
}

impl<'e, E: Environment> Resolver<'e, E> {
    pub fn new(env: &'e E) -> Self {
        Self {
            env,
            profile: BuildProfile::default(),
            link_script: LinkScript::default(),
        }
    }

    pub fn profile(mut self, profile: BuildProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn link_script(mut self, link_script: LinkScript) -> Self {
        self.link_script = link_script;
        self
    }

    pub fn resolve(&self) -> Result<BuildConfig, Error> {
        let vendor = match self.env.override_for(env::TOOLCHAIN_VAR) {
            Some(requested) => {
                log::debug!("{} overrides toolchain vendor with `{requested}`", env::TOOLCHAIN_VAR);
                requested.parse::<ToolchainVendor>()?
            }
            None => ToolchainVendor::default(),
        };

        let toolchain_path = match self.env.override_for(env::EXEC_PATH_VAR) {
            Some(path) => {
                log::debug!("{} overrides toolchain path with `{path}`", env::EXEC_PATH_VAR);
                PathBuf::from(path)
            }
            None => vendor.default_exec_path(),
        };

        let tools = vendor.tools();
        let device = device_flags();

        let compiler_flags = device
            .clone()
            .with(Flag::SaveTemps("obj".to_string()))
            .with(Flag::Define(SOURCE_DEFINE.to_string()))
            .with_all(self.profile.compiler_flags());

        let mut assembler_flags = FlagSet::new()
            .with(Flag::CompileOnly)
            .with_all(device.iter().cloned())
            .with(Flag::Language("assembler-with-cpp".to_string()));

        if let Some(flag) = self.profile.assembler_flags() {
            assembler_flags.push(flag);
        }

        let linker_flags = device
            .with(Flag::Linker(vec![
                "--gc-sections".to_string(),
                "-cref".to_string(),
                format!("-Map={MAP_FILE}"),
            ]))
            .with(Flag::LinkScript(self.link_script.path().to_path_buf()));

        let post_action = PostAction::objcopy_and_size(&tools.objcopy, &tools.size, TARGET_NAME);

        log::info!(
            "Resolved {} build with {} at {} (link script {})",
            self.profile,
            tools.cc,
            toolchain_path.display(),
            self.link_script.path().display()
        );

        Ok(BuildConfig {
            architecture: ARCH,
            cpu_model: CPU,
            toolchain_vendor: vendor,
            toolchain_path,
            build_profile: self.profile,
            map_file: MAP_FILE,
            link_script: self.link_script,
            target_name: TARGET_NAME,
            target_ext: TARGET_EXT,
            tools,
            compiler_flags,
            assembler_flags,
            linker_flags,
            post_action,
        })
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::env::{EXEC_PATH_VAR, TOOLCHAIN_VAR};
    use super::*;

    fn release() -> BuildConfig {
        BuildConfig::resolve(&MapEnv::new(), BuildProfile::Release).unwrap()
    }

    fn debug() -> BuildConfig {
        BuildConfig::resolve(&MapEnv::new(), BuildProfile::Debug).unwrap()
    }

    #[test]
    fn release_without_overrides() {
        let config = release();

        assert_eq!(config.toolchain_vendor, ToolchainVendor::Gcc);
        assert_eq!(config.toolchain_path, Path::new("/usr/bin"));
        assert_eq!(config.tools.cc, "riscv64-unknown-elf-gcc");

        let cflags = config.compiler_flags.to_string();
        assert!(cflags.contains("-march=rv32imc -mabi=ilp32 -mcmodel=medany"));
        assert!(cflags.contains("-O2 -g"));
        assert!(!cflags.contains("-O0"));

        let lflags = config.linker_flags.to_string();
        assert!(lflags.contains("-Map=rtthread.map"));
        assert!(lflags.contains("-T ./link.lds"));
    }

    #[test]
    fn debug_without_overrides() {
        let config = debug();

        let cflags = config.compiler_flags.to_string();
        assert!(cflags.contains("-O0 -g3"));
        assert!(!cflags.contains("-O2"));
        assert!(config.compiler_flags.contains(&Flag::Optimize(0)));

        assert!(config.assembler_flags.tokens().contains(&"-g3".to_string()));
        assert!(config.assembler_flags.to_string().ends_with("-x assembler-with-cpp -g3"));
    }

    #[test]
    fn release_assembler_has_no_debug_level() {
        let aflags = release().assembler_flags;

        assert!(!aflags.tokens().contains(&"-g3".to_string()));
        assert_eq!(aflags.tokens().first().map(String::as_str), Some("-c"));
    }

    #[test]
    fn full_flag_strings() {
        let config = release();

        assert_eq!(
            config.compiler_flags.to_string(),
            "-march=rv32imc -mabi=ilp32 -mcmodel=medany -msmall-data-limit=8 -L. \
             -nostartfiles -lc -save-temps=obj -D__RT_THREAD__ -O2 -g"
        );
        assert_eq!(
            config.linker_flags.to_string(),
            "-march=rv32imc -mabi=ilp32 -mcmodel=medany -msmall-data-limit=8 -L. \
             -nostartfiles -lc -Wl,--gc-sections,-cref,-Map=rtthread.map -T ./link.lds"
        );
    }

    #[test]
    fn every_tool_is_prefixed() {
        let tools = release().tools;

        for name in [
            &tools.cc,
            &tools.as_,
            &tools.ar,
            &tools.link,
            &tools.size,
            &tools.objdump,
            &tools.objcopy,
        ] {
            assert!(name.starts_with("riscv64-unknown-elf-"), "{name}");
        }
    }

    #[test]
    fn overrides_are_taken_verbatim() {
        let env = MapEnv::new()
            .with(TOOLCHAIN_VAR, "gcc")
            .with(EXEC_PATH_VAR, "/opt/riscv  toolchain/bin/");

        let config = BuildConfig::resolve(&env, BuildProfile::Release).unwrap();

        assert_eq!(config.toolchain_path, Path::new("/opt/riscv  toolchain/bin/"));
        assert_eq!(
            config.tool_path(Tool::Objcopy),
            Path::new("/opt/riscv  toolchain/bin/riscv64-unknown-elf-objcopy")
        );
    }

    #[test]
    fn empty_overrides_fall_back_to_defaults() {
        let env = MapEnv::new().with(TOOLCHAIN_VAR, "").with(EXEC_PATH_VAR, "");

        assert_eq!(BuildConfig::resolve(&env, BuildProfile::Release), Ok(release()));
    }

    #[test]
    fn unsupported_vendor_fails_fast() {
        let env = MapEnv::new().with(TOOLCHAIN_VAR, "clang");

        let err = BuildConfig::resolve(&env, BuildProfile::Debug).unwrap_err();

        assert_eq!(err, Error::UnsupportedToolchain("clang".into()));
        assert!(err.to_string().contains("unsupported toolchain"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let env = MapEnv::new().with(EXEC_PATH_VAR, "/opt/riscv/bin");

        let a = BuildConfig::resolve(&env, BuildProfile::Debug).unwrap();
        let b = BuildConfig::resolve(&env, BuildProfile::Debug).unwrap();

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn ram_link_script() {
        let config = Resolver::new(&MapEnv::new())
            .link_script(LinkScript::Ram)
            .resolve()
            .unwrap();

        assert!(config.linker_flags.to_string().ends_with("-T ./ram.lds"));
        assert_eq!(config.link_script.path(), Path::new("./ram.lds"));
        assert_eq!(config.build_profile, BuildProfile::Release);
    }

    #[test]
    fn post_action_uses_resolved_tools() {
        assert_eq!(
            release().post_action.render(),
            "riscv64-unknown-elf-objcopy -O binary $TARGET rtthread.bin\n\
             riscv64-unknown-elf-size $TARGET\n"
        );
    }

    #[test]
    fn serializes_flags_as_tokens() {
        let json = serde_json::to_value(debug()).unwrap();

        assert_eq!(json["toolchain_vendor"], "gcc");
        assert_eq!(json["build_profile"], "debug");
        assert_eq!(json["tools"]["as"], "riscv64-unknown-elf-gcc");
        assert_eq!(json["linker_flags"][8], "-T");
        assert_eq!(json["linker_flags"][9], "./link.lds");
    }
}
