use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use swallow_profile::{BuildProfile, LinkScript};

/// Build profile tool for the Swallow RISC-V board
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "Resolve toolchain, flags and post-build steps for the Swallow BSP")]
pub struct Args {
    /// More output on stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Environment override applied on top of the process environment,
    /// e.g. --set RTT_EXEC_PATH=/opt/riscv/bin
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override, global = true)]
    pub overrides: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved build configuration
    Resolve(ResolveArgs),

    /// Run the post-build steps against a linked image
    PostBuild(PostBuildArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ProfileArgs {
    /// Build profile, debug or release
    #[arg(short, long, default_value = "release")]
    pub build: BuildProfile,

    /// Linker script, flash or ram
    #[arg(short, long, default_value = "flash")]
    pub link_script: LinkScript,
}

#[derive(ClapArgs, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(ClapArgs, Debug)]
pub struct PostBuildArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Linked image, e.g. rtthread.elf
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Print the commands instead of running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// KEY = value lines
    Text,
    Json,
}

fn parse_override(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}
