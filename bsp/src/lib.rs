//!
//! Swallow BSP host tool
//!
//! Resolves the build configuration once from the environment and
//! the command line, then prints it or runs the post-build steps
//!

pub mod cli;
pub mod report;
pub mod runner;

use swallow_profile::env::OVERRIDE_VARS;
use swallow_profile::{BuildConfig, Environment, MapEnv, ProcessEnv, Resolver};

use cli::{Args, Command, Format, PostBuildArgs, ProfileArgs, ResolveArgs};
use runner::PostBuildRunner;

pub type GenericResult = Result<(), Box<dyn std::error::Error>>;

///
/// Snapshot of the override variables, with `--set` values on top
///
pub fn environment<E: Environment>(process: &E, overrides: &[(String, String)]) -> MapEnv {
    let mut env = MapEnv::snapshot(process, &OVERRIDE_VARS);
    for (key, value) in overrides {
        log::debug!("--set {key}={value}");
        env.set(key.as_str(), value.as_str());
    }
    env
}

fn resolve(env: &MapEnv, profile: &ProfileArgs) -> Result<BuildConfig, swallow_profile::Error> {
    Resolver::new(env)
        .profile(profile.build)
        .link_script(profile.link_script)
        .resolve()
}

pub fn run(args: &Args) -> GenericResult {
    let env = environment(&ProcessEnv, &args.overrides);

    match &args.command {
        Command::Resolve(resolve_args) => print_config(&env, resolve_args),
        Command::PostBuild(post_args) => post_build(&env, post_args),
    }
}

fn print_config(env: &MapEnv, args: &ResolveArgs) -> GenericResult {
    let config = resolve(env, &args.profile)?;

    match args.format {
        Format::Text => print!("{}", report::render_text(&config)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }

    Ok(())
}

fn post_build(env: &MapEnv, args: &PostBuildArgs) -> GenericResult {
    let config = resolve(env, &args.profile)?;
    let runner = PostBuildRunner::new(&config, &args.target);

    if args.dry_run {
        print!("{}", runner.action().render());
        return Ok(());
    }

    runner.run()?;
    Ok(())
}
