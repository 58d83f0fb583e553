//!
//! Text rendering of a resolved configuration
//!
//! Uses the variable names BSP build scripts traditionally use
//! (CC, CFLAGS, POST_ACTION, ...) so the output can be diffed
//! against an existing board setup
//!

use std::fmt::Write;

use swallow_profile::BuildConfig;

pub fn render_text(config: &BuildConfig) -> String {
    let tools = &config.tools;
    let mut out = String::new();

    let rows: [(&str, String); 23] = [
        ("ARCH", config.architecture.to_string()),
        ("CPU", config.cpu_model.to_string()),
        ("CORE", config.architecture.to_string()),
        ("CROSS_TOOL", config.toolchain_vendor.name().to_string()),
        ("PLATFORM", config.toolchain_vendor.name().to_string()),
        ("EXEC_PATH", config.toolchain_path.display().to_string()),
        ("BUILD", config.build_profile.to_string()),
        ("MAP_FILE", config.map_file.to_string()),
        ("LINK_FILE", config.link_script.path().display().to_string()),
        ("TARGET_NAME", config.target_name.to_string()),
        ("TARGET_EXT", config.target_ext.to_string()),
        ("CC", tools.cc.clone()),
        ("AS", tools.as_.clone()),
        ("AR", tools.ar.clone()),
        ("LINK", tools.link.clone()),
        ("SIZE", tools.size.clone()),
        ("OBJDUMP", tools.objdump.clone()),
        ("OBJCPY", tools.objcopy.clone()),
        ("CFLAGS", config.compiler_flags.to_string()),
        ("AFLAGS", config.assembler_flags.to_string()),
        ("LFLAGS", config.linker_flags.to_string()),
        ("CPATH", String::new()),
        ("LPATH", String::new()),
    ];

    for (key, value) in rows {
        let _ = writeln!(out, "{key} = {value}");
    }

    out.push_str("POST_ACTION =\n");
    for line in config.post_action.render().lines() {
        let _ = writeln!(out, "    {line}");
    }

    out
}

#[cfg(test)]
mod test {
    use swallow_profile::{BuildConfig, BuildProfile, MapEnv};

    use super::render_text;

    #[test]
    fn text_report() {
        let config = BuildConfig::resolve(&MapEnv::new(), BuildProfile::Debug).unwrap();
        let text = render_text(&config);

        assert!(text.starts_with("ARCH = risc-v\nCPU = scr1\n"));
        assert!(text.contains("BUILD = debug\n"));
        assert!(text.contains("EXEC_PATH = /usr/bin\n"));
        assert!(text.contains("CC = riscv64-unknown-elf-gcc\n"));
        assert!(text.contains("LINK_FILE = ./link.lds\n"));
        assert!(text.contains("CPATH = \n"));
        assert!(text.ends_with(
            "POST_ACTION =\n    riscv64-unknown-elf-objcopy -O binary $TARGET rtthread.bin\n    \
             riscv64-unknown-elf-size $TARGET\n"
        ));
    }
}
