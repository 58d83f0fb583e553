use core::fmt;
use core::str::FromStr;
use std::path::Path;

use serde::Serialize;

use crate::flags::Flag;
use crate::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    Debug,
    #[default]
    Release,
}

impl BuildProfile {
    pub fn name(self) -> &'static str {
        match self {
            BuildProfile::Debug => "debug",
            BuildProfile::Release => "release",
        }
    }

    pub fn compiler_flags(self) -> [Flag; 2] {
        match self {
            BuildProfile::Debug => [Flag::Optimize(0), Flag::DebugInfo(Some(3))],
            BuildProfile::Release => [Flag::Optimize(2), Flag::DebugInfo(None)],
        }
    }

    /// Release assembles without extra flags
    pub fn assembler_flags(self) -> Option<Flag> {
        match self {
            BuildProfile::Debug => Some(Flag::DebugInfo(Some(3))),
            BuildProfile::Release => None,
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(BuildProfile::Debug),
            "release" => Ok(BuildProfile::Release),
            other => Err(Error::InvalidProfile(other.to_string())),
        }
    }
}

///
/// Linker script selection
///
/// `Flash` places the image in on-chip flash, `Ram` links everything
/// into RAM for loading through a debugger
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkScript {
    #[default]
    Flash,
    Ram,
}

impl LinkScript {
    pub fn path(self) -> &'static Path {
        match self {
            LinkScript::Flash => Path::new("./link.lds"),
            LinkScript::Ram => Path::new("./ram.lds"),
        }
    }
}

impl fmt::Display for LinkScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkScript::Flash => f.write_str("flash"),
            LinkScript::Ram => f.write_str("ram"),
        }
    }
}

impl FromStr for LinkScript {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flash" => Ok(LinkScript::Flash),
            "ram" => Ok(LinkScript::Ram),
            other => Err(Error::InvalidLinkScript(other.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::{BuildProfile, LinkScript};
    use crate::flags::Flag;
    use crate::Error;

    #[test]
    fn default_profile_is_release() {
        assert_eq!(BuildProfile::default(), BuildProfile::Release);
        assert_eq!(LinkScript::default(), LinkScript::Flash);
    }

    #[test]
    fn profile_round_trips_through_name() {
        for profile in [BuildProfile::Debug, BuildProfile::Release] {
            assert_eq!(profile.name().parse::<BuildProfile>(), Ok(profile));
        }
        assert_eq!(
            "fast".parse::<BuildProfile>(),
            Err(Error::InvalidProfile("fast".into()))
        );
    }

    #[test]
    fn only_debug_adds_assembler_flags() {
        assert_eq!(
            BuildProfile::Debug.assembler_flags(),
            Some(Flag::DebugInfo(Some(3)))
        );
        assert_eq!(BuildProfile::Release.assembler_flags(), None);
    }

    #[test]
    fn link_script_paths() {
        assert_eq!(LinkScript::Flash.path(), Path::new("./link.lds"));
        assert_eq!("ram".parse::<LinkScript>().map(LinkScript::path), Ok(Path::new("./ram.lds")));
        assert!("rom".parse::<LinkScript>().is_err());
    }
}
