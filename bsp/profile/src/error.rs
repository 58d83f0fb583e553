use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The toolchain vendor selector names something other than `gcc`
    UnsupportedToolchain(String),
    InvalidProfile(String),
    InvalidLinkScript(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedToolchain(vendor) => {
                write!(f, "unsupported toolchain vendor `{vendor}` (supported: gcc)")
            }
            Error::InvalidProfile(profile) => {
                write!(f, "unknown build profile `{profile}` (expected debug or release)")
            }
            Error::InvalidLinkScript(script) => {
                write!(f, "unknown link script `{script}` (expected flash or ram)")
            }
        }
    }
}

impl std::error::Error for Error {}
