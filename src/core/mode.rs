//! Build mode the generator runs under.

use std::fmt;

/// Build mode, determines where the site URL comes from.
///
/// | Mode          | Site URL source                      |
/// |---------------|--------------------------------------|
/// | `development` | dev server address (`[serve]`)       |
/// | `build`       | base path (`[site].base`)            |
/// | `generate`    | production URL (`[site].url`)        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BuildMode {
    /// Local development server.
    Development,
    /// Server build / pre-render.
    Build,
    /// Static site generation.
    #[default]
    Generate,
}

impl BuildMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Build => "build",
            Self::Generate => "generate",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
