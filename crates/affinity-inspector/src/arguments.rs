pub const USAGE: &str = "\
Usage: affinity-inspector [--excluded] [--reset-config] [--debug]

  --excluded      Only report windows whose capture is restricted.
  --reset-config  Replace the config file with the default config.
  --debug         Log debug output to stderr.
  --help          Show this message.";

/// Command line flags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arguments {
    pub debug: bool,
    pub excluded: bool,
    pub reset_config: bool,
    pub help: bool,

    /// The first argument that was not recognised.
    pub unknown: Option<String>,
}

impl Arguments {
    /// Parse the flags, the program name must already be skipped.
    pub fn parse<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();

        for argument in arguments {
            match argument.as_ref() {
                "--debug" => parsed.debug = true,
                "--excluded" => parsed.excluded = true,
                "--reset-config" => parsed.reset_config = true,
                "--help" | "-h" => parsed.help = true,
                unknown => {
                    parsed.help = true;
                    if parsed.unknown.is_none() {
                        parsed.unknown = Some(unknown.to_string());
                    }
                }
            }
        }

        parsed
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::args().skip(1))
    }
}
