//! Client configuration read from the environment and the command line.
use std::env;
use std::path::PathBuf;

/// Where the client takes its rules and scenario from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// TOML rules table; the built-in table is used when absent.
    pub rules_path: Option<PathBuf>,
    /// RON scenario; the demonstration scenario is used when absent.
    pub scenario_path: Option<PathBuf>,
    /// Abort the script at the first rejected command.
    pub stop_on_error: bool,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_RULES` - Path to a TOML rules table
    /// - `SKIRMISH_SCENARIO` - Path to a RON scenario
    /// - `SKIRMISH_STOP_ON_ERROR` - Stop at the first rejected command (default: false)
    pub fn from_env() -> Self {
        let mut config = Self {
            rules_path: env::var_os("SKIRMISH_RULES").map(PathBuf::from),
            scenario_path: env::var_os("SKIRMISH_SCENARIO").map(PathBuf::from),
            ..Self::default()
        };

        if let Some(stop) = read_env::<bool>("SKIRMISH_STOP_ON_ERROR") {
            config.stop_on_error = stop;
        } else if env::var("SKIRMISH_STOP_ON_ERROR").is_ok() {
            // Accept the bare variable as "true"
            config.stop_on_error = true;
        }

        config
    }

    /// Positional arguments override the environment: `[scenario] [rules]`.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(scenario) = args.next() {
            self.scenario_path = Some(PathBuf::from(scenario));
        }
        if let Some(rules) = args.next() {
            self.rules_path = Some(PathBuf::from(rules));
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
