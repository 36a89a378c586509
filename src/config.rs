use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "../results/revocation.json";
pub const DEFAULT_OUTPUT: &str = "avg_revoc_time_vs_nb_delegations.png";
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

#[derive(Clone, Debug)]
pub struct Config {
    /// JSON array of timing records.
    pub input: PathBuf,
    /// Where the PNG chart is written.
    pub output: PathBuf,
    /// Open the saved chart in the platform viewer.
    pub show: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            show: true,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
