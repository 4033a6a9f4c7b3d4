use std::time::Duration;

pub struct Config;

impl Config {
    pub const FAST_DELAY: Duration = Duration::from_millis(100);
    pub const NORMAL_DELAY: Duration = Duration::from_millis(500);
    pub const SLOW_DELAY: Duration = Duration::from_millis(1000);

    pub const ALIVE_GLYPH: &'static str = "🟩";
    pub const DEAD_GLYPH: &'static str = "⬛";

    pub const DEFAULT_FILL_RATE: f64 = 0.5;
}

/// Pacing between generations, fixed for a run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum SpeedMode {
    Fast,
    Normal,
    Slow,
    /// Wait for a key press before every generation.
    Step,
}

impl SpeedMode {
    /// Frame time of the timed modes; `None` for [`SpeedMode::Step`].
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::Fast => Some(Config::FAST_DELAY),
            Self::Normal => Some(Config::NORMAL_DELAY),
            Self::Slow => Some(Config::SLOW_DELAY),
            Self::Step => None,
        }
    }
}

impl std::str::FromStr for SpeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s.trim(), true)
    }
}

impl std::fmt::Display for SpeedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Fast => "fast",
            Self::Normal => "normal",
            Self::Slow => "slow",
            Self::Step => "step",
        };
        f.write_str(name)
    }
}

/// How the initial board is filled.
#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum InitMode {
    /// Live cells are typed in as coordinates.
    Manual,
    Random,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_mode_parsing() {
        assert_eq!("fast".parse::<SpeedMode>(), Ok(SpeedMode::Fast));
        assert_eq!(" Normal\n".parse::<SpeedMode>(), Ok(SpeedMode::Normal));
        assert_eq!("SLOW".parse::<SpeedMode>(), Ok(SpeedMode::Slow));
        assert_eq!("step".parse::<SpeedMode>(), Ok(SpeedMode::Step));
        assert!("turbo".parse::<SpeedMode>().is_err());
    }

    #[test]
    fn test_delays() {
        assert_eq!(SpeedMode::Fast.delay(), Some(Duration::from_millis(100)));
        assert_eq!(SpeedMode::Slow.delay(), Some(Duration::from_secs(1)));
        assert_eq!(SpeedMode::Step.delay(), None);
        assert_eq!(SpeedMode::Step.to_string(), "step");
    }
}
