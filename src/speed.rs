use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How fast the snake moves, chosen on the main menu before each game
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    /// Time between movements of the snake
    pub(crate) fn period(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(200),
            Speed::Medium => Duration::from_millis(150),
            Speed::Fast => Duration::from_millis(100),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Medium => "Medium",
            Speed::Fast => "Fast",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::EnumExt;

    #[test]
    fn slower_is_longer() {
        let periods = Speed::iter().map(Speed::period).collect::<Vec<_>>();
        assert!(periods.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn fmt_width() {
        assert_eq!(format!("{:8}", Speed::Fast), "Fast    ");
    }

    #[test]
    fn deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            speed: Speed,
        }
        let w: Wrapper = toml::from_str(r#"speed = "slow""#).unwrap();
        assert_eq!(w.speed, Speed::Slow);
        assert!(toml::from_str::<Wrapper>(r#"speed = "ludicrous""#).is_err());
    }
}
