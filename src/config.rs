use std::{env, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOAD_DELAY_MS: u64 = 1000;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 500;
const DEFAULT_NOTICE_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// How long the simulated fetch takes before seeding habits.
    pub load_delay: Duration,
    /// Pause between accepting the add form and applying it.
    pub submit_delay: Duration,
    /// How long the page keeps the "habit added" notice visible.
    pub notice_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            load_delay: Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            notice_duration: Duration::from_millis(DEFAULT_NOTICE_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let millis = |key: &str, default: u64| {
            Duration::from_millis(
                lookup(key)
                    .and_then(|value| value.trim().parse::<u64>().ok())
                    .unwrap_or(default),
            )
        };

        Self {
            port: lookup("PORT")
                .and_then(|value| value.trim().parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
            load_delay: millis("HABITS_LOAD_DELAY_MS", DEFAULT_LOAD_DELAY_MS),
            submit_delay: millis("HABITS_SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS),
            notice_duration: millis("HABITS_NOTICE_MS", DEFAULT_NOTICE_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_values_use_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn values_are_read_and_bad_ones_ignored() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "9000"),
            ("HABITS_LOAD_DELAY_MS", "0"),
            ("HABITS_SUBMIT_DELAY_MS", "soon"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.port, 9000);
        assert_eq!(config.load_delay, Duration::ZERO);
        assert_eq!(config.submit_delay, Duration::from_millis(500));
        assert_eq!(config.notice_duration, Duration::from_millis(3000));
    }
}
