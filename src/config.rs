use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// The person the page is made for
    #[serde(default)]
    pub(crate) profile: Profile,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("greeting-snake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Load the configuration from `path` if given (which must then exist),
    /// or else from the default path (which need not exist)
    pub(crate) fn locate_and_load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Config::load(p, false),
            None => Config::load(&Config::default_path()?, true),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

/// Everything the page shows about the person it greets.  Any field missing
/// from the configuration file keeps its value from the built-in profile.
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Profile {
    /// Short name used in the header and the greeting
    pub(crate) name: String,
    pub(crate) full_name: String,
    pub(crate) birth_date: String,
    /// Opening the page on this day brings up a birthday greeting
    pub(crate) birthday: Birthday,
    pub(crate) age: u32,
    pub(crate) zodiac: String,
    pub(crate) personality: Vec<String>,
    pub(crate) interests: Vec<String>,
    pub(crate) motto: String,
    pub(crate) timeline: Vec<TimelineEntry>,
    /// Shown one at a time as the snake eats
    pub(crate) fun_facts: Vec<String>,
    /// Revealed as the score passes each threshold
    pub(crate) unlockables: Vec<Unlockable>,
    pub(crate) wish: String,
    pub(crate) signed_by: String,
    pub(crate) date: String,
}

impl Default for Profile {
    fn default() -> Profile {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|&s| String::from(s)).collect()
        }

        Profile {
            name: String::from("Nine"),
            full_name: String::from("Sugar Tube"),
            birth_date: String::from("March 18"),
            birthday: Birthday { month: 3, day: 18 },
            age: 18,
            zodiac: String::from("Pisces"),
            personality: strings(&["lively", "kind", "creative", "funny", "careful"]),
            interests: strings(&[
                "chatting",
                "tabletop games",
                "original characters",
                "drawing",
            ]),
            motto: String::from("Happiness is enough"),
            timeline: vec![
                TimelineEntry::new(2023, "First frog festival campaign"),
                TimelineEntry::new(2023, "First time beating up a teammate"),
                TimelineEntry::new(2023, "First time pummeling a shoggoth"),
                TimelineEntry::new(2023, "Sanctioned by the dice and defeated"),
            ],
            fun_facts: strings(&[
                "She once took down four teammates in one go",
                "Her very first character decided everything",
                "Her favorite pastime is teasing people who act too serious",
            ]),
            unlockables: vec![
                Unlockable::new(50, "Your highest hit was 9, averaging 7 damage per swing"),
                Unlockable::new(100, "You chased the young master up a tree"),
            ],
            wish: String::from(
                "Happy birthday! May every day of the new year be a happy one, \
                 with a steady drawing hand and inspiration that never runs out.",
            ),
            signed_by: String::from("Your best friend"),
            date: String::from("March 2024"),
        }
    }
}

/// A month and day of the year.  February 29 is allowed.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawBirthday")]
pub(crate) struct Birthday {
    month: u32,
    day: u32,
}

impl Birthday {
    pub(crate) fn new(month: u32, day: u32) -> Option<Birthday> {
        // 2000 is a leap year.
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Birthday { month, day })
    }

    /// Does `date` fall on this birthday, in any year?
    pub(crate) fn falls_on(self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawBirthday {
    month: u32,
    day: u32,
}

impl TryFrom<RawBirthday> for Birthday {
    type Error = String;

    fn try_from(raw: RawBirthday) -> Result<Birthday, String> {
        Birthday::new(raw.month, raw.day)
            .ok_or_else(|| format!("no such date: month {}, day {}", raw.month, raw.day))
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct TimelineEntry {
    pub(crate) year: i32,
    pub(crate) event: String,
}

impl TimelineEntry {
    fn new(year: i32, event: &str) -> TimelineEntry {
        TimelineEntry {
            year,
            event: String::from(event),
        }
    }
}

/// A piece of bonus text revealed once the score reaches `threshold`
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Unlockable {
    pub(crate) threshold: u32,
    pub(crate) text: String,
}

impl Unlockable {
    pub(crate) fn new(threshold: u32, text: &str) -> Unlockable {
        Unlockable {
            threshold,
            text: String::from(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_profile_thresholds() {
        let profile = Profile::default();
        let thresholds = profile
            .unlockables
            .iter()
            .map(|u| u.threshold)
            .collect::<Vec<_>>();
        assert_eq!(thresholds, [50, 100]);
        assert!(!profile.fun_facts.is_empty());
    }

    #[test]
    fn load_partial_profile() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            concat!(
                "[profile]\n",
                "name = \"Kit\"\n",
                "age = 30\n",
                "fun-facts = [\"Owns three kettles\"]\n",
                "\n",
                "[[profile.timeline]]\n",
                "year = 2019\n",
                "event = \"Learned to juggle\"\n",
                "\n",
                "[[profile.unlockables]]\n",
                "threshold = 10\n",
                "text = \"A secret\"\n",
            )
        )
        .unwrap();
        let config = Config::load(file.path(), false).unwrap();
        let profile = config.profile;
        assert_eq!(profile.name, "Kit");
        assert_eq!(profile.age, 30);
        assert_eq!(profile.fun_facts, ["Owns three kettles"]);
        assert_eq!(
            profile.timeline,
            [TimelineEntry::new(2019, "Learned to juggle")]
        );
        assert_eq!(profile.unlockables, [Unlockable::new(10, "A secret")]);
        assert_eq!(profile.motto, Profile::default().motto);
    }

    #[test]
    fn load_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::load(file.path(), false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml"), true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_not_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let r = Config::locate_and_load(Some(&dir.path().join("config.toml")));
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn load_birthday() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[profile]\nbirthday = {{ month = 2, day = 29 }}").unwrap();
        let profile = Config::load(file.path(), false).unwrap().profile;
        assert_eq!(Some(profile.birthday), Birthday::new(2, 29));
        assert_eq!(profile.birth_date, Profile::default().birth_date);
    }

    #[rstest::rstest]
    #[case(13, 1)]
    #[case(4, 31)]
    #[case(0, 10)]
    #[case(6, 0)]
    fn load_impossible_birthday(#[case] month: u32, #[case] day: u32) {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[profile]\nbirthday = {{ month = {month}, day = {day} }}"
        )
        .unwrap();
        let r = Config::load(file.path(), false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn birthday_falls_on() {
        let birthday = Profile::default().birthday;
        let on = |y, m, d| birthday.falls_on(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert!(on(2024, 3, 18));
        assert!(on(1999, 3, 18));
        assert!(!on(2024, 3, 19));
        assert!(!on(2024, 4, 18));
    }

    #[test]
    fn load_unknown_key() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[profile]\nfavorite-color = \"green\"").unwrap();
        let r = Config::load(file.path(), false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }
}
