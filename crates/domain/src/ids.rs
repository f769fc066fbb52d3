use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Lets id-keyed maps be queried with a plain `&str`.
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ChallengeId);
define_id!(CardId);
define_id!(RelicId);
define_id!(AchievementId);

/// Suffix appended to a challenge id for the ascension-20 achievement.
pub const ASCENSION_ACHIEVEMENT_SUFFIX: &str = "_A20";

impl ChallengeId {
    /// Achievement unlocked whenever this challenge is won.
    pub fn achievement(&self) -> AchievementId {
        AchievementId::new(self.0.clone())
    }

    /// Achievement unlocked when this challenge is won on ascension 20.
    pub fn ascension_achievement(&self) -> AchievementId {
        AchievementId::new(format!("{}{}", self.0, ASCENSION_ACHIEVEMENT_SUFFIX))
    }
}
