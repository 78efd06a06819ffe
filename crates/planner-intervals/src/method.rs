//! Estimation methods selectable through the dispatcher

use planner_core::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Interval estimation method
///
/// The serialized and parsed names are the ones external callers pass as
/// strings, e.g. `"holdout_wilson"` or `"cv"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Normal approximation on a holdout set
    #[serde(rename = "holdout_z_test")]
    HoldoutZTest,
    /// Student's t approximation on a holdout set
    #[serde(rename = "holdout_t_test")]
    HoldoutTTest,
    /// Langford's Hoeffding bound on a holdout set
    #[serde(rename = "holdout_langford")]
    HoldoutLangford,
    /// Wilson score interval on a holdout set
    #[serde(rename = "holdout_wilson")]
    HoldoutWilson,
    /// Exact Clopper-Pearson interval on a holdout set
    #[serde(rename = "holdout_clopper_pearson")]
    HoldoutClopperPearson,
    /// Percentiles of resampled accuracies
    #[serde(rename = "bootstrap")]
    Bootstrap,
    /// K-fold cross-validation
    #[serde(rename = "cv")]
    Cv,
    /// Progressive validation
    #[serde(rename = "progressive")]
    Progressive,
}

impl Method {
    /// Every supported method
    pub const ALL: [Method; 8] = [
        Method::HoldoutZTest,
        Method::HoldoutTTest,
        Method::HoldoutLangford,
        Method::HoldoutWilson,
        Method::HoldoutClopperPearson,
        Method::Bootstrap,
        Method::Cv,
        Method::Progressive,
    ];

    /// The method's external name
    pub fn name(&self) -> &'static str {
        match self {
            Self::HoldoutZTest => "holdout_z_test",
            Self::HoldoutTTest => "holdout_t_test",
            Self::HoldoutLangford => "holdout_langford",
            Self::HoldoutWilson => "holdout_wilson",
            Self::HoldoutClopperPearson => "holdout_clopper_pearson",
            Self::Bootstrap => "bootstrap",
            Self::Cv => "cv",
            Self::Progressive => "progressive",
        }
    }

    /// Whether the method estimates from a single holdout set
    pub fn is_holdout(&self) -> bool {
        matches!(
            self,
            Self::HoldoutZTest
                | Self::HoldoutTTest
                | Self::HoldoutLangford
                | Self::HoldoutWilson
                | Self::HoldoutClopperPearson
        )
    }

    /// Whether the method needs a fold count
    pub fn requires_folds(&self) -> bool {
        matches!(self, Self::Cv)
    }

    /// Whether the method consumes resampled accuracies instead of a point accuracy
    pub fn requires_resamples(&self) -> bool {
        matches!(self, Self::Bootstrap)
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::HoldoutWilson
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| Error::UnsupportedMethod(s.to_string()))
    }
}
