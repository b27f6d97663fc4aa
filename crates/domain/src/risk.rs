//! Risk levels: the ordered escalation states of a dashboard.
//!
//! The progression is fixed: `baixo < medio < alto < critico`. The server
//! supplies display names and colors for each level; when it cannot, the
//! built-in [`RiskLevelSet::defaults`] are used instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::Timestamp;

/// One step of the fixed risk progression.
///
/// Variant order is the escalation order, so the derived `Ord` is the
/// progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Baixo,
    Medio,
    Alto,
    Critico,
}

impl RiskLevel {
    /// Every level, lowest first.
    pub const ALL: [Self; 4] = [Self::Baixo, Self::Medio, Self::Alto, Self::Critico];

    /// Position in the progression, starting at 1 for `baixo`.
    #[must_use]
    pub fn order(self) -> u8 {
        match self {
            Self::Baixo => 1,
            Self::Medio => 2,
            Self::Alto => 3,
            Self::Critico => 4,
        }
    }

    /// The next higher level, or `None` at `critico`.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Baixo => Some(Self::Medio),
            Self::Medio => Some(Self::Alto),
            Self::Alto => Some(Self::Critico),
            Self::Critico => None,
        }
    }

    /// The next lower level, or `None` at `baixo`.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Baixo => None,
            Self::Medio => Some(Self::Baixo),
            Self::Alto => Some(Self::Medio),
            Self::Critico => Some(Self::Alto),
        }
    }

    /// Wire value (`"baixo"`, `"medio"`, …).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Baixo => "baixo",
            Self::Medio => "medio",
            Self::Alto => "alto",
            Self::Critico => "critico",
        }
    }

    /// One-line summary shown under the main indicator and in the modal preview.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Baixo => "Normal situation, routine monitoring",
            Self::Medio => "Attention required, increased monitoring",
            Self::Alto => "Alert situation, immediate action recommended",
            Self::Critico => "Imminent danger, urgent action required",
        }
    }

    /// Longer explanation shown in the description card.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Baixo => {
                "Situation under control. The system is operating within normal parameters. \
                 Routine monitoring is active."
            }
            Self::Medio => {
                "Situation requires attention. Some indicators show variations that need \
                 more frequent monitoring."
            }
            Self::Alto => {
                "Alert situation. Critical indicators detected. Immediate action is \
                 recommended to prevent escalation."
            }
            Self::Critico => {
                "Imminent danger. System in critical state. Urgent action required. \
                 Emergency protocols must be activated."
            }
        }
    }

    /// Icon class for the indicator.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Baixo => "fas fa-shield-alt",
            Self::Medio => "fas fa-exclamation-circle",
            Self::Alto => "fas fa-exclamation-triangle",
            Self::Critico => "fas fa-skull",
        }
    }

    /// Classify a move from `self` to `target`.
    #[must_use]
    pub fn transition_to(self, target: Self) -> RiskTransition {
        if target == self {
            RiskTransition::Unchanged { level: self }
        } else {
            RiskTransition::Change {
                from: self,
                to: target,
            }
        }
    }

    /// Plan a one-step escalation.
    #[must_use]
    pub fn escalate(self) -> RiskTransition {
        match self.next() {
            Some(to) => RiskTransition::Change { from: self, to },
            None => RiskTransition::AtCeiling,
        }
    }

    /// Plan a one-step de-escalation.
    #[must_use]
    pub fn deescalate(self) -> RiskTransition {
        match self.previous() {
            Some(to) => RiskTransition::Change { from: self, to },
            None => RiskTransition::AtFloor,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baixo" => Ok(Self::Baixo),
            "medio" => Ok(Self::Medio),
            "alto" => Ok(Self::Alto),
            "critico" => Ok(Self::Critico),
            other => Err(ValidationError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// Outcome of planning a risk change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTransition {
    /// A request should be sent to move `from` → `to`.
    Change { from: RiskLevel, to: RiskLevel },
    /// Already at `critico`; nothing to escalate.
    AtCeiling,
    /// Already at `baixo`; nothing to de-escalate.
    AtFloor,
    /// The target is the current level.
    Unchanged { level: RiskLevel },
}

impl RiskTransition {
    /// Whether this is an upward move (shows the escalation warning).
    #[must_use]
    pub fn is_escalation(self) -> bool {
        matches!(self, Self::Change { from, to } if to > from)
    }

    /// Target level when a request is needed.
    #[must_use]
    pub fn target(self) -> Option<RiskLevel> {
        match self {
            Self::Change { to, .. } => Some(to),
            Self::AtCeiling | Self::AtFloor | Self::Unchanged { .. } => None,
        }
    }
}

/// Presentation data for one risk level, as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevelInfo {
    pub value: RiskLevel,
    pub display: String,
    pub color: String,
}

impl RiskLevelInfo {
    /// Built-in presentation for `level`.
    #[must_use]
    pub fn builtin(level: RiskLevel) -> Self {
        let (display, color) = match level {
            RiskLevel::Baixo => ("Baixo", "#10b981"),
            RiskLevel::Medio => ("Médio", "#f59e0b"),
            RiskLevel::Alto => ("Alto", "#ef4444"),
            RiskLevel::Critico => ("Crítico", "#dc2626"),
        };
        Self {
            value: level,
            display: display.to_string(),
            color: color.to_string(),
        }
    }
}

/// The valid levels for a session, always in progression order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskLevelSet {
    levels: Vec<RiskLevelInfo>,
}

impl RiskLevelSet {
    /// The four built-in levels used when the server set is unavailable.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            levels: RiskLevel::ALL.into_iter().map(RiskLevelInfo::builtin).collect(),
        }
    }

    /// Build a set from server data.
    ///
    /// Levels are sorted into progression order and duplicates keep the
    /// first occurrence. An empty input yields an empty set.
    #[must_use]
    pub fn from_levels(levels: Vec<RiskLevelInfo>) -> Self {
        let mut out: Vec<RiskLevelInfo> = Vec::with_capacity(levels.len());
        for info in levels {
            if !out.iter().any(|existing| existing.value == info.value) {
                out.push(info);
            }
        }
        out.sort_by_key(|info| info.value);
        Self { levels: out }
    }

    /// Look up the presentation of `level`.
    #[must_use]
    pub fn get(&self, level: RiskLevel) -> Option<&RiskLevelInfo> {
        self.levels.iter().find(|info| info.value == level)
    }

    /// Presentation of `level`, falling back to the built-in one.
    #[must_use]
    pub fn info_or_builtin(&self, level: RiskLevel) -> RiskLevelInfo {
        self.get(level)
            .cloned()
            .unwrap_or_else(|| RiskLevelInfo::builtin(level))
    }

    /// Iterate in progression order.
    pub fn iter(&self) -> impl Iterator<Item = &RiskLevelInfo> {
        self.levels.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for RiskLevelSet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Snapshot of a dashboard's current risk.
///
/// Replaced wholesale after every successful read or update; never mutated
/// field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentRisk {
    pub value: RiskLevel,
    pub display: String,
    pub color: String,
    pub updated_at: Timestamp,
}

impl CurrentRisk {
    /// Build a snapshot from a level set entry.
    #[must_use]
    pub fn from_info(info: RiskLevelInfo, updated_at: Timestamp) -> Self {
        Self {
            value: info.value,
            display: info.display,
            color: info.color,
            updated_at,
        }
    }
}
