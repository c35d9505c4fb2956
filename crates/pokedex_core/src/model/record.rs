//! Creature record domain model.
//!
//! # Responsibility
//! - Define the typed shape of one catalog entry as stored in the bundled asset.
//! - Map asset field names (`type`, `HP`, `Sp. Attack`, ...) onto Rust names.
//! - Provide record-level validation used by the catalog loader.
//!
//! # Invariants
//! - `id` is positive and stable; it keys navigation, thumbnails and notes.
//! - `types` holds at least one tag, in asset order.
//! - `name.english` is the canonical display name and is never blank.
//! - Records are never mutated after load.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of one record.
///
/// Kept signed so lookups accept any caller-provided integer, including
/// negative values that can never match.
pub type RecordId = i64;

/// Conventional upper bound of the stat display scale.
pub const STAT_DISPLAY_MAX: u32 = 255;

/// Localized display names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordName {
    pub english: String,
    #[serde(default)]
    pub japanese: Option<String>,
    #[serde(default)]
    pub chinese: Option<String>,
    #[serde(default)]
    pub french: Option<String>,
}

impl RecordName {
    /// Creates a name with only the canonical english value.
    pub fn english(value: impl Into<String>) -> Self {
        Self {
            english: value.into(),
            japanese: None,
            chinese: None,
            french: None,
        }
    }
}

/// Six base statistics.
///
/// Asset keys are title-cased and two of them contain a space, so every field
/// carries an explicit rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BaseStats {
    #[serde(rename = "HP")]
    pub hp: u32,
    #[serde(rename = "Attack")]
    pub attack: u32,
    #[serde(rename = "Defense")]
    pub defense: u32,
    #[serde(rename = "Sp. Attack")]
    pub sp_attack: u32,
    #[serde(rename = "Sp. Defense")]
    pub sp_defense: u32,
    #[serde(rename = "Speed")]
    pub speed: u32,
}

/// Which of the six stats a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl StatKind {
    /// Display order used by the detail view.
    pub const ALL: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpAttack,
        StatKind::SpDefense,
        StatKind::Speed,
    ];

    /// Human-readable label, identical to the asset key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpAttack => "Sp. Attack",
            Self::SpDefense => "Sp. Defense",
            Self::Speed => "Speed",
        }
    }
}

impl BaseStats {
    /// Returns the value of one stat.
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpAttack => self.sp_attack,
            StatKind::SpDefense => self.sp_defense,
            StatKind::Speed => self.speed,
        }
    }

    /// Sum of all six stats. Stats are unbounded, so the sum is `u64`.
    pub fn total(&self) -> u64 {
        StatKind::ALL
            .iter()
            .map(|kind| u64::from(self.get(*kind)))
            .sum()
    }
}

/// One creature entry of the bundled catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: RecordName,
    /// Asset key is `type`.
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub base: BaseStats,
}

/// Record invariant violations detected after a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NonPositiveId(RecordId),
    BlankName(RecordId),
    NoTypes(RecordId),
    BlankType(RecordId),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(id) => write!(f, "record id must be positive, got {id}"),
            Self::BlankName(id) => write!(f, "record {id} has a blank english name"),
            Self::NoTypes(id) => write!(f, "record {id} must declare at least one type"),
            Self::BlankType(id) => write!(f, "record {id} contains a blank type tag"),
        }
    }
}

impl Error for RecordValidationError {}

impl Record {
    /// Checks record-level invariants that the asset schema alone cannot express.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.id <= 0 {
            return Err(RecordValidationError::NonPositiveId(self.id));
        }
        if self.name.english.trim().is_empty() {
            return Err(RecordValidationError::BlankName(self.id));
        }
        if self.types.is_empty() {
            return Err(RecordValidationError::NoTypes(self.id));
        }
        if self.types.iter().any(|tag| tag.trim().is_empty()) {
            return Err(RecordValidationError::BlankType(self.id));
        }
        Ok(())
    }

    /// Canonical display name.
    pub fn display_name(&self) -> &str {
        &self.name.english
    }

    /// Zero-padded three digit number, e.g. `001`.
    ///
    /// Ids of 1000 and above are printed in full rather than truncated.
    pub fn padded_number(&self) -> String {
        format!("{:03}", self.id)
    }

    /// Thumbnail file name resolved under the bundled thumbnail directory.
    pub fn thumbnail_file_name(&self) -> String {
        format!("{}.png", self.padded_number())
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseStats, Record, RecordName, RecordValidationError, StatKind};

    fn sample(id: i64) -> Record {
        Record {
            id,
            name: RecordName::english("Bulbasaur"),
            types: vec!["Grass".to_string(), "Poison".to_string()],
            base: BaseStats {
                hp: 45,
                attack: 49,
                defense: 49,
                sp_attack: 65,
                sp_defense: 65,
                speed: 45,
            },
        }
    }

    #[test]
    fn deserializes_aliased_stat_keys() {
        let json = r#"{"HP":1,"Attack":2,"Defense":3,"Sp. Attack":4,"Sp. Defense":5,"Speed":6}"#;
        let stats: BaseStats = serde_json::from_str(json).expect("stats should parse");
        assert_eq!(stats.sp_attack, 4);
        assert_eq!(stats.sp_defense, 5);
        assert_eq!(stats.total(), 21);
    }

    #[test]
    fn thumbnail_name_is_zero_padded() {
        assert_eq!(sample(1).thumbnail_file_name(), "001.png");
        assert_eq!(sample(25).padded_number(), "025");
        assert_eq!(sample(151).padded_number(), "151");
        assert_eq!(sample(1000).padded_number(), "1000");
    }

    #[test]
    fn validate_rejects_non_positive_id_and_empty_types() {
        assert_eq!(
            sample(0).validate(),
            Err(RecordValidationError::NonPositiveId(0))
        );

        let mut untyped = sample(3);
        untyped.types.clear();
        assert_eq!(untyped.validate(), Err(RecordValidationError::NoTypes(3)));
    }

    #[test]
    fn validate_rejects_blank_name_and_blank_type() {
        let mut unnamed = sample(5);
        unnamed.name = RecordName::english("   ");
        assert_eq!(unnamed.validate(), Err(RecordValidationError::BlankName(5)));

        let mut blank_tag = sample(6);
        blank_tag.types.push("\t".to_string());
        assert_eq!(blank_tag.validate(), Err(RecordValidationError::BlankType(6)));
    }

    #[test]
    fn total_does_not_overflow_on_maximal_stats() {
        let json = r#"{"HP":4294967295,"Attack":4294967295,"Defense":0,"Sp. Attack":0,"Sp. Defense":0,"Speed":1}"#;
        let stats: BaseStats = serde_json::from_str(json).expect("stats should parse");
        assert_eq!(stats.total(), 2 * u64::from(u32::MAX) + 1);
    }

    #[test]
    fn stat_labels_follow_asset_keys() {
        let labels = StatKind::ALL.map(StatKind::label);
        assert_eq!(
            labels,
            ["HP", "Attack", "Defense", "Sp. Attack", "Sp. Defense", "Speed"]
        );
        assert_eq!(sample(1).base.get(StatKind::SpDefense), 65);
    }
}
