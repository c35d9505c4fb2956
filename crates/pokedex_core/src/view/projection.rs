//! List and detail projections of catalog records.

use crate::config::thumbnail_asset_path;
use crate::model::record::{Record, RecordId, StatKind, STAT_DISPLAY_MAX};

/// One row of the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: RecordId,
    /// `#001` style label.
    pub number_label: String,
    pub name: String,
    pub types: Vec<String>,
    /// Thumbnail path relative to the asset root.
    pub thumbnail: String,
}

impl ListItem {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id,
            number_label: number_label(record),
            name: record.display_name().to_string(),
            types: record.types.clone(),
            thumbnail: thumbnail_asset_path(record),
        }
    }
}

/// One horizontal stat bar on the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub label: String,
    pub value: u32,
    pub max: u32,
    /// `value / max`, clamped to `[0.0, 1.0]`.
    pub ratio: f32,
}

impl StatBar {
    pub fn new(label: impl Into<String>, value: u32, max: u32) -> Self {
        let ratio = if max == 0 {
            0.0
        } else {
            (value as f32 / max as f32).clamp(0.0, 1.0)
        };
        Self {
            label: label.into(),
            value,
            max,
            ratio,
        }
    }
}

/// Everything the detail screen renders for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: RecordId,
    /// `#001 Bulbasaur` style heading.
    pub title: String,
    pub name: String,
    pub types: Vec<String>,
    pub thumbnail: String,
    pub stat_bars: Vec<StatBar>,
    pub note: String,
    /// Placeholder label of the note field.
    pub note_label: String,
}

impl DetailView {
    /// Builds the detail projection with the record's current note.
    pub fn from_record(record: &Record, note: impl Into<String>) -> Self {
        let stat_bars = StatKind::ALL
            .iter()
            .map(|kind| StatBar::new(kind.label(), record.base.get(*kind), STAT_DISPLAY_MAX))
            .collect();

        Self {
            id: record.id,
            title: format!("{} {}", number_label(record), record.display_name()),
            name: record.display_name().to_string(),
            types: record.types.clone(),
            thumbnail: thumbnail_asset_path(record),
            stat_bars,
            note: note.into(),
            note_label: format!("Add notes about {}", record.display_name()),
        }
    }
}

fn number_label(record: &Record) -> String {
    format!("#{}", record.padded_number())
}

#[cfg(test)]
mod tests {
    use super::{DetailView, ListItem, StatBar};
    use crate::model::record::{BaseStats, Record, RecordName};

    fn charmander() -> Record {
        Record {
            id: 4,
            name: RecordName::english("Charmander"),
            types: vec!["Fire".to_string()],
            base: BaseStats {
                hp: 39,
                attack: 52,
                defense: 43,
                sp_attack: 60,
                sp_defense: 50,
                speed: 65,
            },
        }
    }

    #[test]
    fn list_item_uses_padded_number_and_thumbnail() {
        let item = ListItem::from_record(&charmander());
        assert_eq!(item.number_label, "#004");
        assert_eq!(item.thumbnail, "pokemon.json-master/thumbnails/004.png");
        assert_eq!(item.types, vec!["Fire".to_string()]);
    }

    #[test]
    fn detail_view_orders_stat_bars_and_carries_note() {
        let view = DetailView::from_record(&charmander(), "likes lava");
        assert_eq!(view.title, "#004 Charmander");
        assert_eq!(view.note, "likes lava");
        assert_eq!(view.note_label, "Add notes about Charmander");

        let labels: Vec<&str> = view.stat_bars.iter().map(|bar| bar.label.as_str()).collect();
        assert_eq!(
            labels,
            ["HP", "Attack", "Defense", "Sp. Attack", "Sp. Defense", "Speed"]
        );
        assert_eq!(view.stat_bars[5].value, 65);
        assert_eq!(view.stat_bars[5].max, 255);
    }

    #[test]
    fn stat_bar_ratio_is_clamped() {
        assert_eq!(StatBar::new("HP", 300, 255).ratio, 1.0);
        assert_eq!(StatBar::new("HP", 0, 255).ratio, 0.0);
        assert_eq!(StatBar::new("HP", 10, 0).ratio, 0.0);
        assert!((StatBar::new("HP", 51, 255).ratio - 0.2).abs() < 1e-6);
    }
}
