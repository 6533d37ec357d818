use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{Drill, Equipment, Racket, StringRecommendation},
};

const RACKETS_JSON: &str = include_str!("../../data/rackets.json");
const STRINGS_JSON: &str = include_str!("../../data/strings.json");
const DRILLS_JSON: &str = include_str!("../../data/drills.json");
const EQUIPMENT_JSON: &str = include_str!("../../data/equipment.json");

/// Read-only reference data: rackets, strings, drills and equipment
///
/// Loaded once at startup and shared behind an `Arc`. Every list is
/// non-empty and ids are unique, so lookups by id are unambiguous.
#[derive(Debug, Clone)]
pub struct Catalog {
    rackets: Vec<Racket>,
    strings: Vec<StringRecommendation>,
    drills: Vec<Drill>,
    equipment: Vec<Equipment>,
    racket_index: HashMap<String, usize>,
    drill_index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, validating non-emptiness and id uniqueness
    pub fn new(
        rackets: Vec<Racket>,
        strings: Vec<StringRecommendation>,
        drills: Vec<Drill>,
        equipment: Vec<Equipment>,
    ) -> AppResult<Self> {
        ensure_non_empty("rackets", rackets.len())?;
        ensure_non_empty("strings", strings.len())?;
        ensure_non_empty("drills", drills.len())?;

        let racket_index = index_by("racket", rackets.iter().map(|r| r.id.as_str()))?;
        let drill_index = index_by("drill", drills.iter().map(|d| d.id.as_str()))?;
        index_by("string", strings.iter().map(|s| s.name.as_str()))?;
        index_by("equipment", equipment.iter().map(|e| e.id.as_str()))?;

        tracing::info!(
            rackets = rackets.len(),
            strings = strings.len(),
            drills = drills.len(),
            equipment = equipment.len(),
            "Catalog loaded"
        );

        Ok(Self {
            rackets,
            strings,
            drills,
            equipment,
            racket_index,
            drill_index,
        })
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> AppResult<Self> {
        Self::new(
            parse("rackets.json", RACKETS_JSON)?,
            parse("strings.json", STRINGS_JSON)?,
            parse("drills.json", DRILLS_JSON)?,
            parse("equipment.json", EQUIPMENT_JSON)?,
        )
    }

    /// Loads `rackets.json`, `strings.json`, `drills.json` and `equipment.json` from `dir`
    pub fn from_dir(dir: &Path) -> AppResult<Self> {
        tracing::info!(dir = %dir.display(), "Loading catalog from directory");
        Self::new(
            read(dir, "rackets.json")?,
            read(dir, "strings.json")?,
            read(dir, "drills.json")?,
            read(dir, "equipment.json")?,
        )
    }

    pub fn rackets(&self) -> &[Racket] {
        &self.rackets
    }

    pub fn strings(&self) -> &[StringRecommendation] {
        &self.strings
    }

    pub fn drills(&self) -> &[Drill] {
        &self.drills
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn racket(&self, id: &str) -> Option<&Racket> {
        self.racket_index.get(id).map(|&i| &self.rackets[i])
    }

    pub fn drill(&self, id: &str) -> Option<&Drill> {
        self.drill_index.get(id).map(|&i| &self.drills[i])
    }
}

fn ensure_non_empty(kind: &str, len: usize) -> AppResult<()> {
    if len == 0 {
        return Err(AppError::Catalog(format!("{} list is empty", kind)));
    }
    Ok(())
}

fn index_by<'a>(
    kind: &str,
    keys: impl Iterator<Item = &'a str>,
) -> AppResult<HashMap<String, usize>> {
    let mut index = HashMap::new();
    for (position, key) in keys.enumerate() {
        if index.insert(key.to_string(), position).is_some() {
            return Err(AppError::Catalog(format!("duplicate {} id: {}", kind, key)));
        }
    }
    Ok(index)
}

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> AppResult<Vec<T>> {
    serde_json::from_str(json).map_err(|e| AppError::Catalog(format!("{}: {}", name, e)))
}

fn read<T: DeserializeOwned>(dir: &Path, name: &str) -> AppResult<Vec<T>> {
    let path = dir.join(name);
    let json = std::fs::read_to_string(&path)
        .map_err(|e| AppError::Catalog(format!("{}: {}", path.display(), e)))?;
    parse(name, &json)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{
        Difficulty, Drill, DrillCategory, Equipment, EquipmentCategory, Racket, RacketLevel,
        StringRecommendation, StringType,
    };

    pub fn racket(id: &str, level: RacketLevel, price: f64, stiffness: u32) -> Racket {
        Racket {
            id: id.to_string(),
            name: format!("Racket {}", id),
            brand: "Test".to_string(),
            weight: "10.6 oz (300g)".to_string(),
            head_size: "100 sq in".to_string(),
            stiffness,
            level,
            price,
            description: String::new(),
            pros: vec![],
            cons: vec![],
            affiliate_link: String::new(),
            image_url: String::new(),
        }
    }

    pub fn string(name: &str, string_type: StringType, price: f64) -> StringRecommendation {
        StringRecommendation {
            string_type,
            name: name.to_string(),
            description: String::new(),
            tension: "50-60 lbs".to_string(),
            price,
            affiliate_link: String::new(),
            best_for: vec![],
        }
    }

    pub fn drill(
        id: &str,
        category: DrillCategory,
        difficulty: Difficulty,
        duration: u32,
    ) -> Drill {
        Drill {
            id: id.to_string(),
            name: format!("Drill {}", id),
            category,
            difficulty,
            duration,
            description: String::new(),
            instructions: vec![],
            focus: vec![],
            equipment: vec![],
            court_setup: String::new(),
            variations: vec![],
            video_url: None,
        }
    }

    pub fn equipment(id: &str, category: EquipmentCategory) -> Equipment {
        Equipment {
            id: id.to_string(),
            name: format!("Item {}", id),
            category,
            description: String::new(),
            features: vec![],
            affiliate_link: String::new(),
            image_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::models::{Difficulty, DrillCategory, RacketLevel, StringType};

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.rackets().len() >= 3);
        assert!(catalog.strings().len() >= 3);
        assert!(!catalog.drills().is_empty());
        assert!(!catalog.equipment().is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let drill = catalog.drill("split-step").unwrap();
        assert_eq!(drill.category, DrillCategory::Footwork);
        assert!(catalog.racket("babolat-pure-drive").is_some());
        assert!(catalog.racket("does-not-exist").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(
            vec![
                racket("dup", RacketLevel::Beginner, 80.0, 60),
                racket("dup", RacketLevel::Advanced, 250.0, 62),
            ],
            vec![string("Gut", StringType::SyntheticGut, 8.0)],
            vec![drill("d1", DrillCategory::Serve, Difficulty::Beginner, 15)],
            vec![],
        );
        assert!(matches!(result, Err(AppError::Catalog(msg)) if msg.contains("dup")));
    }

    #[test]
    fn test_empty_lists_rejected() {
        let result = Catalog::new(
            vec![],
            vec![string("Gut", StringType::SyntheticGut, 8.0)],
            vec![drill("d1", DrillCategory::Serve, Difficulty::Beginner, 15)],
            vec![],
        );
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_from_dir_missing_file() {
        let result = Catalog::from_dir(Path::new("/nonexistent/catalog"));
        assert!(matches!(result, Err(AppError::Catalog(msg)) if msg.contains("rackets.json")));
    }
}
