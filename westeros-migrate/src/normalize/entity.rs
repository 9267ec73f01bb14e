//! Per-kind normalization of raw vertices into canonical entities.
//!
//! Records that cannot yield a usable name are dropped with a warning rather
//! than failing the run; edges pointing at them are later skipped by the
//! migrator because their endpoint never makes it into the identifier remap.

use std::collections::BTreeMap;
use tracing::{debug, warn};
use westeros_migrate_shared::{Character, NobleHouse, RawVertex, Region, SourceId};

use super::text::{clean, split_multi_value, strip_parenthesized, strip_suffixes};

pub const NAME_FIELD: &str = "name";
pub const AKA_FIELD: &str = "Aka";
pub const WORDS_FIELD: &str = "Words";
pub const MOTTO_FIELD: &str = "Motto";

pub const ALIAS_SUFFIXES: [&str; 3] = ["(formerly)", "(given name)", "(player-determined)"];
pub const MOTTO_SUFFIXES: [&str; 2] = ["(official)", "(common saying)"];
pub const REGION_SUFFIXES: [&str; 3] = ["(region)", "(castle)", "(island)"];

pub const HOUSE_PREFIX: &str = "House ";

fn raw_name<'a>(raw: &'a RawVertex, kind: &str) -> Option<&'a str> {
    let name = raw.field(NAME_FIELD);
    if name.is_none() {
        warn!(source_id = %raw.source_id, kind, "Dropping record without a name");
    }
    name
}

fn non_empty(name: String, raw: &RawVertex, kind: &str) -> Option<String> {
    if name.is_empty() {
        warn!(source_id = %raw.source_id, kind, "Dropping record whose name cleans to nothing");
        return None;
    }
    Some(name)
}

/// Normalize one character record.
///
/// The `Aka` field, when present, becomes the alias list; the name loses its
/// parenthesized annotation.
pub fn normalize_character(raw: &RawVertex) -> Option<Character> {
    let name = clean(&strip_parenthesized(raw_name(raw, "Character")?)).to_string();
    let name = non_empty(name, raw, "Character")?;

    let alias = match raw.field(AKA_FIELD) {
        Some(aka) => strip_suffixes(split_multi_value(aka).into_iter().map(clean), &ALIAS_SUFFIXES),
        None => Vec::new(),
    };

    Some(Character {
        source_id: raw.source_id.clone(),
        name,
        alias,
    })
}

/// Normalize one noble house record.
///
/// `"House Stark"` becomes name `"Stark"` with the full name kept as alias;
/// a bare `"Stark"` is kept as is and gets `"House Stark"` as alias.
pub fn normalize_house(raw: &RawVertex) -> Option<NobleHouse> {
    let full_name = raw_name(raw, "NobleHouse")?;

    let (name, alias) = match full_name.strip_prefix(HOUSE_PREFIX) {
        Some(rest) => (clean(rest).to_string(), vec![full_name.to_string()]),
        None => (full_name.to_string(), vec![format!("{}{}", HOUSE_PREFIX, full_name)]),
    };
    let name = non_empty(name, raw, "NobleHouse")?;

    // Either spelling may carry the motto; Words wins when both do.
    let raw_motto = raw.field(WORDS_FIELD).or_else(|| raw.field(MOTTO_FIELD));
    let motto = match raw_motto {
        Some(motto) if !motto.is_empty() => {
            let pieces = split_multi_value(motto).into_iter().map(clean);
            strip_suffixes(pieces, &MOTTO_SUFFIXES)
                .iter()
                .map(|piece| clean(piece).to_string())
                .collect()
        }
        _ => Vec::new(),
    };

    Some(NobleHouse {
        source_id: raw.source_id.clone(),
        name,
        alias,
        motto,
    })
}

/// Normalize one region or settlement record.
pub fn normalize_region(raw: &RawVertex) -> Option<Region> {
    let stripped = strip_suffixes([raw_name(raw, "Region")?], &REGION_SUFFIXES);
    let name = stripped
        .first()
        .map(|name| clean(name).to_string())
        .unwrap_or_default();
    let name = non_empty(name, raw, "Region")?;

    Some(Region::new(raw.source_id.clone(), name))
}

fn normalize_all<T>(
    raw: &BTreeMap<SourceId, RawVertex>,
    kind: &str,
    normalize: impl Fn(&RawVertex) -> Option<T>,
) -> BTreeMap<SourceId, T> {
    let normalized: BTreeMap<SourceId, T> = raw
        .iter()
        .filter_map(|(id, record)| normalize(record).map(|entity| (id.clone(), entity)))
        .collect();

    debug!(
        kind,
        read = raw.len(),
        kept = normalized.len(),
        "Normalized records"
    );
    normalized
}

pub fn normalize_characters(raw: &BTreeMap<SourceId, RawVertex>) -> BTreeMap<SourceId, Character> {
    normalize_all(raw, "Character", normalize_character)
}

pub fn normalize_houses(raw: &BTreeMap<SourceId, RawVertex>) -> BTreeMap<SourceId, NobleHouse> {
    normalize_all(raw, "NobleHouse", normalize_house)
}

pub fn normalize_regions(raw: &BTreeMap<SourceId, RawVertex>) -> BTreeMap<SourceId, Region> {
    normalize_all(raw, "Region", normalize_region)
}
