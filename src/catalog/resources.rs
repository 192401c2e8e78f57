//! Resource descriptors for every collected PokeAPI table.
//!
//! Column names are the camelCase field names of the derived JSON, assigned
//! positionally to the CSV fields (the remote files' own header rows are
//! skipped).

use super::types::{Column, Resource};
use crate::transform::{RowHook, TableReduce};

/// Shared schema for the localized `*_names` tables.
const NAME_COLUMNS: &[Column] = &[
    Column::integer("id"),
    Column::integer("languageId"),
    Column::text("name"),
];

// =============================================================================
// Localized name tables
// =============================================================================

pub static GROWTH_RATE_NAMES: Resource = Resource {
    remote: "growth_rate_prose.csv",
    columns: NAME_COLUMNS,
    row_hook: None,
    table_reduce: None,
};

pub static STAT_NAMES: Resource = Resource {
    remote: "stat_names.csv",
    columns: NAME_COLUMNS,
    row_hook: None,
    table_reduce: None,
};

pub static TYPE_NAMES: Resource = Resource {
    remote: "type_names.csv",
    columns: NAME_COLUMNS,
    row_hook: None,
    table_reduce: None,
};

pub static NATURE_NAMES: Resource = Resource {
    remote: "nature_names.csv",
    columns: NAME_COLUMNS,
    row_hook: None,
    table_reduce: None,
};

pub static HABITAT_NAMES: Resource = Resource {
    remote: "pokemon_habitat_names.csv",
    columns: NAME_COLUMNS,
    row_hook: Some(RowHook::TitleCaseName),
    table_reduce: None,
};

pub static SPECIES_NAMES: Resource = Resource {
    remote: "pokemon_species_names.csv",
    columns: &[
        Column::integer("id"),
        Column::integer("languageId"),
        Column::text("name"),
        Column::text("genus"),
    ],
    row_hook: None,
    table_reduce: None,
};

pub static ITEM_NAMES: Resource = Resource {
    remote: "item_names.csv",
    columns: NAME_COLUMNS,
    row_hook: None,
    table_reduce: None,
};

// =============================================================================
// Core entities
// =============================================================================

pub static POKEMON: Resource = Resource {
    remote: "pokemon.csv",
    columns: &[
        Column::integer("id"),
        Column::text("identifier"),
        Column::integer("speciesId"),
        Column::integer("height"),
        Column::integer("weight"),
        Column::integer("baseExp"),
        Column::integer("order"),
        Column::boolean("isDefault"),
    ],
    row_hook: Some(RowHook::DisplayName),
    table_reduce: None,
};

pub static MOVES: Resource = Resource {
    remote: "moves.csv",
    columns: &[
        Column::integer("id"),
        Column::text("identifier"),
        Column::integer("generationId"),
        Column::integer("typeId"),
        Column::integer("power"),
        Column::integer("pp"),
        Column::integer("accuracy"),
        Column::integer("priority"),
        Column::integer("targetId"),
        Column::integer("damageClassId"),
        Column::integer("effectId"),
        Column::integer("effectChance"),
        Column::integer("contestTypeId"),
        Column::integer("contestEffectId"),
        Column::integer("superContestEffectId"),
    ],
    row_hook: Some(RowHook::DisplayNameWithRoman),
    table_reduce: None,
};

pub static MOVE_META: Resource = Resource {
    remote: "move_meta.csv",
    columns: &[
        Column::integer("id"),
        Column::integer("metaCategoryId"),
        Column::integer("metaAilmentId"),
        Column::integer("minHits"),
        Column::integer("maxHits"),
        Column::integer("minTurns"),
        Column::integer("maxTurns"),
        Column::integer("drain"),
        Column::integer("healing"),
        Column::integer("criticalRate"),
        Column::integer("ailmentChance"),
        Column::integer("flinchChance"),
        Column::integer("statChance"),
    ],
    row_hook: None,
    table_reduce: None,
};

pub static POKEMON_MOVES: Resource = Resource {
    remote: "pokemon_moves.csv",
    columns: &[
        Column::integer("pokemonId"),
        Column::integer("versionGroupId"),
        Column::integer("id"),
        Column::integer("moveMethodId"),
        Column::integer("requiredLevel"),
        Column::integer("order"),
    ],
    row_hook: None,
    table_reduce: Some(TableReduce::PokemonMoves),
};

pub static SPECIES: Resource = Resource {
    remote: "pokemon_species.csv",
    columns: &[
        Column::integer("id"),
        Column::text("identifier"),
        Column::integer("generationId"),
        Column::integer("evolvesFromSpeciesId"),
        Column::integer("evolutionChainId"),
        Column::integer("colorId"),
        Column::integer("shapeId"),
        Column::integer("habitatId"),
        Column::integer("genderRate"),
        Column::integer("captureRate"),
        Column::integer("baseHappiness"),
        Column::boolean("isBaby"),
        Column::integer("hatchCounter"),
        Column::boolean("hasGenderDifferences"),
        Column::integer("growthRateId"),
        Column::boolean("formsSwitchable"),
        Column::boolean("isLegendary"),
        Column::boolean("isMythical"),
        Column::integer("order"),
        Column::integer("conquestOrder"),
    ],
    row_hook: Some(RowHook::RomanGeneration),
    table_reduce: None,
};

pub static POKEMON_TYPES: Resource = Resource {
    remote: "pokemon_types.csv",
    columns: &[
        Column::integer("id"),
        Column::integer("typeId"),
        Column::integer("slot"),
    ],
    row_hook: None,
    table_reduce: Some(TableReduce::PokemonTypes),
};

pub static TYPES: Resource = Resource {
    remote: "types.csv",
    columns: &[
        Column::integer("id"),
        Column::text("identifier"),
        Column::integer("generationId"),
        Column::integer("damageClassId"),
    ],
    row_hook: Some(RowHook::RomanGeneration),
    table_reduce: None,
};

pub static TYPE_EFFICACY: Resource = Resource {
    remote: "type_efficacy.csv",
    columns: &[
        Column::integer("id"),
        Column::integer("targetTypeId"),
        Column::integer("damageFactor"),
    ],
    row_hook: None,
    table_reduce: Some(TableReduce::TypeEfficacy),
};

pub static EXPERIENCE: Resource = Resource {
    remote: "experience.csv",
    columns: &[
        Column::integer("growthRateId"),
        Column::integer("level"),
        Column::integer("experience"),
    ],
    row_hook: None,
    table_reduce: None,
};

pub static STATS: Resource = Resource {
    remote: "stats.csv",
    columns: &[
        Column::integer("id"),
        Column::integer("damageClassId"),
        Column::text("identifier"),
        Column::boolean("isBattleOnly"),
        Column::integer("gameIndex"),
    ],
    row_hook: None,
    table_reduce: None,
};

pub static POKEMON_EVOLUTION: Resource = Resource {
    remote: "pokemon_evolution.csv",
    columns: &[
        Column::integer("id"),
        Column::integer("evolvedSpeciesId"),
        Column::integer("evolutionTriggerId"),
        Column::integer("triggerItemId"),
        Column::integer("minimumLevel"),
        Column::integer("genderId"),
        Column::integer("locationId"),
        Column::integer("heldItemId"),
        Column::text("timeOfDay"),
        Column::integer("knownMoveId"),
        Column::integer("knownMoveTypeId"),
        Column::integer("minimumHapiness"),
        Column::integer("minimumBeauty"),
        Column::integer("minimumAffection"),
        Column::integer("relativePhysicalStats"),
        Column::integer("partySpeciesId"),
        Column::integer("partyTypeId"),
        Column::integer("tradeSpeciesId"),
        Column::boolean("needsOverworldRain"),
        Column::boolean("turnUpsideDown"),
    ],
    row_hook: None,
    table_reduce: None,
};

pub static POKEMON_STATS: Resource = Resource {
    remote: "pokemon_stats.csv",
    columns: &[
        Column::integer("id"),
        Column::integer("statId"),
        Column::integer("baseStat"),
        Column::integer("effort"),
    ],
    row_hook: None,
    table_reduce: None,
};

pub static ITEMS: Resource = Resource {
    remote: "items.csv",
    columns: &[
        Column::integer("id"),
        Column::text("identifier"),
        Column::integer("categoryId"),
        Column::integer("cost"),
        Column::integer("flingPower"),
        Column::integer("flingEffectId"),
    ],
    row_hook: Some(RowHook::AppendDisplayName),
    table_reduce: None,
};

pub static NATURES: Resource = Resource {
    remote: "natures.csv",
    columns: &[
        Column::integer("id"),
        Column::text("identifier"),
        Column::integer("decreasedStatId"),
        Column::integer("increasedStatId"),
        Column::integer("hatesFlavorId"),
        Column::integer("likesFlavorId"),
        Column::integer("gameIndex"),
    ],
    row_hook: Some(RowHook::AppendDisplayName),
    table_reduce: None,
};

// =============================================================================
// External and derived tables
// =============================================================================

pub static MOVESETS: Resource = Resource {
    remote: "https://gist.githubusercontent.com/zihadmahiuddin/4e43bfee56fb81e33c8702a149f20bfe/raw/af0938c93cf4712aebe1a228c85cef943b41614a/movesets.json",
    columns: &[],
    row_hook: None,
    table_reduce: None,
};

pub static MACHINES: Resource = Resource {
    remote: "machines.csv",
    columns: &[
        Column::integer("tmId"),
        Column::integer("versionGroupId"),
        Column::integer("itemId"),
        Column::integer("moveId"),
    ],
    row_hook: None,
    table_reduce: Some(TableReduce::Machines),
};

pub static POKEMON_FORMS: Resource = Resource {
    remote: "pokemon_forms.csv",
    columns: &[
        Column::integer("id"),
        Column::text("identifier"),
        Column::text("formIdentifier"),
        Column::integer("pokemonId"),
        Column::integer("introducedInVersionGroupId"),
        Column::boolean("isDefault"),
        Column::boolean("isBattleOnly"),
        Column::boolean("isMega"),
        Column::integer("formOrder"),
        Column::integer("order"),
    ],
    row_hook: None,
    table_reduce: None,
};

pub static POKEMON_FORM_NAMES: Resource = Resource {
    remote: "pokemon_form_names.csv",
    columns: &[
        Column::integer("id"),
        Column::integer("languageId"),
        Column::text("formName"),
        Column::text("pokemonName"),
    ],
    row_hook: None,
    table_reduce: None,
};

// =============================================================================
// Catalog registry
// =============================================================================

/// All resources in collection order.
pub static CATALOG: &[&Resource] = &[
    &GROWTH_RATE_NAMES,
    &STAT_NAMES,
    &TYPE_NAMES,
    &NATURE_NAMES,
    &HABITAT_NAMES,
    &SPECIES_NAMES,
    &ITEM_NAMES,
    &POKEMON,
    &MOVES,
    &MOVE_META,
    &POKEMON_MOVES,
    &SPECIES,
    &POKEMON_TYPES,
    &TYPES,
    &TYPE_EFFICACY,
    &EXPERIENCE,
    &STATS,
    &POKEMON_EVOLUTION,
    &POKEMON_STATS,
    &ITEMS,
    &NATURES,
    &MOVESETS,
    &MACHINES,
    &POKEMON_FORMS,
    &POKEMON_FORM_NAMES,
];

/// Get a resource by its local file stem (e.g. `pokemon_moves`).
pub fn find(file_name: &str) -> Option<&'static Resource> {
    CATALOG.iter().find(|r| r.file_name() == file_name).copied()
}

/// All local file stems, in collection order.
pub fn resource_names() -> Vec<&'static str> {
    CATALOG.iter().map(|r| r.file_name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SourceKind;

    #[test]
    fn test_find_by_file_name() {
        assert!(find("pokemon_moves").is_some());
        assert!(find("movesets").is_some());
        assert!(find("no_such_table").is_none());
    }

    #[test]
    fn test_file_names_are_unique() {
        let mut names = resource_names();
        names.sort();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn test_csv_resources_declare_columns() {
        for resource in CATALOG {
            match resource.kind() {
                SourceKind::Csv => assert!(
                    !resource.columns.is_empty(),
                    "{} has no columns",
                    resource.file_name()
                ),
                SourceKind::Json => assert!(resource.columns.is_empty()),
            }
        }
    }
}
