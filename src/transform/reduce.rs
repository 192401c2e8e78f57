//! Whole-table reducers for the denormalized resources.
//!
//! Rows round-trip through typed structs so the grouping logic works on real
//! integers instead of JSON lookups, and so output field order is fixed by
//! struct declaration order.

use anyhow::{bail, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use crate::parser::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableReduce {
    /// One record per Pokémon holding its deduplicated move list.
    PokemonMoves,
    /// One record per Pokémon holding its type ids in slot order.
    PokemonTypes,
    /// One record per attacking type holding its damage factors.
    TypeEfficacy,
    /// One record per TM, keeping the highest version group.
    Machines,
}

impl TableReduce {
    pub fn apply(&self, rows: Vec<Row>) -> Result<Vec<Row>> {
        match self {
            TableReduce::PokemonMoves => reduce_pokemon_moves(rows),
            TableReduce::PokemonTypes => reduce_pokemon_types(rows),
            TableReduce::TypeEfficacy => reduce_type_efficacy(rows),
            TableReduce::Machines => reduce_machines(rows),
        }
    }
}

fn rows_into<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)).map_err(Into::into))
        .collect()
}

fn rows_from<T: Serialize>(items: Vec<T>) -> Result<Vec<Row>> {
    items
        .into_iter()
        .map(|item| match serde_json::to_value(item)? {
            Value::Object(row) => Ok(row),
            other => bail!("Reducer produced a non-object record: {}", other),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Moves per Pokémon
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PokemonMoveRow {
    pokemon_id: i64,
    version_group_id: i64,
    id: i64,
    move_method_id: i64,
    required_level: i64,
    order: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveEntry {
    version_group_id: i64,
    id: i64,
    move_method_id: i64,
    required_level: i64,
    order: i64,
}

#[derive(Debug, Serialize)]
struct MoveList {
    id: i64,
    moves: Vec<MoveEntry>,
}

/// Group by Pokémon, then keep exactly one entry per (moveId, moveMethodId)
/// pair: the one with the highest versionGroupId, last seen winning ties.
/// Output records are sorted by id and each move list ascending by moveId.
fn reduce_pokemon_moves(rows: Vec<Row>) -> Result<Vec<Row>> {
    let rows: Vec<PokemonMoveRow> = rows_into(rows)?;

    let mut by_pokemon: BTreeMap<i64, BTreeMap<(i64, i64), MoveEntry>> = BTreeMap::new();
    for row in rows {
        let entry = MoveEntry {
            version_group_id: row.version_group_id,
            id: row.id,
            move_method_id: row.move_method_id,
            required_level: row.required_level,
            order: row.order,
        };

        match by_pokemon
            .entry(row.pokemon_id)
            .or_default()
            .entry((row.id, row.move_method_id))
        {
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            Entry::Occupied(mut slot) => {
                if entry.version_group_id >= slot.get().version_group_id {
                    slot.insert(entry);
                }
            }
        }
    }

    let lists = by_pokemon
        .into_iter()
        .map(|(id, moves)| MoveList {
            id,
            moves: moves.into_values().collect(),
        })
        .collect();

    rows_from(lists)
}

// ---------------------------------------------------------------------------
// Types per Pokémon
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PokemonTypeRow {
    id: i64,
    type_id: i64,
    #[allow(dead_code)]
    slot: i64,
}

#[derive(Debug, Serialize)]
struct TypeList {
    id: i64,
    types: Vec<i64>,
}

/// Slot order is the row order in the source file; the slot field itself is
/// dropped.
fn reduce_pokemon_types(rows: Vec<Row>) -> Result<Vec<Row>> {
    let rows: Vec<PokemonTypeRow> = rows_into(rows)?;

    let mut lists: Vec<TypeList> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        match index.get(&row.id) {
            Some(&i) => lists[i].types.push(row.type_id),
            None => {
                index.insert(row.id, lists.len());
                lists.push(TypeList {
                    id: row.id,
                    types: vec![row.type_id],
                });
            }
        }
    }

    rows_from(lists)
}

// ---------------------------------------------------------------------------
// Type efficacy
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeEfficacyRow {
    id: i64,
    target_type_id: i64,
    damage_factor: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Efficacy {
    target_type_id: i64,
    damage_factor: i64,
}

#[derive(Debug, Serialize)]
struct EfficacyList {
    id: i64,
    efficacies: Vec<Efficacy>,
}

fn reduce_type_efficacy(rows: Vec<Row>) -> Result<Vec<Row>> {
    let rows: Vec<TypeEfficacyRow> = rows_into(rows)?;

    let mut lists: Vec<EfficacyList> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let efficacy = Efficacy {
            target_type_id: row.target_type_id,
            damage_factor: row.damage_factor,
        };
        match index.get(&row.id) {
            Some(&i) => lists[i].efficacies.push(efficacy),
            None => {
                index.insert(row.id, lists.len());
                lists.push(EfficacyList {
                    id: row.id,
                    efficacies: vec![efficacy],
                });
            }
        }
    }

    rows_from(lists)
}

// ---------------------------------------------------------------------------
// Machines
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Machine {
    tm_id: i64,
    version_group_id: i64,
    item_id: i64,
    move_id: i64,
}

/// Single-pass dedup by tmId; a row replaces the kept one only when its
/// versionGroupId is strictly higher.
fn reduce_machines(rows: Vec<Row>) -> Result<Vec<Row>> {
    let rows: Vec<Machine> = rows_into(rows)?;

    let mut kept: Vec<Machine> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for machine in rows {
        match index.get(&machine.tm_id) {
            Some(&i) => {
                if machine.version_group_id > kept[i].version_group_id {
                    kept[i] = machine;
                }
            }
            None => {
                index.insert(machine.tm_id, kept.len());
                kept.push(machine);
            }
        }
    }

    rows_from(kept)
}
