//! Capture resolution: which table cards a played card may take.

use crate::domain::cards_types::Card;

/// One legal capture selection, as positions into the table's current
/// ordered view. An option is a snapshot: any table mutation invalidates it
/// and the options must be recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOption {
    /// Table positions, strictly increasing.
    pub indices: Vec<usize>,
}

impl CaptureOption {
    /// Materialize the selected cards against the table this option was
    /// computed from.
    pub fn cards(&self, table: &[Card]) -> Vec<Card> {
        self.indices.iter().map(|&idx| table[idx]).collect()
    }
}

/// Compute all legal capture selections for a played value against the table.
///
/// Exact matches take precedence: if any single table card equals the played
/// value, those singletons are the complete and only legal captures, and
/// multi-card sums are never offered alongside them. Otherwise every
/// combination of table cards whose values sum exactly to the played value
/// is legal. Options come back in lexicographic order of table position.
///
/// Suit plays no part in matching. An empty result means the card must be
/// laid on the table.
pub fn possible_captures(played_value: u8, table: &[Card]) -> Vec<CaptureOption> {
    if table.is_empty() {
        return Vec::new();
    }

    let exact: Vec<CaptureOption> = table
        .iter()
        .enumerate()
        .filter(|(_, card)| card.value() == played_value)
        .map(|(idx, _)| CaptureOption { indices: vec![idx] })
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let mut results = Vec::new();
    let mut current = Vec::new();
    sum_search(table, 0, played_value, 0, &mut current, &mut results);
    results
}

/// Depth-first search over index-ordered subsets. Extending only forward
/// from the last chosen index rules out duplicate subsets and permutations.
/// All card values are positive, so a branch is finished the moment its sum
/// reaches the target and dead the moment it exceeds it.
fn sum_search(
    table: &[Card],
    start: usize,
    target: u8,
    sum: u8,
    current: &mut Vec<usize>,
    results: &mut Vec<CaptureOption>,
) {
    if sum == target {
        results.push(CaptureOption {
            indices: current.clone(),
        });
        return;
    }
    if sum > target {
        return;
    }
    for idx in start..table.len() {
        current.push(idx);
        sum_search(
            table,
            idx + 1,
            target,
            sum + table[idx].value(),
            current,
            results,
        );
        current.pop();
    }
}
