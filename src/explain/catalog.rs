//! Static explanation catalog
//!
//! Initialized at compile time and never mutated; lookups need no locking.

use crate::models::ExplanationResponse;

/// One canned explanation, keyed by normalized algorithm name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub text: &'static str,
    pub code_snippet: Option<&'static str>,
    pub related_concepts: &'static [&'static str],
}

impl CatalogEntry {
    pub fn to_response(&self) -> ExplanationResponse {
        let response = ExplanationResponse::new(self.text)
            .with_related_concepts(self.related_concepts.iter().copied());

        match self.code_snippet {
            Some(code) => response.with_code_snippet(code),
            None => response,
        }
    }
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "bubble-sort",
        text: "Bubble Sort compares adjacent elements and swaps them if they're in the wrong order.",
        code_snippet: Some("if arr[i] > arr[i+1]: swap(arr[i], arr[i+1])"),
        related_concepts: &["comparison sort", "in-place sorting", "stable sort"],
    },
    CatalogEntry {
        key: "quick-sort",
        text: "Quick Sort picks a pivot and partitions the array around it.",
        code_snippet: Some("pivot = partition(arr, low, high)"),
        related_concepts: &["divide and conquer", "pivot selection", "in-place sorting"],
    },
    CatalogEntry {
        key: "merge-sort",
        text: "Merge Sort divides the array recursively and merges sorted subarrays.",
        code_snippet: None,
        related_concepts: &[],
    },
    CatalogEntry {
        key: "bfs",
        text: "BFS explores nodes level by level using a queue.",
        code_snippet: None,
        related_concepts: &[],
    },
    CatalogEntry {
        key: "dfs",
        text: "DFS explores as far as possible along each branch before backtracking.",
        code_snippet: None,
        related_concepts: &[],
    },
    CatalogEntry {
        key: "dijkstra",
        text: "Dijkstra's algorithm finds shortest paths by greedily selecting minimum distances.",
        code_snippet: None,
        related_concepts: &[],
    },
];

/// Find the entry for an already-normalized key
pub fn lookup(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.key == key)
}
