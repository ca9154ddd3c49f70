//! The untyped boundary value one fetch attempt produces.

/// Raw candidate fields extracted from one external source.
///
/// Lives only inside the orchestrator loop: either the normalizer accepts it
/// and produces a canonical `DrawResult`, or it is discarded and the next
/// source is tried.
#[derive(Debug, Clone)]
pub struct RawDrawCandidate {
    pub game_id: String,
    /// Date string as reported by the source; `None` when the source did not
    /// expose one.
    pub draw_date: Option<String>,
    pub main_numbers: Vec<i64>,
    pub bonus_numbers: Vec<i64>,
    /// Which source produced this candidate.
    pub source: &'static str,
    /// The raw payload the fields were extracted from, preserved for
    /// debugging.
    pub raw_data: serde_json::Value,
}
