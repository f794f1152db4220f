use graphalgo_core::algos::CycleCheck;
use graphalgo_core::format::OutputFormat;
use graphalgo_core::graph::{Edge, Representation};

/// Parse an edge literal (`U:V` or `U:V:W`)
pub fn parse_edge(s: &str) -> std::result::Result<Edge, String> {
    s.parse::<Edge>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse graph representation from string
pub fn parse_representation(s: &str) -> std::result::Result<Representation, String> {
    s.parse::<Representation>().map_err(|e| e.to_string())
}

/// Parse Kruskal cycle check from string
pub fn parse_cycle_check(s: &str) -> std::result::Result<CycleCheck, String> {
    s.parse::<CycleCheck>().map_err(|e| e.to_string())
}
