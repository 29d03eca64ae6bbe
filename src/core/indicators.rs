//! Fixed catalog of the technical indicators every benchmark run scores.
//!
//! The catalog order is the column order of every chart projection, so it
//! must never be derived from input data.

/// One scored technical indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    pub id: &'static str,
    pub label: &'static str,
}

/// Catalog of the ten scored indicators, in display order.
pub const CATALOG: [Indicator; 10] = [
    Indicator { id: "ma20", label: "MA20" },
    Indicator { id: "ema12", label: "EMA12" },
    Indicator { id: "ema26", label: "EMA26" },
    Indicator { id: "macd", label: "MACD" },
    Indicator { id: "rsi14", label: "RSI14" },
    Indicator { id: "boll_upper", label: "BOLL_Up" },
    Indicator { id: "boll_middle", label: "BOLL_Mid" },
    Indicator { id: "boll_lower", label: "BOLL_Low" },
    Indicator { id: "atr14", label: "ATR14" },
    Indicator { id: "volume_ma5", label: "Vol_MA5" },
];

/// Number of catalog slots in every indicator vector.
pub const COUNT: usize = CATALOG.len();

/// Position of an indicator id within the catalog, if it is a known id.
pub fn position(id: &str) -> Option<usize> {
    CATALOG.iter().position(|ind| ind.id == id)
}

/// Display labels in catalog order, for chart axes.
pub fn labels() -> Vec<&'static str> {
    CATALOG.iter().map(|ind| ind.label).collect()
}

/// Indicator ids in catalog order.
pub fn ids() -> Vec<&'static str> {
    CATALOG.iter().map(|ind| ind.id).collect()
}
