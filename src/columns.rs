//! Column-oriented views of the study tables.
//!
//! Rows never exist as records; each table is a set of parallel arrays and
//! the row index is the only join key.

/// Raw `DX` cell before status extraction. The source encodes missing
/// diagnoses numerically, so a cell is either absent or history text such
/// as "NL to MCI".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawStatus {
    Missing,
    Text(String),
}

impl RawStatus {
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            Self::Missing
        } else {
            Self::Text(trimmed.to_string())
        }
    }
}

/// Columns extracted from one source table, in file row order.
#[derive(Debug, Clone)]
pub struct TableColumns {
    pub rid: Vec<i64>,
    pub adas13: Vec<f64>,
    pub ventricles: Vec<f64>,
    pub icv: Vec<f64>,
    pub dx: Vec<RawStatus>,
    pub examdate: Vec<String>,
}

impl TableColumns {
    pub fn len(&self) -> usize {
        self.rid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rid.is_empty()
    }
}

/// Both source tables after loading: the historical D1_D2 rows (already
/// filtered to `D2 == 0`) and the forecast-target D3 rows.
#[derive(Debug, Clone)]
pub struct RawTables {
    pub d1d2: TableColumns,
    pub d3: TableColumns,
}

/// Unified parallel arrays over the concatenation of both tables,
/// D1_D2 block first. Built once by normalization, never mutated after.
#[derive(Debug, Clone)]
pub struct ColumnSet {
    pub rid: Vec<i64>,
    pub adas13: Vec<f64>,
    pub ventricles: Vec<f64>,
    pub icv: Vec<f64>,
    pub ventricles_icv: Vec<f64>,
    pub status: Vec<String>,
    pub exam_month: Vec<f64>,
    pub in_target: Vec<bool>,
}

impl ColumnSet {
    pub fn len(&self) -> usize {
        self.rid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rid.is_empty()
    }
}
