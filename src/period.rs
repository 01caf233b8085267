use std::fmt;

/// Fiscal quarter (QTR1-QTR4).
///
/// EDGAR full-index directories are grouped by quarter (`QTR1` .. `QTR4`)
/// inside each year directory. The derived ordering follows the calendar, so
/// a descending sort visits QTR4 before QTR1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Quarter {
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    Q4 = 4,
}

impl Quarter {
    /// Parses a quarter directory label ("QTR1" .. "QTR4").
    ///
    /// Listing pages carry other links too, so an unrecognized label is
    /// simply `None` rather than an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "QTR1" => Some(Quarter::Q1),
            "QTR2" => Some(Quarter::Q2),
            "QTR3" => Some(Quarter::Q3),
            "QTR4" => Some(Quarter::Q4),
            _ => None,
        }
    }

    /// Returns the directory label EDGAR uses for this quarter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quarter::Q1 => "QTR1",
            Quarter::Q2 => "QTR2",
            Quarter::Q3 => "QTR3",
            Quarter::Q4 => "QTR4",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reporting period (year + quarter) identifying a full-index subdirectory.
///
/// Periods are resolved transiently at the start of a discovery run and used
/// to address the quarter directory and its company index file; they are not
/// persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchivePeriod {
    year: i32,
    quarter: Quarter,
}

impl ArchivePeriod {
    pub fn new(year: i32, quarter: Quarter) -> Self {
        Self { year, quarter }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn quarter(&self) -> Quarter {
        self.quarter
    }

    /// Returns the archive subdirectory path for this period, e.g. "2024/QTR4".
    pub fn as_path(&self) -> String {
        format!("{}/{}", self.year, self.quarter.as_str())
    }
}

impl fmt::Display for ArchivePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.quarter)
    }
}
