//! Column names of the generated records.
//!
//! Every record written into a pre-split table carries these attributes under
//! the single column family.

use std::fmt;

/// Closed set of column qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableColumnNames {
    OrgId,
    ToolEventId,
    EventId,
    VehicleId,
    Speed,
    Latitude,
    Longitude,
    Location,
    Timestamp,
}

impl TableColumnNames {
    /// All columns, in declaration order.
    pub const ALL: [TableColumnNames; 9] = [
        TableColumnNames::OrgId,
        TableColumnNames::ToolEventId,
        TableColumnNames::EventId,
        TableColumnNames::VehicleId,
        TableColumnNames::Speed,
        TableColumnNames::Latitude,
        TableColumnNames::Longitude,
        TableColumnNames::Location,
        TableColumnNames::Timestamp,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TableColumnNames::OrgId => "orgId",
            TableColumnNames::ToolEventId => "toolEventId",
            TableColumnNames::EventId => "eventId",
            TableColumnNames::VehicleId => "vehicleId",
            TableColumnNames::Speed => "speed",
            TableColumnNames::Latitude => "latitude",
            TableColumnNames::Longitude => "longitude",
            TableColumnNames::Location => "location",
            TableColumnNames::Timestamp => "timestamp",
        }
    }

    /// Qualifier bytes as stored.
    pub const fn column_name(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    pub fn from_column_name(name: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.column_name() == name)
    }
}

impl fmt::Display for TableColumnNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
