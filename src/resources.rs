//! Life-support resource constants.
//!
//! Rates are per Kerbal per Kerbin day, taken from the TacLifeSupport
//! defaults (SettingsParams.cs in KSP-RO/TacLifeSupport).

use clap::ValueEnum;

/// Length of a Kerbin day in hours, the reference for all daily rates.
pub const KERBIN_DAY_LENGTH: f64 = 6.0;

/// Resources tracked by TAC Life Support, in config emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "PascalCase")]
pub enum Resource {
    Food,
    Water,
    Oxygen,
    CarbonDioxide,
    WasteWater,
    Waste,
}

impl Resource {
    /// Every resource, in table-definition order.
    pub const ALL: [Resource; 6] = [
        Resource::Food,
        Resource::Water,
        Resource::Oxygen,
        Resource::CarbonDioxide,
        Resource::WasteWater,
        Resource::Waste,
    ];

    /// Units consumed (or, for byproducts, produced) per Kerbal per Kerbin day.
    pub fn daily_consumption(self) -> f64 {
        match self {
            Resource::Food => 0.365_625,
            Resource::Water => 0.241_662_5,
            Resource::Oxygen => 37.012_41,
            Resource::CarbonDioxide => 31.979_78,
            Resource::WasteWater => 0.307_75,
            Resource::Waste => 0.033_25,
        }
    }

    /// Consumables start full; byproduct accumulators start empty.
    pub fn filled_at_start(self) -> bool {
        matches!(self, Resource::Food | Resource::Water | Resource::Oxygen)
    }

    /// Name as it appears in a `%RESOURCE[...]` node.
    pub fn name(self) -> &'static str {
        match self {
            Resource::Food => "Food",
            Resource::Water => "Water",
            Resource::Oxygen => "Oxygen",
            Resource::CarbonDioxide => "CarbonDioxide",
            Resource::WasteWater => "WasteWater",
            Resource::Waste => "Waste",
        }
    }
}
