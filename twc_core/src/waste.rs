//! The closed set of waste-stream categories reported by the waste API.

/// A waste stream collected at the curb.
///
/// The variants cover every category code the waste API returns. Adding a
/// code the API starts reporting means adding a variant here; [`label`]
/// matches exhaustively, so a new variant without a label does not compile.
///
/// [`label`]: WasteType::label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteType {
    Branches,
    BulkLitter,
    BulkyGardenWaste,
    Glass,
    Green,
    GreenGrey,
    Grey,
    Kca,
    Packages,
    Paper,
    Plastic,
    Remainder,
    Textile,
    Tree,
}

/// All categories, in the order the API documents them.
pub static WASTE_TYPES: [WasteType; 14] = [
    WasteType::Branches,
    WasteType::BulkLitter,
    WasteType::BulkyGardenWaste,
    WasteType::Glass,
    WasteType::Green,
    WasteType::GreenGrey,
    WasteType::Grey,
    WasteType::Kca,
    WasteType::Packages,
    WasteType::Paper,
    WasteType::Plastic,
    WasteType::Remainder,
    WasteType::Textile,
    WasteType::Tree,
];

impl WasteType {
    /// Look up a category by its API code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BRANCHES" => Some(Self::Branches),
            "BULKLITTER" => Some(Self::BulkLitter),
            "BULKYGARDENWASTE" => Some(Self::BulkyGardenWaste),
            "GLASS" => Some(Self::Glass),
            "GREEN" => Some(Self::Green),
            "GREENGREY" => Some(Self::GreenGrey),
            "GREY" => Some(Self::Grey),
            "KCA" => Some(Self::Kca),
            "PACKAGES" => Some(Self::Packages),
            "PAPER" => Some(Self::Paper),
            "PLASTIC" => Some(Self::Plastic),
            "REMAINDER" => Some(Self::Remainder),
            "TEXTILE" => Some(Self::Textile),
            "TREE" => Some(Self::Tree),
            _ => None,
        }
    }

    /// The category code used by the waste API.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Branches => "BRANCHES",
            Self::BulkLitter => "BULKLITTER",
            Self::BulkyGardenWaste => "BULKYGARDENWASTE",
            Self::Glass => "GLASS",
            Self::Green => "GREEN",
            Self::GreenGrey => "GREENGREY",
            Self::Grey => "GREY",
            Self::Kca => "KCA",
            Self::Packages => "PACKAGES",
            Self::Paper => "PAPER",
            Self::Plastic => "PLASTIC",
            Self::Remainder => "REMAINDER",
            Self::Textile => "TEXTILE",
            Self::Tree => "TREE",
        }
    }

    /// The display label shown to subscribers, in the deployment language.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Branches => "Takken",
            Self::BulkLitter => "Grofvuil",
            Self::BulkyGardenWaste => "Tuinafval",
            Self::Glass => "Glas",
            Self::Green => "Groente-, fruit- en tuinafval/etensresten",
            Self::GreenGrey => "Duobak",
            Self::Grey => "Restafval",
            Self::Kca => "Chemisch",
            Self::Packages => "Verpakkingen",
            Self::Paper => "Papier",
            Self::Plastic => "Plastic",
            Self::Remainder => "Restwagen",
            Self::Textile => "Textiel",
            Self::Tree => "Kerstbomen",
        }
    }
}
