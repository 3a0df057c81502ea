// UI models module
// View selection shared by the composer, navigation and settings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewType {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewType {
    pub const ALL: [ViewType; 3] = [ViewType::Day, ViewType::Week, ViewType::Month];

    pub fn label(self) -> &'static str {
        match self {
            ViewType::Day => "Day",
            ViewType::Week => "Week",
            ViewType::Month => "Month",
        }
    }
}
