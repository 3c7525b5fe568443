use serde::Serialize;

use super::common::StatusLevel;

/// Everything the interactive browser draws in one frame
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub header: String,
    pub source: String,
    pub body: ScreenBody,
    pub status: StatusLineViewModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenBody {
    List {
        items: Vec<ListItemViewModel>,
        cursor: usize,
    },
    Detail {
        id: u64,
        title: String,
        body: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItemViewModel {
    pub id: u64,
    pub title: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusLineViewModel {
    pub level: StatusLevel,
    pub message: String,
    pub loading: bool,
}
