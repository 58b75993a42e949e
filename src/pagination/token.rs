use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the rendered page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageToken {
    /// A concrete, clickable page number (1-based).
    Number(u64),
    /// Collapsed pages below the visible window.
    LeftEllipsis,
    /// Collapsed pages above the visible window.
    RightEllipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<u64> {
        match self {
            Self::Number(page) => Some(*page),
            _ => None,
        }
    }

    /// The intent a click on this token dispatches.
    pub fn intent(&self) -> NavIntent {
        match self {
            Self::Number(page) => NavIntent::GotoPage(i64::try_from(*page).unwrap_or(i64::MAX)),
            Self::LeftEllipsis => NavIntent::SkipLeftBlock,
            Self::RightEllipsis => NavIntent::SkipRightBlock,
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(page) => write!(f, "{page}"),
            Self::LeftEllipsis => f.write_str("«"),
            Self::RightEllipsis => f.write_str("»"),
        }
    }
}

/// Handler bindings exposed to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action", content = "page", rename_all = "snake_case")]
pub enum NavIntent {
    GotoPage(i64),
    Previous,
    Next,
    SkipLeftBlock,
    SkipRightBlock,
}

/// A token paired with what the view needs to draw and wire it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenView {
    pub token: PageToken,
    pub active: bool,
    pub intent: NavIntent,
}

impl TokenView {
    pub fn new(token: PageToken, current_page: u64) -> Self {
        Self {
            token,
            active: token.page() == Some(current_page),
            intent: token.intent(),
        }
    }
}
