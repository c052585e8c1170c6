use serde::{Deserialize, Serialize};
use std::fmt;

/// Contest category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum Category {
    Business = 0,
    Medical = 1,
    Writing = 2,
    Gaming = 3,
}

impl Category {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Category::*;
        match self {
            Business => "business",
            Medical => "medical",
            Writing => "writing",
            Gaming => "gaming",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        use Category::*;
        match id {
            0 => Business,
            1 => Medical,
            2 => Writing,
            3 => Gaming,
            _ => {
                tracing::error!("Invalid Category id: {}", id);
                unreachable!("Invalid Category id: {}", id)
            }
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Category::*;
        match code.to_lowercase().as_str() {
            "business" => Some(Business),
            "medical" => Some(Medical),
            "writing" => Some(Writing),
            "gaming" => Some(Gaming),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
