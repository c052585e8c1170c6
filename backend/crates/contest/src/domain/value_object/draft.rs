//! Contest Draft Value Object
//!
//! Validated input for creating or editing a contest. Field rules live
//! here so both the create and update paths share them.

use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};

use crate::domain::value_object::{category::Category, money::Money};

const DESCRIPTION_MIN_CHARS: usize = 50;
const INSTRUCTIONS_MIN_CHARS: usize = 20;

/// Validated contest fields
#[derive(Debug, Clone)]
pub struct ContestDraft {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub instructions: String,
    pub image_url: String,
    pub prize_money: Money,
    pub entry_fee: Money,
    pub deadline: DateTime<Utc>,
}

impl ContestDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        category: Category,
        description: String,
        instructions: String,
        image_url: String,
        prize_money: i64,
        entry_fee: i64,
        deadline: DateTime<Utc>,
    ) -> AppResult<Self> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request("Title cannot be empty"));
        }

        if description.chars().count() < DESCRIPTION_MIN_CHARS {
            return Err(AppError::bad_request(format!(
                "Description must be at least {} characters",
                DESCRIPTION_MIN_CHARS
            )));
        }

        if instructions.chars().count() < INSTRUCTIONS_MIN_CHARS {
            return Err(AppError::bad_request(format!(
                "Task instructions must be at least {} characters",
                INSTRUCTIONS_MIN_CHARS
            )));
        }

        let prize_money =
            Money::new(prize_money).map_err(|_| AppError::bad_request("Prize money must be at least 1"))?;
        let entry_fee =
            Money::new(entry_fee).map_err(|_| AppError::bad_request("Entry fee must be at least 1"))?;

        Ok(Self {
            title,
            category,
            description,
            instructions,
            image_url,
            prize_money,
            entry_fee,
            deadline,
        })
    }
}
