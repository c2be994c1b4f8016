use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub user_name: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub question_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: u32,
}
