use async_trait::async_trait;
use std::path::Path;
use vitrine_core::{CoreResult, QuestionClient};
use vitrine_shared::Question;

use crate::dataset::load_records;
use crate::latency::SimulatedLatency;

/// Q&A service backed by a JSON file
pub struct JsonQuestionClient {
    questions: Vec<Question>,
    latency: SimulatedLatency,
}

impl JsonQuestionClient {
    pub async fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        Ok(Self::from_records(load_records(path).await?))
    }

    pub fn from_records(questions: Vec<Question>) -> Self {
        Self {
            questions,
            latency: SimulatedLatency::default(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl QuestionClient for JsonQuestionClient {
    async fn get_by_product_id(&self, product_id: &str, limit: usize) -> CoreResult<Vec<Question>> {
        self.latency.pause().await;
        Ok(self
            .questions
            .iter()
            .filter(|q| q.product_id == product_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_limit_applies_per_product() {
        let questions = (0..15)
            .map(|i| Question {
                id: format!("Q{}", i),
                product_id: if i % 5 == 0 { "P2" } else { "P1" }.to_string(),
                user_id: "U1".to_string(),
                user_name: "leo".to_string(),
                question: "Hacen factura A?".to_string(),
                answer: None,
                question_date: Utc::now(),
                answer_date: None,
                likes: 0,
            })
            .collect();
        let client = JsonQuestionClient::from_records(questions);

        assert_eq!(client.get_by_product_id("P1", 10).await.unwrap().len(), 10);
        assert_eq!(client.get_by_product_id("P2", 10).await.unwrap().len(), 3);
        assert!(client.get_by_product_id("P3", 10).await.unwrap().is_empty());
    }
}
