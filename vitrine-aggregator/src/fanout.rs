use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::Instant;
use tracing::{debug, warn, Instrument, Span};
use vitrine_catalog::Product;
use vitrine_core::{CoreError, CoreResult, ProductRepository, QuestionClient, ReviewClient, SellerClient};
use vitrine_shared::{Question, Review, ReviewSummary, Seller};

use crate::fallback::{Collaborator, FallbackTable};

/// Reviews together with their summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewBundle {
    pub reviews: Vec<Review>,
    pub summary: ReviewSummary,
}

/// Joined enrichment results, every field filled (fetched or fallback)
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentBundle {
    pub seller: Seller,
    pub reviews: ReviewBundle,
    pub questions: Vec<Question>,
    pub related: Vec<Product>,
}

/// Per-request inputs every enrichment reads
#[derive(Debug, Clone)]
pub struct EnrichmentRequest {
    pub product_id: String,
    pub seller_id: String,
    pub category: String,
}

impl EnrichmentRequest {
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            seller_id: product.seller_key().to_string(),
            category: product.category.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregationSettings {
    pub question_limit: usize,
    pub related_limit: usize,
    /// Budget shared by all enrichment calls of one request; `None` waits indefinitely
    pub enrichment_timeout: Option<Duration>,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            question_limit: 10,
            related_limit: 4,
            enrichment_timeout: Some(Duration::from_millis(500)),
        }
    }
}

/// Dispatches the four enrichment fetches as independent tasks
#[derive(Clone)]
pub struct FanOut {
    products: Arc<dyn ProductRepository>,
    sellers: Arc<dyn SellerClient>,
    reviews: Arc<dyn ReviewClient>,
    questions: Arc<dyn QuestionClient>,
    fallbacks: Arc<FallbackTable>,
    settings: AggregationSettings,
}

impl FanOut {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        sellers: Arc<dyn SellerClient>,
        reviews: Arc<dyn ReviewClient>,
        questions: Arc<dyn QuestionClient>,
    ) -> Self {
        Self {
            products,
            sellers,
            reviews,
            questions,
            fallbacks: Arc::new(FallbackTable::default()),
            settings: AggregationSettings::default(),
        }
    }

    pub fn with_fallbacks(mut self, fallbacks: FallbackTable) -> Self {
        self.fallbacks = Arc::new(fallbacks);
        self
    }

    pub fn with_settings(mut self, settings: AggregationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Spawns one task per enrichment. Each task owns its result; nothing is
    /// shared until [`PendingEnrichments::join`].
    pub fn dispatch(&self, request: &EnrichmentRequest) -> PendingEnrichments {
        let deadline = self.settings.enrichment_timeout.map(|t| Instant::now() + t);
        let span = Span::current();

        let seller = {
            let client = self.sellers.clone();
            let seller_id = request.seller_id.clone();
            tokio::spawn(
                call(Collaborator::Seller, deadline, async move {
                    client.get_by_id(&seller_id).await
                })
                .instrument(span.clone()),
            )
        };

        let reviews = {
            let client = self.reviews.clone();
            let product_id = request.product_id.clone();
            tokio::spawn(
                call(Collaborator::Reviews, deadline, async move {
                    let (reviews, average_rating, total) = tokio::try_join!(
                        client.get_by_product_id(&product_id),
                        client.get_average_rating(&product_id),
                        client.get_total_count(&product_id),
                    )?;
                    Ok::<_, CoreError>(ReviewBundle {
                        reviews,
                        summary: ReviewSummary::new(average_rating, total),
                    })
                })
                .instrument(span.clone()),
            )
        };

        let questions = {
            let client = self.questions.clone();
            let product_id = request.product_id.clone();
            let limit = self.settings.question_limit;
            tokio::spawn(
                call(Collaborator::Questions, deadline, async move {
                    let mut questions = client.get_by_product_id(&product_id, limit).await?;
                    questions.truncate(limit);
                    Ok::<_, CoreError>(questions)
                })
                .instrument(span.clone()),
            )
        };

        let related = {
            let repo = self.products.clone();
            let product_id = request.product_id.clone();
            let category = request.category.clone();
            let limit = self.settings.related_limit;
            tokio::spawn(
                call(Collaborator::Related, deadline, async move {
                    let candidates = repo.find_related(&product_id, &category, limit).await?;
                    Ok::<Vec<Product>, CoreError>(
                        candidates
                            .into_iter()
                            .filter(|p| p.id != product_id && p.category == category)
                            .take(limit)
                            .collect(),
                    )
                })
                .instrument(span),
            )
        };

        PendingEnrichments {
            seller,
            reviews,
            questions,
            related,
            fallbacks: self.fallbacks.clone(),
        }
    }
}

/// In-flight enrichment tasks of one request. Dropping it aborts any task
/// still running, so an abandoned request stops calling collaborators.
pub struct PendingEnrichments {
    seller: JoinHandle<CoreResult<Seller>>,
    reviews: JoinHandle<CoreResult<ReviewBundle>>,
    questions: JoinHandle<CoreResult<Vec<Question>>>,
    related: JoinHandle<CoreResult<Vec<Product>>>,
    fallbacks: Arc<FallbackTable>,
}

impl PendingEnrichments {
    /// Waits for all four tasks, substituting fallbacks for any that failed
    pub async fn join(mut self) -> EnrichmentBundle {
        let (seller, reviews, questions, related) = tokio::join!(
            &mut self.seller,
            &mut self.reviews,
            &mut self.questions,
            &mut self.related
        );
        let fallbacks = &self.fallbacks;

        EnrichmentBundle {
            seller: settle(Collaborator::Seller, seller, || fallbacks.seller.clone()),
            reviews: settle(Collaborator::Reviews, reviews, || fallbacks.reviews.clone()),
            questions: settle(Collaborator::Questions, questions, || fallbacks.questions.clone()),
            related: settle(Collaborator::Related, related, || fallbacks.related.clone()),
        }
    }
}

impl Drop for PendingEnrichments {
    fn drop(&mut self) {
        self.seller.abort();
        self.reviews.abort();
        self.questions.abort();
        self.related.abort();
    }
}

async fn call<T, F>(collaborator: Collaborator, deadline: Option<Instant>, fut: F) -> CoreResult<T>
where
    F: Future<Output = CoreResult<T>>,
{
    debug!(%collaborator, "Calling collaborator");
    let start = Instant::now();

    let result = match deadline {
        Some(at) => tokio::time::timeout_at(at, fut)
            .await
            .unwrap_or(Err(CoreError::DeadlineExceeded(collaborator.as_str()))),
        None => fut.await,
    };

    debug!(
        %collaborator,
        duration_ms = start.elapsed().as_millis() as u64,
        ok = result.is_ok(),
        "Collaborator responded"
    );
    result
}

fn settle<T>(
    collaborator: Collaborator,
    outcome: Result<CoreResult<T>, JoinError>,
    fallback: impl FnOnce() -> T,
) -> T {
    match outcome {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => {
            warn!(%collaborator, error = %e, "Enrichment failed, using fallback");
            fallback()
        }
        Err(e) => {
            warn!(%collaborator, error = %e, "Enrichment task aborted, using fallback");
            fallback()
        }
    }
}
