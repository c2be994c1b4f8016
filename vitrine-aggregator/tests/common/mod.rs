#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use vitrine_catalog::Product;
use vitrine_core::{CoreError, CoreResult, ProductRepository, QuestionClient, ReviewClient, SellerClient};
use vitrine_shared::{Question, Review, ReviewSummary, Seller};

pub fn product(id: &str, category: &str, price: f64) -> Product {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Producto {}", id),
        "description": "descripcion",
        "price": price,
        "condition": "new",
        "available_quantity": 10,
        "sold_quantity": 3,
        "images": [format!("https://img.example/{}.jpg", id)],
        "category": category,
        "brand": "Marca",
        "model": "M1"
    }))
    .expect("valid product fixture")
}

pub fn seller(id: &str) -> Seller {
    Seller {
        id: id.to_string(),
        nickname: format!("SELLER_{}", id),
        reputation_level: "platinum".to_string(),
        total_sales: 1520,
        reputation_score: 4.8,
        years_active: 6,
        is_official_store: true,
    }
}

pub fn review(id: &str, product_id: &str, rating: i32) -> Review {
    Review {
        id: id.to_string(),
        product_id: product_id.to_string(),
        user_id: "U1".to_string(),
        user_name: "pablo".to_string(),
        rating,
        title: "Bueno".to_string(),
        comment: "Cumple".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        helpful_count: 2,
    }
}

pub fn question(id: &str, product_id: &str) -> Question {
    Question {
        id: id.to_string(),
        product_id: product_id.to_string(),
        user_id: "U2".to_string(),
        user_name: "sofia".to_string(),
        question: "Tiene stock?".to_string(),
        answer: Some("Si".to_string()),
        question_date: Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap(),
        answer_date: None,
        likes: 1,
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[derive(Default)]
pub struct FakeProducts {
    pub products: Vec<Product>,
    pub lookup_delay: Duration,
    pub related_delay: Duration,
    pub fail_lookup: bool,
    pub fail_related: bool,
    /// Return every product instead of honouring the related-products contract
    pub unfiltered_related: bool,
    pub lookups: AtomicUsize,
    pub related_calls: AtomicUsize,
    pub searches: AtomicUsize,
    pub counts: AtomicUsize,
}

#[async_trait]
impl ProductRepository for FakeProducts {
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Product>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        pause(self.lookup_delay).await;
        if self.fail_lookup {
            return Err(CoreError::Unavailable("catalog".to_string()));
        }
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_related(&self, product_id: &str, category: &str, limit: usize) -> CoreResult<Vec<Product>> {
        self.related_calls.fetch_add(1, Ordering::SeqCst);
        pause(self.related_delay).await;
        if self.fail_related {
            return Err(CoreError::Unavailable("catalog".to_string()));
        }
        if self.unfiltered_related {
            return Ok(self.products.clone());
        }
        Ok(self
            .products
            .iter()
            .filter(|p| p.id != product_id && p.category == category)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn search(&self, keyword: &str, limit: usize, offset: usize) -> CoreResult<Vec<Product>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .products
            .iter()
            .filter(|p| p.matches_keyword(keyword))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, keyword: &str) -> CoreResult<usize> {
        self.counts.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.iter().filter(|p| p.matches_keyword(keyword)).count())
    }
}

#[derive(Default)]
pub struct FakeSellers {
    pub sellers: Vec<Seller>,
    pub delay: Duration,
    pub fail: bool,
    pub calls: AtomicUsize,
    /// Lookups that ran past their delay
    pub completed: AtomicUsize,
    pub last_requested: std::sync::Mutex<Option<String>>,
}

#[async_trait]
impl SellerClient for FakeSellers {
    async fn get_by_id(&self, seller_id: &str) -> CoreResult<Seller> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_requested.lock().unwrap() = Some(seller_id.to_string());
        pause(self.delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CoreError::Unavailable("seller service".to_string()));
        }
        self.sellers
            .iter()
            .find(|s| s.id == seller_id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(seller_id.to_string()))
    }
}

#[derive(Default)]
pub struct FakeReviews {
    pub reviews: Vec<Review>,
    pub delay: Duration,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeReviews {
    fn for_product(&self, product_id: &str) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ReviewClient for FakeReviews {
    async fn get_by_product_id(&self, product_id: &str) -> CoreResult<Vec<Review>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        pause(self.delay).await;
        if self.fail {
            return Err(CoreError::Unavailable("review service".to_string()));
        }
        Ok(self.for_product(product_id))
    }

    async fn get_average_rating(&self, product_id: &str) -> CoreResult<f64> {
        pause(self.delay).await;
        Ok(ReviewSummary::from_reviews(&self.for_product(product_id)).average_rating)
    }

    async fn get_total_count(&self, product_id: &str) -> CoreResult<usize> {
        pause(self.delay).await;
        Ok(self.for_product(product_id).len())
    }
}

#[derive(Default)]
pub struct FakeQuestions {
    pub questions: Vec<Question>,
    pub delay: Duration,
    pub fail: bool,
    pub panic: bool,
    /// Return every question regardless of the requested limit
    pub ignore_limit: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl QuestionClient for FakeQuestions {
    async fn get_by_product_id(&self, product_id: &str, limit: usize) -> CoreResult<Vec<Question>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        pause(self.delay).await;
        if self.panic {
            panic!("question service blew up");
        }
        if self.fail {
            return Err(CoreError::Unavailable("question service".to_string()));
        }
        let matching = self.questions.iter().filter(|q| q.product_id == product_id).cloned();
        Ok(if self.ignore_limit {
            matching.collect()
        } else {
            matching.take(limit).collect()
        })
    }
}
