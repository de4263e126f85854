use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Question};

/// Read access to the per-course question banks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Question>>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        for model in index_models() {
            self.collection.create_index(model).await?;
        }

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}

/// Bank ids are unique so a sampled attempt never repeats an id.
fn index_models() -> Vec<IndexModel> {
    let id_index = IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .name("id_unique".to_string())
                .build(),
        )
        .build();

    let course_index = IndexModel::builder()
        .keys(doc! { "course_id": 1 })
        .options(IndexOptions::builder().name("course_id".to_string()).build())
        .build();

    vec![id_index, course_index]
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Question>> {
        let cursor = self.collection.find(doc! { "course_id": course_id }).await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }
}
