use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Prepare, double_option};
use crate::{
    choices::{ContentType, FaqCategory, ensure_opt},
    core::app_error::AppError,
    slug::slugify,
};

// Blog posts

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::blog_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BlogPostEntity {
    pub id: i32,
    pub author_id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: String,
    pub content_type: String,
    pub tags: Value,
    pub is_published: bool,
    pub is_featured: bool,
    pub views_count: i32,
    pub likes_count: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::blog_posts)]
pub struct CreateBlogPostEntity {
    pub author_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub content: String,
    pub summary: Option<String>,
    pub content_type: Option<String>,
    pub tags: Option<Value>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::blog_posts)]
pub struct UpdateBlogPostEntity {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub content_type: Option<String>,
    pub tags: Option<Value>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub published_at: Option<Option<DateTime<Utc>>>,
}

impl Prepare for CreateBlogPostEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ContentType>(self.content_type.as_ref())?;
        let source = if self.slug.trim().is_empty() {
            &self.title
        } else {
            &self.slug
        };
        self.slug = slugify(source);
        if self.slug.is_empty() {
            return Err(AppError::BadRequest(
                "A slug could not be derived from the title".into(),
            ));
        }
        Ok(())
    }
}

impl Prepare for UpdateBlogPostEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<ContentType>(self.content_type.as_ref())?;
        if let Some(slug) = self.slug.as_mut() {
            *slug = slugify(slug);
        }
        Ok(())
    }
}

// FAQs

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::faqs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FaqEntity {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub views_count: i32,
    pub helpful_votes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::faqs)]
pub struct CreateFaqEntity {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::faqs)]
pub struct UpdateFaqEntity {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub views_count: Option<i32>,
    pub helpful_votes: Option<i32>,
}

impl Prepare for CreateFaqEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<FaqCategory>(Some(&self.category))
    }
}

impl Prepare for UpdateFaqEntity {
    fn prepare(&mut self) -> Result<(), AppError> {
        ensure_opt::<FaqCategory>(self.category.as_ref())
    }
}

// Agricultural news

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::agricultural_news)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AgriculturalNewsEntity {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub source: String,
    pub url: String,
    pub published_date: DateTime<Utc>,
    pub tags: Value,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::agricultural_news)]
pub struct CreateAgriculturalNewsEntity {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub source: Option<String>,
    pub url: Option<String>,
    pub published_date: DateTime<Utc>,
    pub tags: Option<Value>,
    pub is_featured: Option<bool>,
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = crate::schema::agricultural_news)]
pub struct UpdateAgriculturalNewsEntity {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub published_date: Option<DateTime<Utc>>,
    pub tags: Option<Value>,
    pub is_featured: Option<bool>,
}

impl Prepare for CreateAgriculturalNewsEntity {}
impl Prepare for UpdateAgriculturalNewsEntity {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_slug_falls_back_to_title() {
        let mut post: CreateBlogPostEntity = serde_json::from_value(serde_json::json!({
            "author_id": Uuid::nil(),
            "title": "Managing Fall Armyworm in Maize",
            "content": "..."
        }))
        .unwrap();
        post.prepare().unwrap();
        assert_eq!(post.slug, "managing-fall-armyworm-in-maize");
    }
}
