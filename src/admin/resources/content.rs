//! Content and support records.

use axum::Router;
use uuid::Uuid;

use crate::{
    admin::{ResourceMeta, query::Timestamp},
    core::app_state::AppState,
    models::{
        AgriculturalNewsEntity, BlogPostEntity, CreateAgriculturalNewsEntity, CreateBlogPostEntity,
        CreateFaqEntity, CreateMessageEntity, CreateNotificationEntity, CreateSupportTicketEntity,
        CreateTicketMessageEntity, FaqEntity, MessageEntity, NotificationEntity,
        SupportTicketEntity, TicketMessageEntity, UpdateAgriculturalNewsEntity,
        UpdateBlogPostEntity, UpdateFaqEntity, UpdateMessageEntity, UpdateNotificationEntity,
        UpdateSupportTicketEntity, UpdateTicketMessageEntity,
    },
};

admin_resource! {
    table: blog_posts,
    id: i32,
    entity: BlogPostEntity,
    title: "Blog posts",
    group: "Content",
    display: ["title", "author_id", "content_type", "is_published", "is_featured", "views_count", "published_at"],
    search: [title, summary, content],
    filters: [content_type: String, is_published: bool, is_featured: bool, author_id: Uuid],
    ordering: [created_at, published_at, views_count, title],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [related_crops => blog_post_related_crops(blog_post_id, crop_id)],
    write: generic(CreateBlogPostEntity, UpdateBlogPostEntity)
}

admin_resource! {
    table: faqs,
    id: i32,
    entity: FaqEntity,
    title: "FAQs",
    group: "Content",
    display: ["question", "category", "sort_order", "is_active", "views_count", "helpful_votes"],
    search: [question, answer],
    filters: [category: String, is_active: bool],
    ordering: [sort_order, created_at, views_count, helpful_votes],
    default_order: sort_order asc,
    date_field: [],
    price_field: [],
    actions: [
        make_active => is_active = true,
        make_inactive => is_active = false,
    ],
    relations: [],
    write: generic(CreateFaqEntity, UpdateFaqEntity)
}

admin_resource! {
    table: agricultural_news,
    id: i32,
    entity: AgriculturalNewsEntity,
    title: "Agricultural news",
    group: "Content",
    display: ["title", "source", "published_date", "is_featured", "created_at"],
    search: [title, summary, content, source],
    filters: [is_featured: bool, source: String],
    ordering: [published_date, created_at, title],
    default_order: published_date desc,
    date_field: [published_date: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateAgriculturalNewsEntity, UpdateAgriculturalNewsEntity)
}

admin_resource! {
    table: notifications,
    id: i32,
    entity: NotificationEntity,
    title: "Notifications",
    group: "Support",
    display: ["title", "recipient_id", "notification_type", "is_read", "is_sent", "created_at"],
    search: [title, message],
    filters: [
        notification_type: String,
        is_read: bool,
        is_sent: bool,
        send_email: bool,
        send_sms: bool,
        recipient_id: Uuid,
    ],
    ordering: [created_at, sent_at, read_at],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateNotificationEntity, UpdateNotificationEntity)
}

admin_resource! {
    table: support_tickets,
    id: i32,
    entity: SupportTicketEntity,
    title: "Support tickets",
    group: "Support",
    display: ["ticket_number", "user_id", "subject", "category", "priority", "status", "assigned_to_id", "created_at"],
    search: [ticket_number, subject, description],
    filters: [category: String, priority: String, status: String, assigned_to_id: Uuid, user_id: Uuid],
    ordering: [created_at, updated_at, priority, status],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateSupportTicketEntity, UpdateSupportTicketEntity)
}

admin_resource! {
    table: ticket_messages,
    id: i32,
    entity: TicketMessageEntity,
    title: "Ticket messages",
    group: "Support",
    display: ["ticket_id", "sender_id", "is_internal", "created_at"],
    search: [message],
    filters: [ticket_id: i32, is_internal: bool, sender_id: Uuid],
    ordering: [created_at],
    default_order: created_at asc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateTicketMessageEntity, UpdateTicketMessageEntity)
}

admin_resource! {
    table: messages,
    id: i32,
    entity: MessageEntity,
    title: "Messages",
    group: "Support",
    display: ["subject", "sender_id", "recipient_id", "is_read", "created_at"],
    search: [subject, content],
    filters: [is_read: bool, sender_id: Uuid, recipient_id: Uuid],
    ordering: [created_at, read_at],
    default_order: created_at desc,
    date_field: [created_at: Timestamp],
    price_field: [],
    actions: [],
    relations: [],
    write: generic(CreateMessageEntity, UpdateMessageEntity)
}

pub const RESOURCES: &[ResourceMeta] = &[
    blog_posts::META,
    faqs::META,
    agricultural_news::META,
    notifications::META,
    support_tickets::META,
    ticket_messages::META,
    messages::META,
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(blog_posts::routes())
        .merge(faqs::routes())
        .merge(agricultural_news::routes())
        .merge(notifications::routes())
        .merge(support_tickets::routes())
        .merge(ticket_messages::routes())
        .merge(messages::routes())
}
