pub mod admin;
pub mod choices;
pub mod core;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod schema;
pub mod seed;
pub mod slug;

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

/// Migrations embedded into the binaries so the server and the seeder can bring the schema up themselves
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
