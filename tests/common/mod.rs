//! Helpers for integration tests.

use diesel::connection::SimpleConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use storefront_playground::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Seed the fixture rows the tests (and the playground walkthrough) expect.
#[allow(dead_code)]
pub fn seed_store(pool: &DbPool) {
    let mut conn = pool
        .get()
        .expect("Failed to get SQLite connection from pool.");
    conn.batch_execute(
        "INSERT INTO collections (id, title) VALUES
             (1, 'Grocery'),
             (2, 'Beauty'),
             (3, 'Toys'),
             (4, 'Empty Shelf'),
             (11, 'Games');
         INSERT INTO products (id, title, unit_price_cents, inventory, collection_id) VALUES
             (1, 'Bread', 450, 120, 1),
             (2, 'Shampoo', 2250, 8, 2),
             (3, 'Chess Set', 2999, 30, 3),
             (4, 'Toy Train', 1850, 4, 3),
             (5, 'Puzzle', 999, 999, 3),
             (6, 'Lotion', 2000, 2000, 2),
             (7, 'Board Game', 3500, 11, 11);
         UPDATE collections SET featured_product_id = 7 WHERE id = 11;
         INSERT INTO customers (id, first_name, last_name, email) VALUES
             (1, 'Alice', 'Doe', 'alice@example.com'),
             (2, 'Bob', 'Ray', 'bob@example.com');
         INSERT INTO orders (id, customer_id, placed_at) VALUES
             (1, 2, '2026-01-01 10:00:00'),
             (2, 2, '2026-01-02 10:00:00');
         INSERT INTO order_items (order_id, product_id, quantity, unit_price_cents) VALUES
             (1, 3, 2, 2999),
             (2, 5, 1, 999);
         INSERT INTO tags (id, label) VALUES
             (1, 'bestseller'),
             (2, 'gluten-free'),
             (3, 'sale');
         INSERT INTO tagged_items (tag_id, object_type, object_id) VALUES
             (1, 'product', 1),
             (2, 'product', 1),
             (3, 'product', 5),
             (1, 'customer', 2);",
    )
    .expect("Seeding the store fixture failed");
}
