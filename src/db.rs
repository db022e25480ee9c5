use crate::models::cart_item::CartItem;
use crate::models::product::Product;
use crate::models::review::{Review, ReviewWithAuthor, ValidReview};
use crate::models::user::User;
use chrono::{DateTime, Utc};
use leptos::logging::log;
use rusqlite::{params, Connection, Error, OptionalExtension};
use std::sync::Arc;
use tokio::sync::Mutex;

// Ordered schema revisions. The position in this list (1-based) is the value
// stored in `PRAGMA user_version` once the revision has been applied.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create_store_tables",
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            admin INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );
        CREATE TABLE IF NOT EXISTS cart_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 1,
            FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE CASCADE
        );
        CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            product_id INTEGER,
            description TEXT,
            stars INTEGER,
            created_at TEXT,
            updated_at TEXT
        );",
    ),
    (
        "require_review_fields",
        "CREATE TABLE reviews_required (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            product_id INTEGER NOT NULL,
            description TEXT NOT NULL,
            stars INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(id),
            FOREIGN KEY (product_id) REFERENCES products(id)
        );
        INSERT INTO reviews_required
            (id, user_id, product_id, description, stars, created_at, updated_at)
        SELECT
            id,
            user_id,
            product_id,
            description,
            stars,
            COALESCE(created_at, CURRENT_TIMESTAMP),
            COALESCE(updated_at, created_at, CURRENT_TIMESTAMP)
        FROM reviews
        WHERE user_id IS NOT NULL
            AND product_id IS NOT NULL
            AND description IS NOT NULL
            AND stars IS NOT NULL;
        DROP TABLE reviews;
        ALTER TABLE reviews_required RENAME TO reviews;
        CREATE INDEX IF NOT EXISTS idx_reviews_product_id ON reviews (product_id);",
    ),
];

// Handle to the SQLite store shared by every request worker
#[derive(Debug, Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    // Open (or create) the database file; ":memory:" gives a private in-memory store
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let conn = Connection::open(db_path)?;
        log!("[DB] Connection established at: {}", db_path);
        Ok(Database {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    // Bring the schema up to the latest revision
    pub async fn create_schema(&self) -> Result<(), Error> {
        self.migrate_to(MIGRATIONS.len()).await
    }

    pub async fn schema_version(&self) -> Result<usize, Error> {
        let conn = self.conn.lock().await;
        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        Ok(version.max(0) as usize)
    }

    async fn migrate_to(&self, target: usize) -> Result<(), Error> {
        let mut conn = self.conn.lock().await;
        let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        let current = current.max(0) as usize;

        for (index, (name, sql)) in MIGRATIONS.iter().enumerate().take(target).skip(current) {
            let version = index + 1;
            log!("[DB] Applying migration {} ({})", version, name);
            let tx = conn.transaction()?;
            tx.execute_batch(sql).map_err(|e| {
                log!("[DB] Migration {} failed: {}", name, e);
                e
            })?;
            tx.execute_batch(&format!("PRAGMA user_version = {}", version))?;
            tx.commit()?;
        }
        Ok(())
    }

    pub async fn insert_user(&self, email: &str, admin: bool) -> Result<User, Error> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO users (email, admin) VALUES (?, ?)",
            params![email, admin],
        )?;
        let id = conn.last_insert_rowid();
        log!("[DB] User inserted: {}", id);
        Ok(User {
            id,
            email: email.to_string(),
            admin,
        })
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, Error> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT id, email, admin FROM users WHERE id = ?",
            [id],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    admin: row.get(2)?,
                })
            },
        )
        .optional()
    }

    pub async fn insert_product(&self, name: &str, description: &str) -> Result<Product, Error> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO products (name, description) VALUES (?, ?)",
            params![name, description],
        )?;
        let id = conn.last_insert_rowid();
        log!("[DB] Product inserted: {}", id);
        Ok(Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
        })
    }

    pub async fn get_product(&self, id: i64) -> Result<Option<Product>, Error> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT id, name, description FROM products WHERE id = ?",
            [id],
            |row| {
                Ok(Product {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                })
            },
        )
        .optional()
    }

    pub async fn insert_cart_item(&self, product_id: i64, quantity: i64) -> Result<CartItem, Error> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO cart_items (product_id, quantity) VALUES (?, ?)",
            params![product_id, quantity],
        )?;
        Ok(CartItem {
            id: conn.last_insert_rowid(),
            product_id,
            quantity,
        })
    }

    // Every cart line, oldest first
    pub async fn get_cart_items(&self) -> Result<Vec<CartItem>, Error> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT id, product_id, quantity FROM cart_items ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(CartItem {
                id: row.get(0)?,
                product_id: row.get(1)?,
                quantity: row.get(2)?,
            })
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    // Store a validated review; ids and timestamps are assigned here
    pub async fn insert_review(&self, review: &ValidReview) -> Result<Review, Error> {
        let now: DateTime<Utc> = Utc::now();
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO reviews (user_id, product_id, description, stars, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)",
            params![
                review.user_id,
                review.product_id,
                &review.description,
                review.stars,
                now,
                now
            ],
        )
        .map_err(|e| {
            log!("[DB] Review insert failed: {:?}", e);
            e
        })?;
        let id = conn.last_insert_rowid();
        log!(
            "[DB] Review {} stored for product {} by user {}",
            id,
            review.product_id,
            review.user_id
        );
        Ok(Review {
            id,
            user_id: review.user_id,
            product_id: review.product_id,
            description: review.description.clone(),
            stars: review.stars,
            created_at: now,
            updated_at: now,
        })
    }

    // Reviews of one product with their author's email, newest first
    pub async fn get_reviews_for_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<ReviewWithAuthor>, Error> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT
                r.id,
                r.user_id,
                r.product_id,
                r.description,
                r.stars,
                r.created_at,
                r.updated_at,
                u.email
            FROM reviews r
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.product_id = ?
            ORDER BY r.created_at DESC, r.id DESC",
        )?;
        let rows = stmt.query_map([product_id], |row| {
            Ok(ReviewWithAuthor {
                review: Review {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    product_id: row.get(2)?,
                    description: row.get(3)?,
                    stars: row.get(4)?,
                    created_at: row.get(5)?,
                    updated_at: row.get(6)?,
                },
                author_email: row.get::<_, Option<String>>(7)?.unwrap_or_default(), // Author row may be gone
            })
        })?;

        let mut reviews = Vec::new();
        for row in rows {
            reviews.push(row?);
        }
        Ok(reviews)
    }

    pub async fn count_reviews_for_product(&self, product_id: i64) -> Result<i64, Error> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT COUNT(*) FROM reviews WHERE product_id = ?",
            [product_id],
            |row| row.get(0),
        )
    }
}
