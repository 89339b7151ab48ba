use crate::db::categories;
use crate::errors::{AppError, AppResult};
use crate::models::category::{Category, CategoryRegistry};
use rusqlite::Connection;

pub struct CategoryLogic;

impl CategoryLogic {
    pub fn registry(conn: &Connection) -> AppResult<CategoryRegistry> {
        categories::load_registry(conn)
    }

    /// Register a user-defined category. Returns the normalized category and
    /// whether it was new.
    pub fn add(conn: &Connection, raw: &str) -> AppResult<(Category, bool)> {
        let cat = Category::new(raw)?;
        let created = categories::insert_category(conn, &cat)?;
        Ok((cat, created))
    }

    /// Resolve a category for a new task.
    ///
    /// Known categories pass through. Unknown ones are registered when
    /// `register_unknown` is set, otherwise rejected.
    pub fn resolve(conn: &Connection, raw: &str, register_unknown: bool) -> AppResult<Category> {
        let cat = Category::new(raw)?;
        let registry = Self::registry(conn)?;

        if registry.contains(&cat) {
            return Ok(cat);
        }
        if !register_unknown {
            return Err(AppError::InvalidCategory(format!(
                "unknown category '{}' (use `category add {}` first)",
                cat, cat
            )));
        }
        categories::insert_category(conn, &cat)?;
        Ok(cat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::pool::DbPool;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    #[test]
    fn builtins_are_seeded() {
        let pool = pool();
        let reg = CategoryLogic::registry(&pool.conn).unwrap();
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn add_is_idempotent_and_normalizes() {
        let pool = pool();
        let (cat, created) = CategoryLogic::add(&pool.conn, "  Training ").unwrap();
        assert_eq!(cat.as_str(), "training");
        assert!(created);

        let (_, again) = CategoryLogic::add(&pool.conn, "training").unwrap();
        assert!(!again);
        assert_eq!(CategoryLogic::registry(&pool.conn).unwrap().len(), 7);
    }

    #[test]
    fn resolve_unknown_category() {
        let pool = pool();
        assert!(matches!(
            CategoryLogic::resolve(&pool.conn, "swimming", false),
            Err(AppError::InvalidCategory(_))
        ));

        let cat = CategoryLogic::resolve(&pool.conn, "swimming", true).unwrap();
        assert_eq!(cat.as_str(), "swimming");
        assert!(CategoryLogic::registry(&pool.conn).unwrap().contains(&cat));
    }

    #[test]
    fn resolve_rejects_empty() {
        let pool = pool();
        assert!(CategoryLogic::resolve(&pool.conn, "   ", true).is_err());
    }
}
