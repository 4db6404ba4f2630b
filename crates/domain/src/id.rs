//! ID generation utilities.

use uuid::Uuid;

/// Generates a new UUID v7 for client-created entities.
///
/// v7 ids carry a timestamp prefix and sort by creation order, which keeps
/// optimistic inserts (posts, comments) stable in paginated views.
#[must_use]
pub fn new_id() -> Uuid {
    Uuid::now_v7()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_uniqueness() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn test_new_id_is_sortable() {
        let first = new_id();
        let second = new_id();
        assert!(first <= second);
    }
}
