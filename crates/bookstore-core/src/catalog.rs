//! # Catalog Source
//!
//! The fixed, ordered list of books the storefront sells.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup                                                                │
//! │     │                                                                   │
//! │     ├── Catalog::standard()      compiled-in titles                     │
//! │     └── Catalog::new(books)      any ordered source, validated          │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Session: read-only. Books are looked up by id when added to the cart. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Book, BookId};
use crate::validation::validate_book;

/// An immutable, ordered catalog of books with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Builds a catalog from an ordered sequence of books.
    ///
    /// ## Errors
    /// - `CoreError::Validation` if a record has a zero id, blank title or
    ///   negative price
    /// - `CoreError::DuplicateBookId` if two records share an id
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::catalog::Catalog;
    ///
    /// let books = Catalog::standard().books().to_vec();
    /// let catalog = Catalog::new(books).unwrap();
    /// assert_eq!(catalog.len(), 8);
    /// ```
    pub fn new(books: Vec<Book>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            validate_book(book)?;
            if !seen.insert(book.id) {
                return Err(CoreError::DuplicateBookId(book.id));
            }
        }

        Ok(Catalog { books })
    }

    /// The compiled-in storefront catalog.
    pub fn standard() -> Self {
        Catalog {
            books: standard_books(),
        }
    }

    /// All books, in catalog order.
    #[inline]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Looks up a book by id.
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Looks up a book by id, failing with `BookNotFound`.
    pub fn find(&self, id: BookId) -> CoreResult<&Book> {
        self.get(id).ok_or(CoreError::BookNotFound(id))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

fn book(
    id: u32,
    title: &str,
    author: &str,
    price_cents: i64,
    category: &str,
    description: &str,
    image: &str,
) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author: author.to_string(),
        price: Money::from_cents(price_cents),
        category: category.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

fn standard_books() -> Vec<Book> {
    vec![
        book(
            1,
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            1299,
            "Classic",
            "A timeless American novel about wealth and the American Dream.",
            "📕",
        ),
        book(
            2,
            "To Kill a Mockingbird",
            "Harper Lee",
            1499,
            "Classic",
            "A gripping tale of racial injustice and childhood innocence.",
            "📗",
        ),
        book(
            3,
            "1984",
            "George Orwell",
            1399,
            "Dystopian",
            "A chilling exploration of totalitarianism and surveillance.",
            "📘",
        ),
        book(
            4,
            "Pride and Prejudice",
            "Jane Austen",
            1199,
            "Romance",
            "A witty love story set in Georgian England.",
            "📕",
        ),
        book(
            5,
            "The Catcher in the Rye",
            "J.D. Salinger",
            1099,
            "Contemporary",
            "A coming-of-age story about teenage angst and alienation.",
            "📙",
        ),
        book(
            6,
            "Brave New World",
            "Aldous Huxley",
            1399,
            "Dystopian",
            "A futuristic society predicated on happiness through conformity.",
            "📘",
        ),
        book(
            7,
            "Jane Eyre",
            "Charlotte Brontë",
            1299,
            "Romance",
            "A passionate love story with gothic elements.",
            "📕",
        ),
        book(
            8,
            "The Hobbit",
            "J.R.R. Tolkien",
            1499,
            "Fantasy",
            "An adventurous fantasy tale of hobbits and magic.",
            "📗",
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_standard_catalog_is_valid() {
        let standard = Catalog::standard();
        let rebuilt = Catalog::new(standard.books().to_vec()).unwrap();
        assert_eq!(rebuilt, standard);
        assert_eq!(standard.len(), 8);
    }

    #[test]
    fn test_standard_catalog_order_and_prices() {
        let catalog = Catalog::standard();
        let ids: Vec<u32> = catalog.books().iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let gatsby = catalog.get(BookId::new(1)).unwrap();
        assert_eq!(gatsby.title, "The Great Gatsby");
        assert_eq!(gatsby.price, Money::from_cents(1299));
    }

    #[test]
    fn test_find_missing_book() {
        let catalog = Catalog::standard();
        assert!(catalog.get(BookId::new(99)).is_none());
        assert!(matches!(
            catalog.find(BookId::new(99)),
            Err(CoreError::BookNotFound(id)) if id == BookId::new(99)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut books = Catalog::standard().books().to_vec();
        books.push(books[0].clone());

        assert!(matches!(
            Catalog::new(books),
            Err(CoreError::DuplicateBookId(id)) if id == BookId::new(1)
        ));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let mut books = Catalog::standard().books().to_vec();
        books[2].price = Money::from_cents(-1);

        assert!(matches!(
            Catalog::new(books),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_empty_catalog_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
