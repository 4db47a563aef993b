//! # Validation & Transformation Module
//!
//! Input validation and creation-time transforms for the catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Validation Layers                         │
//! │                                                              │
//! │  Layer 1: Deserialization (serde)                            │
//! │  └── Type/shape checks on the request body                   │
//! │           │                                                  │
//! │           ▼                                                  │
//! │  Layer 2: THIS MODULE                                        │
//! │  └── Business rule validation + normalization                │
//! │           │                                                  │
//! │           ▼                                                  │
//! │  Layer 3: Database (SQLite)                                  │
//! │  ├── NOT NULL constraints                                    │
//! │  ├── UNIQUE constraint on books.isbn                         │
//! │  └── Foreign key constraints                                 │
//! │                                                              │
//! │  Defense in depth: each layer catches different errors       │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{NewAuthor, NewBook};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Literal prefix applied to every stored ISBN.
///
/// This is a cataloging convention, not checksum validation: the trimmed
/// client value is stored verbatim behind the prefix.
pub const ISBN_PREFIX: &str = "ISBN-";

// =============================================================================
// Author Validation
// =============================================================================

/// Validates author input.
///
/// ## Rules
/// - `name` must be non-empty after trimming
/// - `nationality` must be non-empty after trimming
///
/// No length limits or charset checks beyond that.
///
/// ## Example
/// ```rust
/// use biblio_core::types::NewAuthor;
/// use biblio_core::validation::validate_author;
///
/// let input = NewAuthor {
///     name: "Gabriel García Márquez".into(),
///     nationality: "Colombian".into(),
/// };
/// assert!(validate_author(&input).is_ok());
///
/// let blank = NewAuthor { name: "   ".into(), nationality: "Colombian".into() };
/// assert!(validate_author(&blank).is_err());
/// ```
pub fn validate_author(input: &NewAuthor) -> ValidationResult<()> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if input.nationality.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "nationality".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Book Transformation
// =============================================================================

/// Transforms raw book input into its stored form.
///
/// ## Rules
/// - `title` is trimmed then upper-cased
/// - `isbn` is trimmed then prefixed with [`ISBN_PREFIX`]
/// - `author_id` passes through unchanged
///
/// ## Not Idempotent
/// Applying the transform twice double-prefixes the isbn
/// (`ISBN-ISBN-123`). Callers apply it exactly once per creation.
///
/// ## Example
/// ```rust
/// use biblio_core::validation::transform_book_input;
///
/// let book = transform_book_input("  cien años  ", "  123  ", 7);
/// assert_eq!(book.title, "CIEN AÑOS");
/// assert_eq!(book.isbn, "ISBN-123");
/// assert_eq!(book.author_id, 7);
/// ```
pub fn transform_book_input(title: &str, isbn: &str, author_id: i64) -> NewBook {
    NewBook {
        title: title.trim().to_uppercase(),
        isbn: format!("{}{}", ISBN_PREFIX, isbn.trim()),
        author_id,
    }
}

// =============================================================================
// Name Normalization
// =============================================================================

/// Title-cases a string: first letter of each whitespace-separated word
/// upper-cased, the rest lower-cased.
///
/// Used to normalize author names, nationalities, and loan user names on
/// create. The input is trimmed first.
///
/// ## Example
/// ```rust
/// use biblio_core::validation::title_case;
///
/// assert_eq!(title_case("  gabriel garcía márquez "), "Gabriel García Márquez");
/// assert_eq!(title_case("JOHN DOE"), "John Doe");
/// ```
pub fn title_case(s: &str) -> String {
    s.trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Unit Tests
// =============================================================================
