//! Case-insensitive substring filter over paper title and authors

use super::models::PaperColumn;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::Condition;

const LIKE_ESCAPE: char = '!';

/// Case-insensitive substring predicate over `title OR authors`
///
/// Both the column and the pattern go through the backend's `LOWER()`, so
/// case folding is whatever the database does and an exact substring always
/// matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    /// Build a filter from the raw `search` query value.
    ///
    /// Absent and empty values mean "no filter". Whitespace is kept as-is.
    pub fn from_query(search: Option<String>) -> Option<Self> {
        search
            .filter(|s| !s.is_empty())
            .map(|needle| Self { needle })
    }

    /// Search text as given
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// `%needle%` with LIKE wildcards in the needle escaped
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.needle.len() + 2);
        pattern.push('%');
        for ch in self.needle.chars() {
            if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }

    /// SQL condition OR-ing the match across title and authors
    pub fn condition(&self) -> Condition {
        Condition::any()
            .add(self.column_like(PaperColumn::Title))
            .add(self.column_like(PaperColumn::Authors))
    }

    /// `LOWER(column) LIKE LOWER(pattern) ESCAPE '!'`
    fn column_like(&self, column: PaperColumn) -> SimpleExpr {
        Expr::cust_with_exprs(
            format!("LOWER($1) LIKE LOWER($2) ESCAPE '{}'", LIKE_ESCAPE),
            [Expr::col(column).into(), Expr::val(self.like_pattern()).into()],
        )
    }
}
