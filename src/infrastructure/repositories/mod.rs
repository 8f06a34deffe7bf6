mod error;
mod rows;
mod sqlite_record;

pub use error::map_sqlx;
pub use rows::{ArticleRow, UserRow};
pub use sqlite_record::SqliteRecordStore;

use crate::domain::{article::Article, user::User};

pub type SqliteArticleStore = SqliteRecordStore<ArticleRow, Article>;
pub type SqliteUserStore = SqliteRecordStore<UserRow, User>;
