pub mod editor;
pub mod entity;
pub mod pages;
pub mod repository;
pub mod value_objects;

pub use editor::{ArticleEditor, EditorPage, ImageFile, ImagePreview, PageEdit};
pub use entity::{Article, ArticleListing, ArticleUpdate, NewArticle, PLACEHOLDER_HERO_IMAGE};
pub use pages::{PageNavigator, RenderedPage, StoredPage};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleSlug, ArticleStatus, ArticleTitle};
