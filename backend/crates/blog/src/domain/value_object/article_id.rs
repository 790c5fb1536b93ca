use kernel::id::Id;

pub struct ArticleMarker;
pub type ArticleId = Id<ArticleMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_id_new() {
        let article_id = ArticleId::new();
        assert_eq!(article_id.as_uuid().get_version_num(), 4); // UUIDv4
    }
}
