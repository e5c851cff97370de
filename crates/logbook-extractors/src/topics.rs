//! Keyword dictionary topic detection.

/// Topic name to keyword substrings, in declaration order.
///
/// Keywords are lower-case and matched as substrings of the lower-cased input.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("vector-db", &["lancedb", "vector", "embedding", "semantic search", "rag"]),
    ("context", &["context", "session", "persistence", "storage"]),
    ("indexing", &["index", "parse", "markdown", "prd", "todo"]),
    ("journal", &["journal", "auto-journal", "summary"]),
    ("testing", &["test", "vitest", "mock", "spec"]),
    ("api", &["api", "endpoint", "rest", "openai"]),
    ("platform", &["linkedin", "threads", "twitter", "bluesky", "substack"]),
    ("synthesis", &["synthesis", "generate", "llm", "gpt", "claude"]),
    ("claims", &["claim", "source", "grounded", "verification"]),
];

/// Extract topics from content.
///
/// A topic is included once if any of its keywords occurs in the content
/// (case-insensitive). Output follows dictionary order.
pub fn extract_topics(content: &str) -> Vec<String> {
    let lowercase = content.to_lowercase();

    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lowercase.contains(keyword)))
        .map(|(topic, _)| (*topic).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_follow_dictionary_order() {
        let topics =
            extract_topics("We used embeddings for semantic search and RAG in context persistence.");
        let vector_db = topics.iter().position(|t| t == "vector-db").unwrap();
        let context = topics.iter().position(|t| t == "context").unwrap();
        assert!(vector_db < context);
        assert_eq!(topics.iter().filter(|t| *t == "vector-db").count(), 1);
        assert_eq!(topics.iter().filter(|t| *t == "context").count(), 1);
    }

    #[test]
    fn test_topics_are_case_insensitive() {
        assert_eq!(extract_topics("Migrated to LanceDB"), vec!["vector-db"]);
    }

    #[test]
    fn test_topics_empty_input() {
        assert!(extract_topics("").is_empty());
    }

    #[test]
    fn test_topic_keywords_are_lowercase() {
        for (_, keywords) in TOPIC_KEYWORDS {
            for keyword in *keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_multiple_topics() {
        let topics = extract_topics("Wrote a vitest suite for the LinkedIn endpoint");
        assert_eq!(topics, vec!["testing", "api", "platform"]);
    }
}
