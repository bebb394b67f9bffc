//! Free-text matching and relevance ranking over post documents.
//!
//! A query matches a post when any of its tokens occurs in the title,
//! summary or content (OR semantics). The score is the total number of
//! token occurrences across those three fields; ranking is score
//! descending, ties broken by `created_at` descending. Good enough at
//! blog scale, no dedicated search engine needed.

use lectern_core::domain::Post;

/// Lower-cased alphanumeric words.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

/// Occurrences of the query tokens across title, summary and content.
pub(crate) fn score(post: &Post, query: &[String]) -> usize {
    let words = [
        tokenize(&post.title),
        tokenize(&post.summary),
        tokenize(&post.content),
    ]
    .concat();

    query
        .iter()
        .map(|token| words.iter().filter(|word| *word == token).count())
        .sum()
}

/// Keep the posts matching `term`, best first.
pub(crate) fn rank(posts: Vec<Post>, term: &str) -> Vec<Post> {
    let query = tokenize(term);

    let mut scored: Vec<(usize, Post)> = posts
        .into_iter()
        .filter_map(|post| {
            let score = score(&post, &query);
            (score > 0).then_some((score, post))
        })
        .collect();

    scored.sort_by(|(score_a, post_a), (score_b, post_b)| {
        score_b
            .cmp(score_a)
            .then(post_b.created_at.cmp(&post_a.created_at))
    });

    scored.into_iter().map(|(_, post)| post).collect()
}

/// Offset pagination: skip `(page - 1) * page_size`, take `page_size`.
pub(crate) fn paginate(posts: Vec<Post>, page: u64, page_size: u64) -> Vec<Post> {
    let skip = page.saturating_sub(1).saturating_mul(page_size);
    posts
        .into_iter()
        .skip(skip as usize)
        .take(page_size as usize)
        .collect()
}
