// Unit tests for representations and similarity.
//
// Tests cosine bounds and degenerate inputs, mean pooling, the shared BoW
// vocabulary, and how the builder keeps GloVe and Word2Vec rows aligned for
// windows of the same document.

use axidoc::nlp::provider::StaticEmbeddingProvider;
use axidoc::nlp::stopwords::StopwordFilter;
use axidoc::nlp::traits::EmbeddingProvider;
use axidoc::nlp::vectors::StaticVectors;
use axidoc::repr::array::ReprArray;
use axidoc::repr::bow::CountVectorizer;
use axidoc::repr::builder::RepresentationBuilder;
use axidoc::repr::kind::ReprKind;
use axidoc::repr::similarity::{cosine_similarity, mean_pool, score};

// ============================================================
// Cosine similarity
// ============================================================

#[test]
fn cosine_stays_within_bounds() {
    let vectors = [
        vec![1.0, -2.0, 3.0],
        vec![-1.0, 2.0, -3.0],
        vec![0.1, 0.0, 0.0],
        vec![1e12, 1e-12, -5.0],
        vec![3.0, 3.0, 3.0],
    ];
    for a in &vectors {
        for b in &vectors {
            let sim = cosine_similarity(a, b).unwrap();
            assert!((-1.0..=1.0).contains(&sim), "{a:?} vs {b:?} gave {sim}");
        }
    }
}

#[test]
fn cosine_is_symmetric() {
    let a = [1.0, 4.0, 0.5];
    let b = [2.0, -1.0, 3.0];
    assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
}

#[test]
fn cosine_with_zero_vector_is_zero_not_nan() {
    let sim = cosine_similarity(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]).unwrap();
    assert_eq!(sim, 0.0);
}

#[test]
fn cosine_of_mismatched_widths_is_undefined() {
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), None);
}

// ============================================================
// Mean pooling and null propagation
// ============================================================

#[test]
fn mean_pool_averages_columns() {
    let rows = vec![vec![2.0, 0.0], vec![0.0, 4.0], vec![1.0, 2.0]];
    assert_eq!(mean_pool(&rows), Some(vec![1.0, 2.0]));
}

#[test]
fn empty_matrix_has_no_score() {
    let empty = ReprArray::Embeddings(Vec::new());
    let row = ReprArray::Embeddings(vec![vec![1.0, 1.0]]);
    assert_eq!(score(ReprKind::Glove, Some(&empty), Some(&row)), None);
    assert_eq!(score(ReprKind::Glove, Some(&row), Some(&empty)), None);
}

#[test]
fn missing_side_has_no_score() {
    let counts = ReprArray::Counts(vec![1.0, 0.0]);
    for kind in ReprKind::ALL {
        assert_eq!(score(kind, None, Some(&counts)), None);
        assert_eq!(score(kind, Some(&counts), None), None);
    }
}

// ============================================================
// Bag of words
// ============================================================

#[test]
fn shared_vocabulary_gives_equal_widths() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer
        .fit(&["moral values matter", "the weather is rainy"])
        .unwrap();

    let a = vectorizer.transform("moral moral values").unwrap();
    let b = vectorizer.transform("rainy weather").unwrap();
    assert_eq!(a.len(), vectorizer.vocabulary_len());
    assert_eq!(a.len(), b.len());
    assert_eq!(cosine_similarity(&a, &b), Some(0.0));
}

#[test]
fn out_of_vocabulary_terms_are_ignored() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["honesty"]).unwrap();
    assert_eq!(vectorizer.transform("honesty and zebras").unwrap(), vec![1.0]);
}

#[test]
fn unfitted_or_termless_transform_fails() {
    let vectorizer = CountVectorizer::new();
    assert!(vectorizer.transform("honesty").is_err());

    let mut fitted = CountVectorizer::new();
    fitted.fit(&["honesty"]).unwrap();
    assert!(fitted.transform("! ? .").is_err());
}

#[test]
fn fit_on_termless_documents_fails() {
    let mut vectorizer = CountVectorizer::new();
    assert!(vectorizer.fit(&["", "!?"]).is_err());
    assert!(!vectorizer.is_fitted());
}

#[test]
fn top_terms_are_most_frequent_first() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["values honesty fairness"]).unwrap();
    let counts = vectorizer.transform("fairness values values").unwrap();
    let top = vectorizer.top_terms(&counts, 5);
    assert_eq!(
        top,
        vec![("values".to_string(), 2.0), ("fairness".to_string(), 1.0)]
    );
}

// ============================================================
// Builder alignment
// ============================================================

fn providers() -> (StaticEmbeddingProvider, StaticEmbeddingProvider) {
    let glove = StaticVectors::from_entries([
        ("honesty", vec![1.0, 0.0]),
        ("weather", vec![0.0, 1.0]),
    ])
    .unwrap();
    let word2vec = StaticVectors::from_entries([
        ("honesty", vec![0.0, 0.0, 1.0]),
        ("weather", vec![0.0, 1.0, 0.0]),
    ])
    .unwrap();
    (
        StaticEmbeddingProvider::new("glove", glove).with_stopwords(StopwordFilter::empty()),
        StaticEmbeddingProvider::new("word2vec", word2vec).with_stopwords(StopwordFilter::empty()),
    )
}

#[test]
fn span_representations_have_one_row_per_token() {
    let (glove, word2vec) = providers();
    let builder = RepresentationBuilder::new(&glove, &word2vec);
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["honesty about the weather"]).unwrap();

    let doc = glove.tokenize("Honesty about the weather.").unwrap();
    let span = doc.span(0..4).unwrap();
    let reprs = builder.represent_span(span, &vectorizer);

    assert_eq!(reprs.glove.rows(), 4);
    assert_eq!(reprs.word2vec.rows(), 4);
    assert_eq!(reprs.glove.width(), glove.dimensions());
    assert_eq!(reprs.word2vec.width(), word2vec.dimensions());
    assert_eq!(
        reprs.word2vec,
        ReprArray::Embeddings(vec![
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
        ])
    );
}
