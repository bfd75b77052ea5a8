// Document representations (bag-of-words counts, mean-pooled GloVe and
// Word2Vec embeddings) and cosine scoring between them.

pub mod array;
pub mod bow;
pub mod builder;
pub mod kind;
pub mod similarity;
