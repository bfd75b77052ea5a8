// axidoc: locate the passages of a document most relevant to a reference text
//
// This is the library root. Text is tokenized by embedding providers,
// represented as bag-of-words counts and two kinds of word vectors,
// split into windows and scored against the reference by cosine similarity.

pub mod analysis;
pub mod config;
pub mod error;
pub mod nlp;
pub mod output;
pub mod reference;
pub mod repr;
pub mod segment;
pub mod status;
pub mod text;

pub use analysis::assembler::{build_document_wrapper, DocumentAssembler};
pub use analysis::rank::{rank, rank_by_name};
pub use analysis::types::{DocumentWrapper, SimRepresentation, WindowRepresentation};
pub use error::{AxidocError, Result};
pub use repr::kind::ReprKind;
pub use segment::{WindowProp, WindowType};
