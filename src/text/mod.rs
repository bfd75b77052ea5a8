// Text normalization applied before tokenization.

pub mod normalize;
