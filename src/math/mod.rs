pub mod gram_schmidt;
pub mod lll;
pub mod postprocess;
pub mod vector_ops;
