pub mod sampling;
pub mod triangulation;

#[doc(inline)]
pub use sampling::scatter;
