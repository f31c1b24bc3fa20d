//! Point set and ring triangulation.
//!
//! A panel ring goes through [`splice`] (voids merged into the boundary) and
//! then [`earclip`]. Scattered points go through [`delaunay`].

pub mod delaunay;
pub mod earclip;
pub mod splice;
