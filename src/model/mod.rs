pub mod entities;
pub mod features;
pub mod ranked;
pub mod weights;
