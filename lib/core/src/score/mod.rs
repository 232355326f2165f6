pub mod gradient;
pub mod store;
pub mod track;
