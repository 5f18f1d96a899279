pub mod access;
pub mod confirm;
pub mod paging;
pub mod payload;
