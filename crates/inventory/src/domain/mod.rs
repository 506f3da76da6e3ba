pub mod normalized;
pub mod requests;
pub mod response;
