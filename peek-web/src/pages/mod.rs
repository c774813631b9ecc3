mod not_found;
mod preview;

pub use not_found::NotFound;
pub use preview::Preview;
