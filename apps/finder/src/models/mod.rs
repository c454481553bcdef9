pub mod company;
pub mod result;

pub use company::CompanyQuery;
pub use result::{CareerPageResult, SiteResult};
