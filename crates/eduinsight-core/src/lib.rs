//! EduInsight core: validate a VTU scrape request, submit it to the scraping
//! service, and save the spreadsheet it returns.

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod range;
pub mod response;
pub mod storage;
pub mod transport;
pub mod usn;
pub mod validate;
