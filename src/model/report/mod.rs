mod city_record;
mod report_error;
mod report_writer;
mod urban_hex_record;

pub use city_record::CityRecord;
pub use report_error::ReportError;
pub use report_writer::{ReportSummary, ReportWriter};
pub use urban_hex_record::UrbanHexRecord;
