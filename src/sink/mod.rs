pub mod sink;

pub use sink::{ReportSink, TracingSink, WriterSink};
